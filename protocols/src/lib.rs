pub mod oids;
pub mod snmp;
pub mod source;
