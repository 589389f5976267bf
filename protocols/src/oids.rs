//! # OS10 MIB Object Identifiers
//!
//! Static addresses of everything the probe polls. The Dell enterprise
//! subtree (`DELLEMC-OS10-CHASSIS-MIB`) hangs off `1.3.6.1.4.1.674`; system
//! identity comes from standard MIB-2 scalars.

/// MIB-2 sysDescr.0
pub const SYS_DESCR: &str = "1.3.6.1.2.1.1.1.0";
/// MIB-2 sysObjectID.0
pub const SYS_OBJECT_ID: &str = "1.3.6.1.2.1.1.2.0";
/// MIB-2 sysName.0
pub const SYS_NAME: &str = "1.3.6.1.2.1.1.5.0";

/// os10FanTrayOperStatus column, one row per fan tray.
pub const FAN_TRAY_OPER_STATUS: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.2.2.1.4";
/// os10PowerSupplyOperStatus column, one row per PSU.
pub const POWER_SUPPLY_OPER_STATUS: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.2.1.1.4";

/// os10ChassisTemp of chassis 1.
pub const CHASSIS_TEMP: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.3.1.11.1";
/// os10CardTemp of card 1.1.
pub const CARD_TEMP: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.5.1.1";

pub const CHASSIS_TYPE: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.3.1.2.1";
pub const CHASSIS_HW_REV: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.3.1.6.1";
pub const CHASSIS_PART_NO: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.3.1.4.1";
pub const CHASSIS_SERVICE_TAG: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.3.1.7.1";

pub const CARD_DESCR: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.3.1.1";
pub const CARD_HW_REV: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.8.1.1";
pub const CARD_PART_NO: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.6.1.1";
pub const CARD_OPER_STATUS: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.4.1.1";
pub const CARD_SERVICE_TAG: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.9.1.1";
