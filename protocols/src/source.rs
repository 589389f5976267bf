//! # Value Source Port
//!
//! The query boundary the evaluators depend on. One implementation speaks
//! SNMP to a real switch ([`crate::snmp::SnmpSource`]); tests script one in
//! memory.
//!
//! An empty result sequence means "the device gave us nothing" and the
//! caller classifies it, it is not an error at this boundary. `Err` is
//! reserved for transport faults (timeout, unreachable, malformed response).

use async_trait::async_trait;

use os10check_common::probe::value::ProbeValue;

#[async_trait]
pub trait ValueSource {
    /// Fetches the given scalars, preserving request order.
    ///
    /// Scalars the agent does not expose are simply absent from the result,
    /// so a short result marks the group as missing.
    async fn get_scalars(&self, oids: &[&str]) -> anyhow::Result<Vec<ProbeValue>>;

    /// Walks one table column, returning row values in index order.
    async fn walk(&self, oid: &str) -> anyhow::Result<Vec<ProbeValue>>;
}
