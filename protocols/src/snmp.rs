//! # SNMPv2c Value Source
//!
//! Adapter speaking SNMP to the switch through [`csnmp`]. All wire types are
//! converted to [`ProbeValue`] at this boundary so the evaluators stay
//! protocol-agnostic.

use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use csnmp::{ObjectIdentifier, ObjectValue, Snmp2cClient};
use tracing::debug;

use os10check_common::probe::value::ProbeValue;

use crate::source::ValueSource;

const SNMP_PORT: u16 = 161;
const SNMP_TIMEOUT: Duration = Duration::from_secs(5);
const WALK_MAX_REPETITIONS: u32 = 10;

pub struct SnmpSource {
    client: Snmp2cClient,
}

impl SnmpSource {
    /// Binds a client for the given switch. `host` may be an IP address, a
    /// hostname, or either with an explicit `:port`.
    pub async fn connect(host: &str, community: &str) -> anyhow::Result<Self> {
        let target = resolve_target(host)?;
        let client = Snmp2cClient::new(
            target,
            community.as_bytes().to_vec(),
            None,
            Some(SNMP_TIMEOUT),
        )
        .await
        .with_context(|| format!("failed to set up SNMP client for {target}"))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ValueSource for SnmpSource {
    async fn get_scalars(&self, oids: &[&str]) -> anyhow::Result<Vec<ProbeValue>> {
        let mut values = Vec::with_capacity(oids.len());
        for &oid in oids {
            let parsed = parse_oid(oid)?;
            // A scalar the agent cannot serve is reported as absent, not as
            // a hard fault; the evaluator decides what a short group means.
            match self.client.get(parsed).await {
                Ok(value) => values.push(convert(&value)),
                Err(e) => debug!(oid, error = %e, "scalar get failed"),
            }
        }
        Ok(values)
    }

    async fn walk(&self, oid: &str) -> anyhow::Result<Vec<ProbeValue>> {
        let parsed = parse_oid(oid)?;
        let rows = self
            .client
            .walk_bulk(parsed, 0, WALK_MAX_REPETITIONS)
            .await
            .with_context(|| format!("walk of {oid} failed"))?;

        // BTreeMap keys are in OID order, which is table index order.
        Ok(rows.values().map(convert).collect())
    }
}

fn parse_oid(oid: &str) -> anyhow::Result<ObjectIdentifier> {
    oid.trim_start_matches('.')
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid OID '{oid}': {e:?}"))
}

fn resolve_target(host: &str) -> anyhow::Result<SocketAddr> {
    if let Ok(addr) = host.parse::<SocketAddr>() {
        return Ok(addr);
    }
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, SNMP_PORT));
    }
    (host, SNMP_PORT)
        .to_socket_addrs()
        .with_context(|| format!("failed to resolve host '{host}'"))?
        .next()
        .with_context(|| format!("no address found for host '{host}'"))
}

fn convert(value: &ObjectValue) -> ProbeValue {
    match value {
        ObjectValue::Integer(n) => ProbeValue::Integer(i64::from(*n)),
        ObjectValue::Counter32(n) | ObjectValue::Unsigned32(n) | ObjectValue::TimeTicks(n) => {
            ProbeValue::Integer(i64::from(*n))
        }
        ObjectValue::Counter64(n) => ProbeValue::Integer(*n as i64),
        ObjectValue::String(bytes) | ObjectValue::Opaque(bytes) => {
            ProbeValue::Text(String::from_utf8_lossy(bytes).into_owned())
        }
        ObjectValue::ObjectId(oid) => ProbeValue::Text(oid.to_string()),
        ObjectValue::IpAddress(ip) => ProbeValue::Text(ip.to_string()),
    }
}
