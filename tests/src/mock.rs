//! Scripted in-memory value source for exercising the evaluators without a
//! switch on the network.

use std::collections::HashMap;

use async_trait::async_trait;

use os10check_common::probe::value::ProbeValue;
use os10check_protocols::source::ValueSource;

#[derive(Default)]
pub struct ScriptedSource {
    scalars: HashMap<String, ProbeValue>,
    subtrees: HashMap<String, Vec<ProbeValue>>,
    fail_transport: bool,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts every scalar the health check asks for on a healthy switch.
    pub fn healthy_inventory() -> Self {
        use os10check_protocols::oids;

        let mut source = Self::new();
        source
            .scalar(oids::SYS_NAME, ProbeValue::Text("sw-lab-01".into()))
            .scalar(oids::SYS_OBJECT_ID, ProbeValue::Text("1.3.6.1.4.1.674.11000.5000.100.2.1.2".into()))
            .scalar(oids::SYS_DESCR, ProbeValue::Text("Dell EMC Networking OS10".into()))
            .scalar(oids::CHASSIS_TYPE, ProbeValue::Integer(2))
            .scalar(oids::CHASSIS_HW_REV, ProbeValue::Text("A02".into()))
            .scalar(oids::CHASSIS_PART_NO, ProbeValue::Text("0K2J3D".into()))
            .scalar(oids::CHASSIS_SERVICE_TAG, ProbeValue::Text("ABC1234".into()))
            .scalar(oids::CARD_DESCR, ProbeValue::Text("S4048-ON 10GbE switch".into()))
            .scalar(oids::CARD_HW_REV, ProbeValue::Text("A01".into()))
            .scalar(oids::CARD_PART_NO, ProbeValue::Text("0WKFFP".into()))
            .scalar(oids::CARD_OPER_STATUS, ProbeValue::Integer(1))
            .scalar(oids::CARD_SERVICE_TAG, ProbeValue::Text("ABC1234".into()));
        source
    }

    pub fn scalar(&mut self, oid: &str, value: ProbeValue) -> &mut Self {
        self.scalars.insert(oid.to_string(), value);
        self
    }

    pub fn drop_scalar(&mut self, oid: &str) -> &mut Self {
        self.scalars.remove(oid);
        self
    }

    pub fn subtree(&mut self, oid: &str, codes: &[i64]) -> &mut Self {
        self.subtrees.insert(
            oid.to_string(),
            codes.iter().map(|&c| ProbeValue::Integer(c)).collect(),
        );
        self
    }

    /// Every query fails as if the device timed out.
    pub fn unreachable() -> Self {
        Self {
            fail_transport: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl ValueSource for ScriptedSource {
    async fn get_scalars(&self, oids: &[&str]) -> anyhow::Result<Vec<ProbeValue>> {
        if self.fail_transport {
            anyhow::bail!("scripted timeout");
        }
        Ok(oids
            .iter()
            .filter_map(|oid| self.scalars.get(*oid).cloned())
            .collect())
    }

    async fn walk(&self, oid: &str) -> anyhow::Result<Vec<ProbeValue>> {
        if self.fail_transport {
            anyhow::bail!("scripted timeout");
        }
        Ok(self.subtrees.get(oid).cloned().unwrap_or_default())
    }
}
