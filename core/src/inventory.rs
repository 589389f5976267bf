//! # System Inventory Reporter
//!
//! Health mode: three fixed scalar groups (identity, chassis, active card)
//! are fetched in order, and the card's operational status decides the
//! verdict afterwards. A missing group forces UNKNOWN with a fatal line at
//! the front of the report, but the remaining groups are still fetched so
//! the operator sees whatever the switch did answer.
//!
//! The card derivation compares against the numeric severity, so a missing
//! group (UNKNOWN, code 3) followed by a `diagMode` card lands on CRITICAL,
//! not WARNING.

use tracing::debug;

use os10check_common::probe::report::{Report, UNREACHABLE_MSG};
use os10check_common::probe::severity::Severity;
use os10check_common::probe::value::ProbeValue;
use os10check_protocols::oids;
use os10check_protocols::source::ValueSource;

use crate::codes::{CardStatus, chassis_model};

const IDENTITY_OIDS: [&str; 3] = [oids::SYS_NAME, oids::SYS_OBJECT_ID, oids::SYS_DESCR];
const CHASSIS_OIDS: [&str; 4] = [
    oids::CHASSIS_TYPE,
    oids::CHASSIS_HW_REV,
    oids::CHASSIS_PART_NO,
    oids::CHASSIS_SERVICE_TAG,
];
const CARD_OIDS: [&str; 5] = [
    oids::CARD_DESCR,
    oids::CARD_HW_REV,
    oids::CARD_PART_NO,
    oids::CARD_OPER_STATUS,
    oids::CARD_SERVICE_TAG,
];

pub async fn check_system_health(source: &dyn ValueSource) -> Report {
    let mut severity = Severity::Ok;
    let mut messages: Vec<String> = Vec::new();
    // Until the card group proves otherwise, assume the worst benign state.
    let mut card_status: Option<CardStatus> = Some(CardStatus::Offline);

    match fetch_group(source, &IDENTITY_OIDS).await {
        Some(vals) => messages.push(format!("{} ({} - {})", vals[0], vals[1], vals[2])),
        None => mark_unreachable(&mut severity, &mut messages),
    }

    match fetch_group(source, &CHASSIS_OIDS).await {
        Some(vals) => {
            let model = vals[0].as_int().map_or("unknown", chassis_model);
            messages.push(format!(
                "chassis: {model} (rev. {}) - p/n:{} - ServiceTag:{}",
                vals[1], vals[2], vals[3]
            ));
        }
        None => mark_unreachable(&mut severity, &mut messages),
    }

    match fetch_group(source, &CARD_OIDS).await {
        Some(vals) => {
            card_status = vals[3].as_int().and_then(CardStatus::from_code);
            let label = match card_status {
                Some(status) => status.label().to_string(),
                None => format!("unrecognized({})", vals[3]),
            };
            messages.push(format!(
                "card: {} (rev. {}) - p/n:{} - ServiceTag:{} - status:{label}",
                vals[0], vals[1], vals[2], vals[4]
            ));
        }
        None => mark_unreachable(&mut severity, &mut messages),
    }

    // Runs after all three fetches, independent of the counting done above.
    match card_status {
        Some(CardStatus::Ready) => {}
        Some(CardStatus::DiagMode) | Some(CardStatus::Offline)
            if severity < Severity::Warning =>
        {
            severity = Severity::Warning;
        }
        _ => severity = Severity::Critical,
    }

    Report::new(severity, messages)
}

fn mark_unreachable(severity: &mut Severity, messages: &mut Vec<String>) {
    *severity = Severity::Unknown;
    messages.insert(0, UNREACHABLE_MSG.to_string());
}

/// A group is usable only when every scalar in it came back.
async fn fetch_group(source: &dyn ValueSource, oids: &[&str]) -> Option<Vec<ProbeValue>> {
    match source.get_scalars(oids).await {
        Ok(vals) if vals.len() == oids.len() => Some(vals),
        Ok(vals) => {
            debug!(got = vals.len(), want = oids.len(), "scalar group incomplete");
            None
        }
        Err(e) => {
            debug!(error = %e, "scalar group fetch failed");
            None
        }
    }
}
