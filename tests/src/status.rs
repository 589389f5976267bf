//! End-to-end aggregation through the value-source boundary: fans and power
//! modes against a scripted switch.

use os10check_common::probe::report::UNREACHABLE_MSG;
use os10check_common::probe::severity::Severity;
use os10check_core::status;
use os10check_protocols::oids;

use crate::mock::ScriptedSource;

#[tokio::test]
async fn fan_walk_with_all_up_is_ok() {
    let mut source = ScriptedSource::new();
    source.subtree(oids::FAN_TRAY_OPER_STATUS, &[1, 1, 1, 1]);

    let report =
        status::check_oper_status(&source, oids::FAN_TRAY_OPER_STATUS, "fan", 1, 2).await;

    assert_eq!(report.severity, Severity::Ok);
    assert_eq!(report.messages.len(), 5);
    assert_eq!(report.messages[0], "all fan(s) OK");
}

#[tokio::test]
async fn psu_walk_with_one_down_stays_ok_under_default_power_thresholds() {
    // Power defaults are warn=0, crit=1: countfail=1 satisfies neither
    // strict '<' check, so the verdict stays OK with a failure summary.
    let mut source = ScriptedSource::new();
    source.subtree(oids::POWER_SUPPLY_OPER_STATUS, &[1, 2]);

    let report =
        status::check_oper_status(&source, oids::POWER_SUPPLY_OPER_STATUS, "PSU", 0, 1).await;

    assert_eq!(report.severity, Severity::Ok);
    assert_eq!(report.messages[0], "failed or error found for PSU");
    assert_eq!(report.messages[2], "PSU number 2 reported as down");
}

#[tokio::test]
async fn missing_subtree_is_fatal_unknown() {
    let source = ScriptedSource::new();

    let report =
        status::check_oper_status(&source, oids::FAN_TRAY_OPER_STATUS, "fan", 1, 2).await;

    assert_eq!(report.severity, Severity::Unknown);
    assert_eq!(report.messages, vec![UNREACHABLE_MSG.to_string()]);
}

#[tokio::test]
async fn transport_fault_is_classified_not_propagated() {
    let source = ScriptedSource::unreachable();

    let report =
        status::check_oper_status(&source, oids::FAN_TRAY_OPER_STATUS, "fan", 1, 2).await;

    assert_eq!(report.severity, Severity::Unknown);
    assert_eq!(report.messages, vec![UNREACHABLE_MSG.to_string()]);
}
