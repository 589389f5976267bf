//! Health mode: scalar group assembly and the card-status derivation.

use os10check_common::probe::report::UNREACHABLE_MSG;
use os10check_common::probe::severity::Severity;
use os10check_common::probe::value::ProbeValue;
use os10check_core::inventory;
use os10check_protocols::oids;

use crate::mock::ScriptedSource;

#[tokio::test]
async fn healthy_switch_reports_ok_with_three_lines() {
    let source = ScriptedSource::healthy_inventory();

    let report = inventory::check_system_health(&source).await;

    assert_eq!(report.severity, Severity::Ok);
    assert_eq!(report.messages.len(), 3);
    assert_eq!(
        report.messages[0],
        "sw-lab-01 (1.3.6.1.4.1.674.11000.5000.100.2.1.2 - Dell EMC Networking OS10)"
    );
    assert_eq!(
        report.messages[1],
        "chassis: s4048on (rev. A02) - p/n:0K2J3D - ServiceTag:ABC1234"
    );
    assert_eq!(
        report.messages[2],
        "card: S4048-ON 10GbE switch (rev. A01) - p/n:0WKFFP - ServiceTag:ABC1234 - status:ready"
    );
}

#[tokio::test]
async fn absent_card_is_critical() {
    // cardAbsent(5) is neither ready nor one of the degraded-but-tolerated
    // states.
    let mut source = ScriptedSource::healthy_inventory();
    source.scalar(oids::CARD_OPER_STATUS, ProbeValue::Integer(5));

    let report = inventory::check_system_health(&source).await;

    assert_eq!(report.severity, Severity::Critical);
    assert!(report.messages[2].ends_with("status:cardAbsent"));
}

#[tokio::test]
async fn diag_mode_card_is_warning_when_everything_else_answered() {
    let mut source = ScriptedSource::healthy_inventory();
    source.scalar(oids::CARD_OPER_STATUS, ProbeValue::Integer(4));

    let report = inventory::check_system_health(&source).await;

    assert_eq!(report.severity, Severity::Warning);
}

#[tokio::test]
async fn missing_chassis_group_goes_unknown_but_other_lines_survive() {
    let mut source = ScriptedSource::healthy_inventory();
    source.drop_scalar(oids::CHASSIS_TYPE);

    let report = inventory::check_system_health(&source).await;

    assert_eq!(report.severity, Severity::Unknown);
    // Fatal line lands at the front; identity and card lines are kept.
    assert_eq!(report.messages[0], UNREACHABLE_MSG);
    assert_eq!(report.messages.len(), 3);
    assert!(report.messages[2].ends_with("status:ready"));
}

#[tokio::test]
async fn missing_group_with_diag_card_escalates_to_critical() {
    // The derivation compares raw severity codes: UNKNOWN (3) is not below
    // WARNING (1), so a diagMode card tips the verdict to CRITICAL instead.
    let mut source = ScriptedSource::healthy_inventory();
    source
        .drop_scalar(oids::SYS_NAME)
        .scalar(oids::CARD_OPER_STATUS, ProbeValue::Integer(4));

    let report = inventory::check_system_health(&source).await;

    assert_eq!(report.severity, Severity::Critical);
}

#[tokio::test]
async fn missing_card_group_is_critical() {
    // No card group at all: the reporter assumes offline and the UNKNOWN
    // from the missed fetch is overridden by the card derivation.
    let mut source = ScriptedSource::healthy_inventory();
    source.drop_scalar(oids::CARD_OPER_STATUS);

    let report = inventory::check_system_health(&source).await;

    assert_eq!(report.severity, Severity::Critical);
    assert_eq!(report.messages[0], UNREACHABLE_MSG);
    assert_eq!(report.messages.len(), 3);
}

#[tokio::test]
async fn fully_unreachable_switch_is_critical_with_three_fatal_lines() {
    // Every group misses: three fatal lines, then the offline assumption
    // drives the verdict.
    let source = ScriptedSource::unreachable();

    let report = inventory::check_system_health(&source).await;

    assert_eq!(report.severity, Severity::Critical);
    assert_eq!(report.messages.len(), 3);
    assert!(report.messages.iter().all(|m| m == UNREACHABLE_MSG));
}
