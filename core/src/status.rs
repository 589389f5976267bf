//! # Status Aggregator
//!
//! Reduces one walked column of operational statuses (fan trays or PSUs) to
//! a single severity plus one detail line per unit.
//!
//! Two behaviors here are contractual; operator alerting is tuned around
//! them, so they must not be "fixed":
//!
//! * An `unknown(4)` unit forces the overall result to UNKNOWN, but the walk
//!   still runs to completion so the report lists every unit. Only the
//!   counted-failure interpretation is skipped, never the enumeration.
//! * Threshold checks are strict `<`, warning first, critical second. A
//!   failure count satisfying both lands on CRITICAL; a count meeting or
//!   exceeding both bounds escalates nothing and the verdict stays OK with a
//!   failure summary.

use tracing::debug;

use os10check_common::probe::report::Report;
use os10check_common::probe::severity::Severity;
use os10check_common::probe::value::ProbeValue;
use os10check_protocols::source::ValueSource;

use crate::codes::OperStatus;

/// Walks the status column at `oid` and aggregates it. Transport faults are
/// classified like an empty walk: UNKNOWN, never a propagated error.
pub async fn check_oper_status(
    source: &dyn ValueSource,
    oid: &str,
    unit: &str,
    warn_count: i64,
    crit_count: i64,
) -> Report {
    let values = match source.walk(oid).await {
        Ok(values) => values,
        Err(e) => {
            debug!(oid, error = %e, "status walk failed");
            Vec::new()
        }
    };
    evaluate_oper_statuses(&values, unit, warn_count, crit_count)
}

/// Aggregates one snapshot of per-unit statuses.
///
/// `unit` is the label used in messages ("fan", "PSU").
pub fn evaluate_oper_statuses(
    values: &[ProbeValue],
    unit: &str,
    warn_count: i64,
    crit_count: i64,
) -> Report {
    if values.is_empty() {
        return Report::unreachable();
    }

    let mut severity = Severity::Ok;
    let mut countfail: i64 = 0;
    let mut messages: Vec<String> = Vec::with_capacity(values.len() + 1);

    for (i, value) in values.iter().enumerate() {
        let status = value.as_int().and_then(OperStatus::from_code);
        match status {
            Some(OperStatus::Up) => {}
            Some(OperStatus::Unknown) => severity = Severity::Unknown,
            // Anything else, including codes outside the MIB table, is a
            // failed unit.
            Some(_) | None => countfail += 1,
        }

        let label = match status {
            Some(status) => status.label().to_string(),
            None => format!("unrecognized({value})"),
        };
        messages.push(format!("{unit} number {} reported as {label}", i + 1));
    }

    if severity != Severity::Unknown {
        if countfail == 0 {
            messages.insert(0, format!("all {unit}(s) OK"));
        } else {
            messages.insert(0, format!("failed or error found for {unit}"));
            if countfail < warn_count {
                severity = Severity::Warning;
            }
            if countfail < crit_count {
                severity = Severity::Critical;
            }
        }
    }

    Report::new(severity, messages)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
