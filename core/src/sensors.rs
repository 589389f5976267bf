//! # Threshold Comparator
//!
//! Classifies the chassis and card temperature sensors against the
//! warning/critical bounds. Escalation is monotonic within one evaluation,
//! and the per-reading message depends on the severity *at that point in the
//! scan*: once CRITICAL has been reached, a later reading over the critical
//! bound renders as a plain line.

use tracing::debug;

use os10check_common::probe::report::Report;
use os10check_common::probe::severity::Severity;
use os10check_common::probe::value::ProbeValue;
use os10check_protocols::oids;
use os10check_protocols::source::ValueSource;

const TEMP_OIDS: [&str; 2] = [oids::CHASSIS_TEMP, oids::CARD_TEMP];

/// Fetches both temperature scalars and compares them. Transport faults are
/// classified like an empty result: UNKNOWN, never a propagated error. The
/// pair is all-or-nothing, same as the inventory scalar groups: a verdict
/// derived from half the sensors would be misleading.
pub async fn check_temperatures(source: &dyn ValueSource, warn: i64, crit: i64) -> Report {
    let values = match source.get_scalars(&TEMP_OIDS).await {
        Ok(values) if values.len() == TEMP_OIDS.len() => values,
        Ok(values) => {
            debug!(got = values.len(), want = TEMP_OIDS.len(), "temperature scalars incomplete");
            Vec::new()
        }
        Err(e) => {
            debug!(error = %e, "temperature fetch failed");
            Vec::new()
        }
    };

    let readings = decode_readings(&values);
    evaluate_readings(&readings, warn, crit)
}

/// Drops values with no numeric interpretation; the comparator only sees
/// degrees.
fn decode_readings(values: &[ProbeValue]) -> Vec<i64> {
    values
        .iter()
        .filter_map(|value| {
            let reading = value.as_int();
            if reading.is_none() {
                debug!(%value, "discarding non-numeric temperature value");
            }
            reading
        })
        .collect()
}

/// Compares one snapshot of readings (°C) against the bounds.
pub fn evaluate_readings(readings: &[i64], warn: i64, crit: i64) -> Report {
    if readings.is_empty() {
        return Report::unreachable();
    }

    let mut severity = Severity::Ok;
    let mut messages: Vec<String> = Vec::with_capacity(readings.len() + 1);

    for &reading in readings {
        if reading > crit && severity < Severity::Critical {
            severity = Severity::Critical;
            messages.push(format!(
                "temperature sensor at {reading} °C exceed critical threshold ({crit}°C)"
            ));
        } else if reading > warn && severity < Severity::Warning {
            severity = Severity::Warning;
            messages.push(format!(
                "temperature sensor at {reading} °C exceed warning threshold ({warn}°C)"
            ));
        } else {
            messages.push(format!("temperature sensor at {reading} °C"));
        }
    }

    if severity == Severity::Ok {
        messages.insert(0, "all temperature sensors OK".to_string());
    }

    Report::new(severity, messages)
}
