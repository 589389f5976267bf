//! # Evaluation Report
//!
//! One evaluation call produces exactly one [`Report`]: a severity plus the
//! ordered, human-readable explanation of every contributing unit. Messages
//! are never reordered after assembly; when a summary exists it is always
//! `messages[0]`.

use crate::probe::severity::Severity;

/// Message emitted whenever the value source yields nothing for a query.
pub const UNREACHABLE_MSG: &str = "Unable to get SNMP metrics from server !";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    pub messages: Vec<String>,
}

impl Report {
    pub fn new(severity: Severity, messages: Vec<String>) -> Self {
        Self { severity, messages }
    }

    /// Fatal outcome: the device could not be queried at all.
    pub fn unreachable() -> Self {
        Self {
            severity: Severity::Unknown,
            messages: vec![UNREACHABLE_MSG.to_string()],
        }
    }
}
