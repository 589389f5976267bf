//! # Probe Value Model
//!
//! Protocol-agnostic shape of a single polled value. The transport adapter
//! converts whatever its wire types are into this, so the evaluators never
//! see protocol-specific types.
//!
//! Agents are not consistent about typing: some return table columns as
//! INTEGER, others as a numeric display string. [`ProbeValue::as_int`]
//! accepts both.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeValue {
    Integer(i64),
    Text(String),
}

impl ProbeValue {
    /// Numeric interpretation of the value, if it has one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ProbeValue::Integer(n) => Some(*n),
            ProbeValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for ProbeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeValue::Integer(n) => write!(f, "{n}"),
            ProbeValue::Text(s) => f.write_str(s),
        }
    }
}
