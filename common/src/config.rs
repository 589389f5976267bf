//! # Probe Configuration
//!
//! Resolved invocation parameters handed to the evaluators. The binary parses
//! the command line; this module owns the mode keyword and the mode-dependent
//! threshold defaults, so the defaults live next to the type they belong to.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which evaluator a single invocation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fan tray operational statuses.
    Fans,
    /// Power supply operational statuses.
    Power,
    /// System identity, chassis and active card health.
    Health,
    /// Chassis and card temperature sensors.
    Temp,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown mode '{0}' (expected fans | power | health | temp)")]
pub struct ModeParseError(String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fans" => Ok(Mode::Fans),
            "power" => Ok(Mode::Power),
            "health" => Ok(Mode::Health),
            "temp" => Ok(Mode::Temp),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Fans => "fans",
            Mode::Power => "power",
            Mode::Health => "health",
            Mode::Temp => "temp",
        };
        f.write_str(name)
    }
}

impl Mode {
    /// Default (warning, critical) bounds when the operator sets none.
    ///
    /// Fans and power count failed units, temp compares degrees Celsius.
    /// Health mode takes no thresholds; its defaults are inert.
    pub fn default_thresholds(self) -> (i64, i64) {
        match self {
            Mode::Fans => (1, 2),
            Mode::Power => (0, 1),
            Mode::Temp => (50, 60),
            Mode::Health => (0, 0),
        }
    }
}

/// Fully resolved configuration for one probe run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Switch address or hostname. Opaque to the evaluators.
    pub host: String,
    /// SNMPv2 community string.
    pub community: String,
    pub mode: Mode,
    pub warning: i64,
    pub critical: i64,
}

impl Config {
    /// Applies mode-dependent defaults for thresholds the operator left unset.
    pub fn resolve(
        host: String,
        community: String,
        mode: Mode,
        warning: Option<i64>,
        critical: Option<i64>,
    ) -> Self {
        let (default_warn, default_crit) = mode.default_thresholds();
        Self {
            host,
            community,
            mode,
            warning: warning.unwrap_or(default_warn),
            critical: critical.unwrap_or(default_crit),
        }
    }
}
