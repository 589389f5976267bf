use clap::Parser;

use os10check_common::config::{Config, Mode};

/// Nagios check plugin for Dell | EMC S-series switches running OS10
/// firmware. Polls hardware health over the Dell enterprise SNMP MIBs.
#[derive(Debug, Parser)]
#[command(name = "check_os10", version)]
pub struct CommandLine {
    /// Switch IP address or hostname
    #[arg(short = 'H', long)]
    pub host: String,

    /// SNMPv2 community
    #[arg(short = 'C', long, default_value = "public")]
    pub community: String,

    /// Check mode (fans | power | health | temp)
    #[arg(short, long)]
    pub mode: Mode,

    /// Warning threshold; failed-unit count for fans/power, °C for temp
    #[arg(short, long)]
    pub warning: Option<i64>,

    /// Critical threshold; failed-unit count for fans/power, °C for temp
    #[arg(short, long)]
    pub critical: Option<i64>,
}

/// Exit code for rejected invocations (missing/unknown arguments).
///
/// clap's own error path exits with 2, which a supervisor would read as
/// CRITICAL; usage errors must stay outside the severity model.
pub const USAGE_EXIT_CODE: i32 = 1;

impl CommandLine {
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(e) if e.use_stderr() => {
                let _ = e.print();
                std::process::exit(USAGE_EXIT_CODE);
            }
            // --help / --version render to stdout and exit 0.
            Err(e) => e.exit(),
        }
    }

    pub fn into_config(self) -> Config {
        Config::resolve(
            self.host,
            self.community,
            self.mode,
            self.warning,
            self.critical,
        )
    }
}
