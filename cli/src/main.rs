mod commands;
mod terminal;

use tracing::warn;

use commands::CommandLine;
use os10check_common::config::Mode;
use os10check_common::probe::report::Report;
use os10check_core::{inventory, sensors, status};
use os10check_protocols::oids;
use os10check_protocols::snmp::SnmpSource;
use terminal::print;

// One snapshot per invocation: query, aggregate, print, exit with the
// severity's code. Sequential blocking queries only, hence the
// current-thread runtime.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CommandLine::parse_args();
    terminal::logging::init();

    let cfg = args.into_config();

    let source = match SnmpSource::connect(&cfg.host, &cfg.community).await {
        Ok(source) => source,
        Err(e) => {
            warn!(host = %cfg.host, error = %e, "SNMP session setup failed");
            let report = Report::unreachable();
            print::report(&report);
            std::process::exit(report.severity.exit_code());
        }
    };

    let report = match cfg.mode {
        Mode::Fans => {
            status::check_oper_status(
                &source,
                oids::FAN_TRAY_OPER_STATUS,
                "fan",
                cfg.warning,
                cfg.critical,
            )
            .await
        }
        Mode::Power => {
            status::check_oper_status(
                &source,
                oids::POWER_SUPPLY_OPER_STATUS,
                "PSU",
                cfg.warning,
                cfg.critical,
            )
            .await
        }
        Mode::Temp => sensors::check_temperatures(&source, cfg.warning, cfg.critical).await,
        Mode::Health => inventory::check_system_health(&source).await,
    };

    print::report(&report);
    std::process::exit(report.severity.exit_code());
}
