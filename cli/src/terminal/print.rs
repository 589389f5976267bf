//! Plugin output framing.
//!
//! The supervisor parses stdout: the severity label, `": "`, then every
//! report message on its own line, first of which shares the label's line.
//! Color is applied to the label only; `colored` drops it automatically
//! when stdout is not a terminal.

use colored::*;

use os10check_common::probe::report::Report;
use os10check_common::probe::severity::Severity;

pub fn report(report: &Report) {
    let label = report.severity.label();
    let tag: ColoredString = match report.severity {
        Severity::Ok => label.green().bold(),
        Severity::Warning => label.yellow().bold(),
        Severity::Critical => label.red().bold(),
        Severity::Unknown => label.magenta().bold(),
    };

    print!("{tag}: ");
    for message in &report.messages {
        println!("{message}");
    }
}
