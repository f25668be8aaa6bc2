use crate::types::Violation;
use colored::Colorize;
use std::process::ExitCode;

pub const STALE_HEADER: &str = "STALE files detected:";
pub const ALL_FRESH: &str = "All target files are fresh enough.";

#[must_use]
pub fn render_lines(violations: &[Violation]) -> Vec<String> {
    if violations.is_empty() {
        return vec![ALL_FRESH.to_string()];
    }

    let mut lines = Vec::with_capacity(violations.len() + 1);
    lines.push(STALE_HEADER.to_string());
    for v in violations {
        lines.push(format!("- {}: {}", v.target, v.reason));
    }
    lines
}

#[must_use]
pub fn exit_code(violations: &[Violation]) -> ExitCode {
    if violations.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

pub fn print_report(violations: &[Violation]) {
    for (i, line) in render_lines(violations).iter().enumerate() {
        if i > 0 {
            println!("{line}");
        } else if violations.is_empty() {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }
}
