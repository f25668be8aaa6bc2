use crate::error::CheckError;
use crate::freshness::{is_stale, resolve_last_updated};
use crate::types::{CheckConfig, Reason, Violation};
use chrono::{DateTime, Utc};

/// Checks every target in declaration order and collects violations.
///
/// Missing targets are recorded without being opened. Any read failure on an
/// existing target aborts the scan.
pub fn scan(config: &CheckConfig, now: DateTime<Utc>) -> Result<Vec<Violation>, CheckError> {
    let mut violations = Vec::new();

    for target in &config.targets {
        let path = config.root.join(&target.path);

        if !path.exists() {
            log::debug!("{}: not found", target.path);
            violations.push(Violation {
                target: target.path.clone(),
                reason: Reason::Missing,
            });
            continue;
        }

        let (last, source) = resolve_last_updated(&path)?;
        log::debug!(
            "{}: last updated {} (from {:?})",
            target.path,
            last.format("%Y-%m-%d %H:%M:%S UTC"),
            source
        );

        if is_stale(now, last, config.max_age_days) {
            violations.push(Violation {
                target: target.path.clone(),
                reason: Reason::Stale {
                    max_age_days: config.max_age_days,
                },
            });
        }
    }

    Ok(violations)
}
