use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_TARGETS: [&str; 2] = [
    ".github/copilot-instructions.md",
    "docs/operation-scenarios.md",
];

pub const DEFAULT_MAX_AGE_DAYS: i64 = 7;

/// A document whose freshness is checked. `path` is relative to the scan root
/// and doubles as the identifier printed in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: String,
}

impl Target {
    pub fn new(path: impl Into<String>) -> Self {
        Target { path: path.into() }
    }
}

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub root: PathBuf,
    pub targets: Vec<Target>,
    pub max_age_days: i64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            root: PathBuf::from("."),
            targets: DEFAULT_TARGETS.iter().map(|p| Target::new(*p)).collect(),
            max_age_days: DEFAULT_MAX_AGE_DAYS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Missing,
    Stale { max_age_days: i64 },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Missing => write!(f, "missing"),
            Reason::Stale { max_age_days } => write!(f, ">{max_age_days}d old"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub target: String,
    pub reason: Reason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_display() {
        assert_eq!(Reason::Missing.to_string(), "missing");
        assert_eq!(Reason::Stale { max_age_days: 7 }.to_string(), ">7d old");
    }

    #[test]
    fn test_default_config() {
        let cfg = CheckConfig::default();
        assert_eq!(cfg.max_age_days, 7);
        assert_eq!(
            cfg.targets,
            vec![
                Target::new(".github/copilot-instructions.md"),
                Target::new("docs/operation-scenarios.md"),
            ]
        );
    }
}
