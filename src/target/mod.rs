//! Targets and the work queue that carries them.
//!
//! A `Target` is one normalized hostname. `TargetSource` reads targets from a file
//! or stdin and feeds them into a bounded multi-consumer `TargetQueue`.

mod source;

pub use source::{SourceReport, TargetQueue, TargetSource};

use log::warn;

use crate::config::MAX_TARGET_LENGTH;

/// One hostname to probe, lowercased and without surrounding whitespace.
///
/// May carry a `:port` suffix. No scheme or syntax validation is done.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target(String);

impl Target {
    /// Normalizes one input line into a target.
    ///
    /// Returns `None` for blank lines, `#` comments and lines longer than
    /// `MAX_TARGET_LENGTH`.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        if trimmed.len() > MAX_TARGET_LENGTH {
            warn!(
                "Skipping target exceeding maximum length ({} > {}): {}...",
                trimmed.len(),
                MAX_TARGET_LENGTH,
                trimmed.chars().take(50).collect::<String>()
            );
            return None;
        }
        Some(Target(trimmed.to_lowercase()))
    }

    /// The normalized hostname.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Target {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
