//! Version extraction with a caller-supplied regular expression

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::version::error::VersionError;

/// A compiled version regex with exactly one capture group.
///
/// The pattern is matched anchored at the start of the candidate string.
/// Trailing characters after the match are allowed, so `v(\d+)` extracts
/// `"1"` from `"v1-final"`.
#[derive(Debug, Clone)]
pub struct VersionPattern {
    regex: Regex,
}

impl VersionPattern {
    /// Compiles `pattern`.
    ///
    /// Fails with [`VersionError::InvalidPattern`] for a malformed regex and
    /// with [`VersionError::CaptureGroupCount`] unless the pattern has exactly
    /// one capture group.
    pub fn new(pattern: &str) -> Result<Self, VersionError> {
        let regex = Regex::new(pattern).map_err(|source| VersionError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        // captures_len counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found != 1 {
            return Err(VersionError::CaptureGroupCount {
                pattern: pattern.to_string(),
                found,
            });
        }

        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the captured version, or `None` when the pattern does not match
    /// at position 0 or the group did not take part in the match.
    pub fn extract(&self, candidate: &str) -> Option<String> {
        // Leftmost-first search returns a match starting at 0 whenever one exists.
        let captures = self.regex.captures(candidate)?;
        if captures.get(0)?.start() != 0 {
            return None;
        }
        captures.get(1).map(|m| m.as_str().to_string())
    }
}

impl FromStr for VersionPattern {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for VersionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiles `pattern` and extracts a version from `candidate` in one step.
pub fn extract_version(candidate: &str, pattern: &str) -> Result<Option<String>, VersionError> {
    Ok(VersionPattern::new(pattern)?.extract(candidate))
}
