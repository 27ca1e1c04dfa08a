//! Exclude pattern value object
//!
//! A single regular expression tested against POSIX-style paths relative to
//! a compile output directory. A match anywhere in the path excludes the file.

use regex::Regex;

use crate::error::{PackResult, PackagingError};

/// Compiled exclusion pattern
#[derive(Debug, Clone)]
pub struct ExcludePattern {
    regex: Regex,
}

impl ExcludePattern {
    /// Compile a pattern, rejecting invalid regular expressions.
    pub fn new(pattern: &str) -> PackResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| PackagingError::InvalidExcludePattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    /// Compile an optional pattern; empty strings disable filtering.
    pub fn from_option(pattern: Option<&str>) -> PackResult<Option<Self>> {
        match pattern {
            Some(p) if !p.is_empty() => Self::new(p).map(Some),
            _ => Ok(None),
        }
    }

    /// Check whether a relative POSIX path is excluded.
    pub fn is_match(&self, rel_path: &str) -> bool {
        self.regex.is_match(rel_path)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
