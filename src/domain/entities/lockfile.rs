//! Packager lockfile entity
//!
//! npm keeps a JSON document (`package-lock.json`), yarn a line-oriented text
//! file (`yarn.lock`). Rebasing operates on whichever shape the packager owns.

use serde_json::Value;

/// On-disk format of a packager lockfile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockfileFormat {
    Json,
    Text,
}

/// Parsed lockfile content
#[derive(Debug, Clone, PartialEq)]
pub enum Lockfile {
    Json(Value),
    Text(String),
}

impl Lockfile {
    /// Parse lockfile content according to its format
    pub fn parse(format: LockfileFormat, content: &str) -> Result<Self, serde_json::Error> {
        match format {
            LockfileFormat::Json => serde_json::from_str(content).map(Lockfile::Json),
            LockfileFormat::Text => Ok(Lockfile::Text(content.to_string())),
        }
    }

    pub fn format(&self) -> LockfileFormat {
        match self {
            Lockfile::Json(_) => LockfileFormat::Json,
            Lockfile::Text(_) => LockfileFormat::Text,
        }
    }

    /// Serialize back to file content
    pub fn to_content(&self) -> String {
        match self {
            Lockfile::Json(value) => {
                let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
                out.push('\n');
                out
            }
            Lockfile::Text(text) => text.clone(),
        }
    }
}
