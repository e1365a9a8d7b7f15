//! Logical storage buckets for downloaded study resources.
//!
//! The participant app keeps study-level and gateway-level resources in
//! separate directories under the host's documents root. Each bucket maps
//! 1:1 to a fixed, non-empty directory name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A logical storage bucket, identifying one directory under the
/// documents root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryType {
    /// Per-study resources (consent documents, activity metadata).
    Study,
    /// Gateway-level resources shared across studies.
    Gateway,
}

impl DirectoryType {
    /// Returns the directory name for this bucket. Always non-empty.
    pub fn dir_name(&self) -> &'static str {
        match self {
            DirectoryType::Study => "Study",
            DirectoryType::Gateway => "Gateway",
        }
    }
}

impl fmt::Display for DirectoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for DirectoryType {
    type Err = String;

    /// Parse a bucket name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STUDY" => Ok(DirectoryType::Study),
            "GATEWAY" => Ok(DirectoryType::Gateway),
            _ => Err(format!("Unknown directory type: {s}")),
        }
    }
}
