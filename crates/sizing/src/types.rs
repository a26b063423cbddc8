//! Value types for size arithmetic

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub(crate) const KB: u64 = 1024;
pub(crate) const MB: u64 = KB * 1024;
pub(crate) const GB: u64 = MB * 1024;
pub(crate) const TB: u64 = GB * 1024;

/// A quantity of bytes parsed from a human-readable size string
///
/// Sizes use binary multiples: 1 KB = 1024 B, 1 MB = 1024 KB, and so on.
/// Parsing accepts a decimal magnitude followed by one of the suffixes
/// B, KB, MB, GB or TB (case-insensitive), e.g. `"50GB"` or `"1.5 mb"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct SizeValue(u64);

impl SizeValue {
    /// Wrap a raw byte count
    pub const fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Byte count
    pub const fn bytes(&self) -> u64 {
        self.0
    }

    /// Check for a zero size
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for SizeValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim().to_uppercase();
        if input.is_empty() {
            return Err(Error::InvalidSizeFormat(s.to_string()));
        }

        let (num_str, multiplier) = if let Some(num) = input.strip_suffix("TB") {
            (num, TB)
        } else if let Some(num) = input.strip_suffix("GB") {
            (num, GB)
        } else if let Some(num) = input.strip_suffix("MB") {
            (num, MB)
        } else if let Some(num) = input.strip_suffix("KB") {
            (num, KB)
        } else if let Some(num) = input.strip_suffix('B') {
            (num, 1u64)
        } else {
            return Err(Error::InvalidSizeFormat(s.to_string()));
        };

        let magnitude: f64 = num_str
            .trim()
            .parse()
            .map_err(|_| Error::InvalidSizeFormat(s.to_string()))?;

        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(Error::InvalidSizeFormat(s.to_string()));
        }

        Ok(Self((magnitude * multiplier as f64).round() as u64))
    }
}

impl fmt::Display for SizeValue {
    /// Canonical form: the largest unit that divides the byte count exactly,
    /// so `Display` output parses back to the same byte count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, unit) = match self.0 {
            n if n >= TB && n % TB == 0 => (n / TB, "TB"),
            n if n >= GB && n % GB == 0 => (n / GB, "GB"),
            n if n >= MB && n % MB == 0 => (n / MB, "MB"),
            n if n >= KB && n % KB == 0 => (n / KB, "KB"),
            n => (n, "B"),
        };
        write!(f, "{value}{unit}")
    }
}

impl TryFrom<String> for SizeValue {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<SizeValue> for String {
    fn from(size: SizeValue) -> Self {
        size.to_string()
    }
}

/// Disk space required by a planned database, with the safety margin applied
///
/// Data and log files may live on different drives, so each requirement is
/// exposed separately. When both land on the same drive the caller must sum
/// `data` and `log` before comparing against that drive's available space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceRequirement {
    /// Data-drive requirement: file count x per-file size, margined
    pub data: SizeValue,
    /// Log-drive requirement: log size, margined
    pub log: SizeValue,
    /// Combined requirement: (data + log), margined
    pub total: SizeValue,
}
