//! Vulnerability classification tag

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Classification a tester attaches to a captured request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VulnerabilityStatus {
    /// Not classified yet.
    #[default]
    #[serde(rename = "", alias = "unset")]
    Unset,
    /// Tested and found safe.
    Safe,
    /// Tested and found vulnerable.
    Vulnerable,
}

impl VulnerabilityStatus {
    /// Returns all statuses in selection order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Unset, Self::Safe, Self::Vulnerable]
    }

    /// Returns the label shown in a selection widget.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Safe => "🟢 Safe",
            Self::Vulnerable => "🔴 Vulnerable",
        }
    }

    /// Returns the plain keyword used on the command line and in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Safe => "safe",
            Self::Vulnerable => "vulnerable",
        }
    }

    /// Convert to index for UI combo box.
    #[must_use]
    pub const fn to_index(self) -> i32 {
        match self {
            Self::Unset => 0,
            Self::Safe => 1,
            Self::Vulnerable => 2,
        }
    }

    /// Create from UI combo box index. Out-of-range indices are unset.
    #[must_use]
    pub const fn from_index(index: i32) -> Self {
        match index {
            1 => Self::Safe,
            2 => Self::Vulnerable,
            _ => Self::Unset,
        }
    }
}

impl fmt::Display for VulnerabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VulnerabilityStatus {
    type Err = DomainError;

    /// Accepts either a widget label or a plain keyword, ignoring case.
    fn from_str(s: &str) -> DomainResult<Self> {
        if let Some(status) = Self::all().iter().find(|status| status.label() == s) {
            return Ok(*status);
        }
        match s.trim().to_lowercase().as_str() {
            "" | "unset" | "none" => Ok(Self::Unset),
            "safe" => Ok(Self::Safe),
            "vulnerable" => Ok(Self::Vulnerable),
            _ => Err(DomainError::UnknownVulnerabilityStatus(s.to_string())),
        }
    }
}
