//! Overflow handling for integer doubling
//!
//! Doubling an `i32` overflows for every input outside
//! `i32::MIN / 2..=i32::MAX / 2`. The policy decides what happens then.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BusinessLogicError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's-complement wrap-around, matching plain `int` arithmetic.
    #[default]
    Wrap,
    /// Clamp to `i32::MAX` or `i32::MIN`.
    Saturate,
    /// Report overflow as an error.
    Checked,
}

impl OverflowPolicy {
    pub const ALL: [OverflowPolicy; 3] = [Self::Wrap, Self::Saturate, Self::Checked];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::Saturate => "saturate",
            Self::Checked => "checked",
        }
    }

    /// Multiplies `value` by two under this policy.
    pub fn apply(&self, value: i32) -> Result<i32, BusinessLogicError> {
        match self {
            Self::Wrap => Ok(value.wrapping_mul(2)),
            Self::Saturate => Ok(value.saturating_mul(2)),
            Self::Checked => value
                .checked_mul(2)
                .ok_or_else(|| BusinessLogicError::overflow(value)),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = BusinessLogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wrap" | "wrapping" => Ok(Self::Wrap),
            "saturate" | "saturating" => Ok(Self::Saturate),
            "checked" => Ok(Self::Checked),
            _ => Err(BusinessLogicError::invalid_policy(s)),
        }
    }
}
