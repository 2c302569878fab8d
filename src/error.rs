use colored::Colorize;
use std::fmt;

use crate::overflow::OverflowPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusinessLogicError {
    Overflow { initial_value: i32 },
    InvalidPolicy { value: String },
}

impl BusinessLogicError {
    pub fn overflow(initial_value: i32) -> Self {
        Self::Overflow { initial_value }
    }

    pub fn invalid_policy(value: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            value: value.into(),
        }
    }
}

impl fmt::Display for BusinessLogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { initial_value } => {
                writeln!(
                    f,
                    "{} Integer overflow: doubling {} does not fit in a 32-bit integer",
                    "✗".red().bold(),
                    initial_value.to_string().yellow()
                )?;
                write!(
                    f,
                    "  {} Use --overflow wrap or --overflow saturate to allow it",
                    "→".blue()
                )
            }
            Self::InvalidPolicy { value } => {
                let names: Vec<&str> = OverflowPolicy::ALL.iter().map(|p| p.as_str()).collect();
                writeln!(
                    f,
                    "{} Unknown overflow policy: {}",
                    "✗".red().bold(),
                    value.yellow()
                )?;
                write!(f, "  {} Expected one of: {}", "→".blue(), names.join(", "))
            }
        }
    }
}

impl std::error::Error for BusinessLogicError {}
