//! Runtime configuration
//!
//! The overflow policy comes from the `--overflow` flag, then the
//! `BUSINESS_LOGIC_OVERFLOW` environment variable, then the default.

use std::env;

use crate::business_logic::BusinessLogic;
use crate::error::BusinessLogicError;
use crate::overflow::OverflowPolicy;

pub const OVERFLOW_ENV_VAR: &str = "BUSINESS_LOGIC_OVERFLOW";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub policy: OverflowPolicy,
    pub verbose: bool,
    pub json: bool,
}

impl Config {
    pub fn resolve(
        cli_policy: Option<OverflowPolicy>,
        verbose: bool,
        json: bool,
    ) -> Result<Self, BusinessLogicError> {
        let policy = match cli_policy {
            Some(policy) => policy,
            None => Self::from_env_value(env::var(OVERFLOW_ENV_VAR).ok().as_deref())?,
        };

        tracing::debug!(policy = %policy, verbose, json, "Resolved configuration");

        Ok(Self {
            policy,
            verbose,
            json,
        })
    }

    /// Parses the environment value, treating unset or blank as the default.
    pub fn from_env_value(value: Option<&str>) -> Result<OverflowPolicy, BusinessLogicError> {
        match value {
            Some(raw) if !raw.trim().is_empty() => raw.parse(),
            _ => Ok(OverflowPolicy::default()),
        }
    }

    pub fn business_logic(&self) -> BusinessLogic {
        BusinessLogic::with_policy(self.policy)
    }
}
