//! The doubling operation
//!
//! `BusinessLogic` is stateless apart from the overflow policy it carries, so a
//! single value can be shared freely across threads.

use serde::{Deserialize, Serialize};

use crate::error::BusinessLogicError;
use crate::overflow::OverflowPolicy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusinessLogic {
    policy: OverflowPolicy,
}

/// One doubling, as reported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubledValue {
    pub initial_value: i32,
    pub doubled_value: i32,
    pub policy: OverflowPolicy,
}

impl BusinessLogic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Returns `initial_value * 2`.
    ///
    /// Overflow wraps in two's complement regardless of the configured policy,
    /// so `i32::MAX` doubles to `-2` and `i32::MIN` doubles to `0`.
    pub fn double_the_value(&self, initial_value: i32) -> i32 {
        initial_value.wrapping_mul(2)
    }

    /// Doubles `initial_value` under the configured overflow policy.
    pub fn try_double_the_value(&self, initial_value: i32) -> Result<i32, BusinessLogicError> {
        let doubled = self.policy.apply(initial_value);
        match &doubled {
            Ok(value) => tracing::debug!(
                initial_value,
                doubled_value = *value,
                policy = %self.policy,
                "Doubled value"
            ),
            Err(_) => tracing::warn!(initial_value, policy = %self.policy, "Doubling overflowed"),
        }
        doubled
    }

    /// Doubles every value in order, stopping at the first overflow.
    pub fn double_all(&self, values: &[i32]) -> Result<Vec<i32>, BusinessLogicError> {
        values
            .iter()
            .map(|&value| self.try_double_the_value(value))
            .collect()
    }

    pub fn describe(&self, initial_value: i32) -> Result<DoubledValue, BusinessLogicError> {
        Ok(DoubledValue {
            initial_value,
            doubled_value: self.try_double_the_value(initial_value)?,
            policy: self.policy,
        })
    }
}
