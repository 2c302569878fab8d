pub mod business_logic;
pub mod config;
pub mod error;
pub mod logging;
pub mod overflow;

#[cfg(test)]
mod business_logic_proptest;

pub use business_logic::{BusinessLogic, DoubledValue};
pub use config::Config;
pub use error::BusinessLogicError;
pub use overflow::OverflowPolicy;
