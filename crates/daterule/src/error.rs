//! Error types for daterule operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DateRuleError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Rule {index} sets both a from/to interval and a recurring months set")]
    AmbiguousRulePeriod { index: usize },
}

pub type Result<T> = std::result::Result<T, DateRuleError>;
