//! Budget aggregation error types.

use govspend_shared::Jurisdiction;
use thiserror::Error;

/// Budget aggregation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// Averages need at least one jurisdiction to divide by.
    #[error("Jurisdiction count must be at least 1")]
    ZeroJurisdictionCount,

    /// A population table was built without an entry for this jurisdiction.
    #[error("No population given for {0}")]
    MissingPopulation(Jurisdiction),

    /// A population of zero would make per-capita figures undefined.
    #[error("Population for {0} must be positive")]
    ZeroPopulation(Jurisdiction),

    /// Amount cannot be negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Category is blank after trimming.
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// A total grew past the largest representable amount.
    #[error("Total exceeds the largest representable amount")]
    Overflow,
}
