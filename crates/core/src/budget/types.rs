//! Budget data types.

use govspend_shared::Jurisdiction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;

/// Divisor for the across-jurisdiction category average: 8 states and
/// territories plus the federal entry.
///
/// This is not derived from the data. It has to be kept in step with the
/// population table by hand.
pub const DEFAULT_JURISDICTION_COUNT: u32 = 9;

/// Number of categories shown in a state's drill-down chart.
pub const DEFAULT_TOP_N: usize = 10;

/// Text form of [`CategoryFilter::All`].
pub const ALL_CATEGORIES: &str = "All";

/// One line of the spending dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// Jurisdiction the money is spent by.
    pub state: Jurisdiction,
    /// Spending category, trimmed.
    pub category: String,
    /// Budgeted amount in dollars, or dollars per person once scaled.
    pub total_budget: Decimal,
}

impl BudgetRecord {
    /// Creates a record, trimming the category.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::EmptyCategory` for a blank category and
    /// `BudgetError::NegativeAmount` for an amount below zero.
    pub fn new(
        state: Jurisdiction,
        category: impl AsRef<str>,
        total_budget: Decimal,
    ) -> Result<Self, BudgetError> {
        let category = category.as_ref().trim();
        if category.is_empty() {
            return Err(BudgetError::EmptyCategory);
        }
        if total_budget < Decimal::ZERO {
            return Err(BudgetError::NegativeAmount);
        }
        Ok(Self {
            state,
            category: category.to_string(),
            total_budget,
        })
    }
}

/// Category selection: every category, or exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only records with this category.
    Category(String),
}

impl CategoryFilter {
    /// Returns true if a record with `category` passes the filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(chosen) => chosen == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(trimmed.to_string())
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Category(category) => category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Category(category) => f.write_str(category),
        }
    }
}

/// Which bar of a drill-down pair a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailSeries {
    /// The selected state's own spending.
    State(Jurisdiction),
    /// Average across all jurisdictions.
    Average,
}

/// One bar in a state's drill-down chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    /// Spending category.
    pub category: String,
    /// State or average.
    pub series: DetailSeries,
    /// Amount for this bar.
    pub total_budget: Decimal,
}
