//! Spending records and their aggregation.

pub mod aggregator;
pub mod error;
pub mod population;
pub mod types;


pub use aggregator::BudgetAggregator;
pub use error::BudgetError;
pub use population::PopulationTable;
pub use types::{
    ALL_CATEGORIES, BudgetRecord, CategoryFilter, DEFAULT_JURISDICTION_COUNT, DEFAULT_TOP_N,
    DetailRow, DetailSeries,
};
