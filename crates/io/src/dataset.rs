//! Tab-separated spending dataset reader.
//!
//! The file carries a header row with at least `State`, `Category` and
//! `Total Budget` columns, in any order. Other columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use govspend_core::budget::BudgetRecord;
use govspend_shared::Jurisdiction;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::DatasetError;

const STATE_COLUMN: &str = "State";
const CATEGORY_COLUMN: &str = "Category";
const TOTAL_BUDGET_COLUMN: &str = "Total Budget";

/// What to do with a row whose state code is not a known jurisdiction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateCodePolicy {
    /// Log the row and leave it out.
    #[default]
    Skip,
    /// Fail the whole load.
    Reject,
}

impl StateCodePolicy {
    /// Policy for the `strict_states` configuration flag.
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Reject } else { Self::Skip }
    }
}

/// A loaded, immutable dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[BudgetRecord]>,
    skipped: usize,
}

impl Dataset {
    /// Records in file order.
    #[must_use]
    pub fn records(&self) -> &[BudgetRecord] {
        &self.records
    }

    /// A shared handle to the records.
    #[must_use]
    pub fn shared_records(&self) -> Arc<[BudgetRecord]> {
        Arc::clone(&self.records)
    }

    /// Rows left out because of an unknown state code.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no row was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads the dataset at `path`.
///
/// # Errors
///
/// Returns `DatasetError::Open` if the file cannot be opened, and any error
/// [`parse_dataset`] returns.
pub fn load_dataset(path: &Path, policy: StateCodePolicy) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let dataset = parse_dataset(file, policy)?;
    info!(
        path = %path.display(),
        records = dataset.len(),
        skipped = dataset.skipped(),
        "Dataset loaded"
    );
    Ok(dataset)
}

/// Parses tab-separated dataset text.
///
/// # Errors
///
/// Returns `DatasetError::MissingColumn` if a required header is absent,
/// `DatasetError::UnknownState` for an unknown code under
/// [`StateCodePolicy::Reject`], `DatasetError::BadAmount` or
/// `DatasetError::InvalidRecord` for a bad row, and
/// `DatasetError::Malformed` if the text cannot be split into rows.
pub fn parse_dataset(reader: impl Read, policy: StateCodePolicy) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(DatasetError::MissingColumn(name))
    };
    let state_idx = column(STATE_COLUMN)?;
    let category_idx = column(CATEGORY_COLUMN)?;
    let amount_idx = column(TOTAL_BUDGET_COLUMN)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, csv::Position::line);
        let field = |idx: usize| row.get(idx).unwrap_or_default();

        if row.iter().all(|f| f.trim().is_empty()) {
            debug!(line, "Skipping blank row");
            continue;
        }

        let code = field(state_idx);
        let state = match Jurisdiction::from_str(code) {
            Ok(state) => state,
            Err(_) if policy == StateCodePolicy::Skip => {
                warn!(line, code, "Skipping row with unknown state code");
                skipped += 1;
                continue;
            }
            Err(_) => {
                return Err(DatasetError::UnknownState {
                    line,
                    code: code.to_string(),
                });
            }
        };

        let raw_amount = field(amount_idx);
        let amount = parse_amount(raw_amount).ok_or_else(|| DatasetError::BadAmount {
            line,
            value: raw_amount.to_string(),
        })?;

        let record = BudgetRecord::new(state, field(category_idx), amount)
            .map_err(|source| DatasetError::InvalidRecord { line, source })?;
        records.push(record);
    }

    Ok(Dataset {
        records: records.into(),
        skipped,
    })
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
