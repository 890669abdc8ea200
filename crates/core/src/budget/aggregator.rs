//! Budget aggregation: per-capita scaling, totals, averages, and rankings.
//!
//! Every function here is pure. Derived views are rebuilt from the base
//! records on each call and nothing is cached.

use std::collections::{BTreeMap, HashMap, HashSet};

use govspend_shared::Jurisdiction;
use rust_decimal::Decimal;

use super::error::BudgetError;
use super::population::PopulationTable;
use super::types::{BudgetRecord, CategoryFilter, DetailRow, DetailSeries};

/// Aggregation over spending records.
pub struct BudgetAggregator;

impl BudgetAggregator {
    /// Scales every record to dollars per person.
    ///
    /// Returns a new collection; `records` is not modified.
    #[must_use]
    pub fn to_per_capita(
        records: &[BudgetRecord],
        populations: &PopulationTable,
    ) -> Vec<BudgetRecord> {
        records
            .iter()
            .map(|record| BudgetRecord {
                total_budget: record.total_budget / populations.divisor(record.state),
                ..record.clone()
            })
            .collect()
    }

    /// Records that pass `filter`, in input order.
    #[must_use]
    pub fn filter_by_category(
        records: &[BudgetRecord],
        filter: &CategoryFilter,
    ) -> Vec<BudgetRecord> {
        records
            .iter()
            .filter(|r| filter.matches(&r.category))
            .cloned()
            .collect()
    }

    /// Total budget per state for the records that pass `filter`.
    ///
    /// States with no matching records are absent from the result.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Overflow` if a state's total is not representable.
    pub fn sum_by_state(
        records: &[BudgetRecord],
        filter: &CategoryFilter,
    ) -> Result<BTreeMap<Jurisdiction, Decimal>, BudgetError> {
        let mut totals = BTreeMap::new();
        for record in records.iter().filter(|r| filter.matches(&r.category)) {
            let total = totals.entry(record.state).or_insert(Decimal::ZERO);
            accumulate(total, record.total_budget)?;
        }
        Ok(totals)
    }

    /// Total budget per category, summed over every jurisdiction.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Overflow` if a category's total is not representable.
    pub fn sum_by_category_across_states(
        records: &[BudgetRecord],
    ) -> Result<BTreeMap<String, Decimal>, BudgetError> {
        let mut totals = BTreeMap::new();
        for record in records {
            let total = totals
                .entry(record.category.clone())
                .or_insert(Decimal::ZERO);
            accumulate(total, record.total_budget)?;
        }
        Ok(totals)
    }

    /// Divides each category total by `jurisdiction_count`.
    ///
    /// The count is supplied by the caller rather than derived from the data;
    /// see [`super::DEFAULT_JURISDICTION_COUNT`].
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::ZeroJurisdictionCount` if `jurisdiction_count` is 0.
    pub fn average_by_category_across_jurisdictions(
        totals: &BTreeMap<String, Decimal>,
        jurisdiction_count: u32,
    ) -> Result<BTreeMap<String, Decimal>, BudgetError> {
        if jurisdiction_count == 0 {
            return Err(BudgetError::ZeroJurisdictionCount);
        }
        let divisor = Decimal::from(jurisdiction_count);
        Ok(totals
            .iter()
            .map(|(category, total)| (category.clone(), *total / divisor))
            .collect())
    }

    /// Unique categories in the order they first appear.
    #[must_use]
    pub fn distinct_categories(records: &[BudgetRecord]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut categories = Vec::new();
        for record in records {
            if seen.insert(record.category.as_str()) {
                categories.push(record.category.clone());
            }
        }
        categories
    }

    /// The `n` categories with the largest totals for `state`, largest first.
    ///
    /// Equal totals keep the order in which their categories first appear among
    /// the state's records.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Overflow` if a category's total is not representable.
    pub fn top_n_categories_for_state(
        records: &[BudgetRecord],
        state: Jurisdiction,
        n: usize,
    ) -> Result<Vec<String>, BudgetError> {
        Ok(Self::ranked_categories(records, state)?
            .into_iter()
            .take(n)
            .map(|(category, _)| category)
            .collect())
    }

    /// Rows for a state's drill-down chart.
    ///
    /// For each of the state's top `n` categories, in first-seen order, yields
    /// the state's own total followed by the across-jurisdiction average.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::ZeroJurisdictionCount` if `jurisdiction_count` is 0
    /// and `BudgetError::Overflow` if a total is not representable.
    pub fn state_detail(
        records: &[BudgetRecord],
        state: Jurisdiction,
        n: usize,
        jurisdiction_count: u32,
    ) -> Result<Vec<DetailRow>, BudgetError> {
        let averages = Self::average_by_category_across_jurisdictions(
            &Self::sum_by_category_across_states(records)?,
            jurisdiction_count,
        )?;

        let state_totals = Self::category_totals_for_state(records, state)?;
        let top = Self::top_n_categories_for_state(records, state, n)?;

        let mut rows = Vec::with_capacity(top.len() * 2);
        for (category, total) in state_totals {
            if !top.contains(&category) {
                continue;
            }
            let average = averages.get(&category).copied().unwrap_or(Decimal::ZERO);
            rows.push(DetailRow {
                category: category.clone(),
                series: DetailSeries::State(state),
                total_budget: total,
            });
            rows.push(DetailRow {
                category,
                series: DetailSeries::Average,
                total_budget: average,
            });
        }
        Ok(rows)
    }

    /// Category totals for one state, in first-seen order.
    fn category_totals_for_state(
        records: &[BudgetRecord],
        state: Jurisdiction,
    ) -> Result<Vec<(String, Decimal)>, BudgetError> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<(String, Decimal)> = Vec::new();
        for record in records.iter().filter(|r| r.state == state) {
            if let Some(&slot) = index.get(record.category.as_str()) {
                accumulate(&mut totals[slot].1, record.total_budget)?;
            } else {
                index.insert(record.category.as_str(), totals.len());
                totals.push((record.category.clone(), record.total_budget));
            }
        }
        Ok(totals)
    }

    /// Category totals for one state, largest first. The sort is stable.
    fn ranked_categories(
        records: &[BudgetRecord],
        state: Jurisdiction,
    ) -> Result<Vec<(String, Decimal)>, BudgetError> {
        let mut totals = Self::category_totals_for_state(records, state)?;
        totals.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(totals)
    }
}

/// Adds `amount` to `total` in place.
fn accumulate(total: &mut Decimal, amount: Decimal) -> Result<(), BudgetError> {
    *total = total.checked_add(amount).ok_or(BudgetError::Overflow)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(state: Jurisdiction, category: &str, amount: Decimal) -> BudgetRecord {
        BudgetRecord::new(state, category, amount).unwrap()
    }

    fn huge(amount: &str) -> Decimal {
        Decimal::from_scientific(amount).unwrap()
    }

    fn sample() -> Vec<BudgetRecord> {
        vec![
            record(Jurisdiction::Nsw, "Health", dec!(100)),
            record(Jurisdiction::Nsw, "Education", dec!(50)),
            record(Jurisdiction::Vic, "Health", dec!(40)),
        ]
    }

    fn two_state_populations() -> PopulationTable {
        PopulationTable::default()
            .with_overrides([(Jurisdiction::Nsw, 2), (Jurisdiction::Vic, 4)])
            .unwrap()
    }

    #[test]
    fn test_sum_by_state_all() {
        let totals = BudgetAggregator::sum_by_state(&sample(), &CategoryFilter::All).unwrap();
        assert_eq!(
            totals,
            BTreeMap::from([(Jurisdiction::Nsw, dec!(150)), (Jurisdiction::Vic, dec!(40))])
        );
    }

    #[test]
    fn test_sum_by_state_per_capita() {
        let scaled = BudgetAggregator::to_per_capita(&sample(), &two_state_populations());
        let totals = BudgetAggregator::sum_by_state(&scaled, &CategoryFilter::All).unwrap();
        assert_eq!(
            totals,
            BTreeMap::from([(Jurisdiction::Nsw, dec!(75)), (Jurisdiction::Vic, dec!(10))])
        );
    }

    #[test]
    fn test_to_per_capita_leaves_input_untouched() {
        let records = sample();
        let scaled = BudgetAggregator::to_per_capita(&records, &two_state_populations());
        assert_eq!(records, sample());
        assert_eq!(scaled.len(), records.len());
        assert_eq!(scaled[0].total_budget, dec!(50));
        assert_eq!(scaled[0].category, "Health");
        assert_eq!(scaled[2].total_budget, dec!(10));
    }

    #[test]
    fn test_sum_by_state_single_category() {
        let filter = CategoryFilter::from("Education");
        let totals = BudgetAggregator::sum_by_state(&sample(), &filter).unwrap();
        assert_eq!(totals, BTreeMap::from([(Jurisdiction::Nsw, dec!(50))]));
    }

    #[test]
    fn test_sum_by_state_unknown_category_is_empty() {
        let filter = CategoryFilter::from("Defence");
        assert!(
            BudgetAggregator::sum_by_state(&sample(), &filter)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_average_across_jurisdictions() {
        let totals = BTreeMap::from([("Health".to_string(), dec!(140))]);
        let averages =
            BudgetAggregator::average_by_category_across_jurisdictions(&totals, 2).unwrap();
        assert_eq!(averages, BTreeMap::from([("Health".to_string(), dec!(70))]));
    }

    #[test]
    fn test_average_rejects_zero_count() {
        let totals = BTreeMap::from([("Health".to_string(), dec!(140))]);
        assert_eq!(
            BudgetAggregator::average_by_category_across_jurisdictions(&totals, 0),
            Err(BudgetError::ZeroJurisdictionCount)
        );
    }

    #[test]
    fn test_sum_by_category_across_states() {
        let totals = BudgetAggregator::sum_by_category_across_states(&sample()).unwrap();
        assert_eq!(totals.get("Health"), Some(&dec!(140)));
        assert_eq!(totals.get("Education"), Some(&dec!(50)));
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let records = vec![
            record(Jurisdiction::Vic, "Transport", dec!(1)),
            record(Jurisdiction::Nsw, " Health ", dec!(1)),
            record(Jurisdiction::Qld, "Transport", dec!(1)),
            record(Jurisdiction::Qld, "Health", dec!(1)),
        ];
        assert_eq!(
            BudgetAggregator::distinct_categories(&records),
            vec!["Transport".to_string(), "Health".to_string()]
        );
    }

    #[test]
    fn test_top_n_sorted_descending() {
        let records = vec![
            record(Jurisdiction::Nsw, "Small", dec!(5)),
            record(Jurisdiction::Nsw, "Large", dec!(500)),
            record(Jurisdiction::Nsw, "Medium", dec!(50)),
            record(Jurisdiction::Nsw, "Small", dec!(100)),
            record(Jurisdiction::Vic, "Huge", dec!(10_000)),
        ];
        assert_eq!(
            BudgetAggregator::top_n_categories_for_state(&records, Jurisdiction::Nsw, 10).unwrap(),
            vec!["Large", "Small", "Medium"]
        );
        assert_eq!(
            BudgetAggregator::top_n_categories_for_state(&records, Jurisdiction::Nsw, 2).unwrap(),
            vec!["Large", "Small"]
        );
    }

    #[test]
    fn test_top_n_ties_keep_first_seen_order() {
        let records = vec![
            record(Jurisdiction::Sa, "Beta", dec!(10)),
            record(Jurisdiction::Sa, "Alpha", dec!(10)),
            record(Jurisdiction::Sa, "Gamma", dec!(20)),
            record(Jurisdiction::Sa, "Delta", dec!(10)),
        ];
        assert_eq!(
            BudgetAggregator::top_n_categories_for_state(&records, Jurisdiction::Sa, 3).unwrap(),
            vec!["Gamma", "Beta", "Alpha"]
        );
    }

    #[test]
    fn test_top_n_for_state_without_records() {
        assert!(
            BudgetAggregator::top_n_categories_for_state(&sample(), Jurisdiction::Tas, 10)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_state_detail_pairs_state_and_average() {
        let rows =
            BudgetAggregator::state_detail(&sample(), Jurisdiction::Nsw, 10, 2).unwrap();
        assert_eq!(
            rows,
            vec![
                DetailRow {
                    category: "Health".into(),
                    series: DetailSeries::State(Jurisdiction::Nsw),
                    total_budget: dec!(100),
                },
                DetailRow {
                    category: "Health".into(),
                    series: DetailSeries::Average,
                    total_budget: dec!(70),
                },
                DetailRow {
                    category: "Education".into(),
                    series: DetailSeries::State(Jurisdiction::Nsw),
                    total_budget: dec!(50),
                },
                DetailRow {
                    category: "Education".into(),
                    series: DetailSeries::Average,
                    total_budget: dec!(25),
                },
            ]
        );
    }

    #[test]
    fn test_state_detail_keeps_first_seen_order_within_top_n() {
        let records = vec![
            record(Jurisdiction::Wa, "Small", dec!(1)),
            record(Jurisdiction::Wa, "Large", dec!(9)),
            record(Jurisdiction::Wa, "Middle", dec!(5)),
        ];
        let rows = BudgetAggregator::state_detail(&records, Jurisdiction::Wa, 2, 9).unwrap();
        let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["Large", "Large", "Middle", "Middle"]);
    }

    #[test]
    fn test_totals_past_decimal_max_are_errors() {
        let records = vec![
            record(Jurisdiction::Nsw, "Health", huge("5e28")),
            record(Jurisdiction::Nsw, "Education", huge("5e28")),
            record(Jurisdiction::Vic, "Health", huge("5e28")),
        ];

        assert_eq!(
            BudgetAggregator::sum_by_state(&records, &CategoryFilter::All),
            Err(BudgetError::Overflow)
        );
        assert_eq!(
            BudgetAggregator::sum_by_category_across_states(&records),
            Err(BudgetError::Overflow)
        );
        assert_eq!(
            BudgetAggregator::state_detail(&records, Jurisdiction::Nsw, 10, 9),
            Err(BudgetError::Overflow)
        );

        // Each state's Health total alone is representable.
        let health = CategoryFilter::from("Health");
        let totals = BudgetAggregator::sum_by_state(&records, &health).unwrap();
        assert_eq!(totals.get(&Jurisdiction::Nsw), Some(&huge("5e28")));
    }

    #[test]
    fn test_top_n_overflow_within_one_category() {
        let records = vec![
            record(Jurisdiction::Qld, "Roads", huge("6e28")),
            record(Jurisdiction::Qld, "Roads", huge("6e28")),
        ];
        assert_eq!(
            BudgetAggregator::top_n_categories_for_state(&records, Jurisdiction::Qld, 10),
            Err(BudgetError::Overflow)
        );
    }
}
