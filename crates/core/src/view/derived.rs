//! Views derived from the base dataset for one view state.

use std::collections::BTreeMap;

use govspend_shared::Jurisdiction;
use rust_decimal::Decimal;
use serde::Serialize;

use super::state::{RenderMode, ViewState};
use crate::budget::{
    BudgetAggregator, BudgetError, BudgetRecord, CategoryFilter, DEFAULT_JURISDICTION_COUNT,
    DEFAULT_TOP_N, DetailRow, PopulationTable,
};
use crate::choropleth::{LogColorScale, MapRegion, RegionShade, shade_regions};

/// Tunables for derived views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    /// Categories in a state's drill-down chart.
    pub top_n: usize,
    /// Divisor for the across-jurisdiction average.
    pub jurisdiction_count: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            jurisdiction_count: DEFAULT_JURISDICTION_COUNT,
        }
    }
}

/// Per-state totals for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChart {
    /// Category, or `"All"`.
    pub category: CategoryFilter,
    /// Total per state.
    pub totals: BTreeMap<Jurisdiction, Decimal>,
}

/// The choropleth map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapView {
    /// Category the map is coloured by.
    pub category: CategoryFilter,
    /// Total per state for that category.
    pub totals: BTreeMap<Jurisdiction, Decimal>,
    /// Colour scale, absent when no state has a positive total.
    pub scale: Option<LogColorScale>,
    /// One fill per boundary feature.
    pub regions: Vec<RegionShade>,
}

/// What the panel beside the map shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SidePanel {
    /// Nothing selected.
    Empty,
    /// Per-state totals for the category chosen in the dropdown, `"All"`
    /// included.
    Category(CategoryChart),
    /// Top categories of the clicked state against the average.
    State {
        /// Clicked state.
        state: Jurisdiction,
        /// State and average rows, paired.
        rows: Vec<DetailRow>,
    },
}

/// Everything a renderer needs for one view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedViews {
    /// Mode the figures are in.
    pub render_mode: RenderMode,
    /// Dropdown entries, first-seen order.
    pub categories: Vec<String>,
    /// Records on the overview bar chart after drill-down.
    pub overview: Vec<BudgetRecord>,
    /// One chart per category.
    pub small_multiples: Vec<CategoryChart>,
    /// The map.
    pub map: MapView,
    /// Panel beside the map.
    pub side_panel: SidePanel,
}

impl DerivedViews {
    /// Recomputes every view from the base records.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::ZeroJurisdictionCount` if a state is selected and
    /// the settings carry a zero jurisdiction count, and `BudgetError::Overflow`
    /// if a total is not representable.
    pub fn compute(
        records: &[BudgetRecord],
        populations: &PopulationTable,
        regions: &[MapRegion],
        settings: ViewSettings,
        state: &ViewState,
    ) -> Result<Self, BudgetError> {
        let records = match state.render_mode {
            RenderMode::PerCapita => BudgetAggregator::to_per_capita(records, populations),
            RenderMode::Absolute => records.to_vec(),
        };

        let categories = BudgetAggregator::distinct_categories(&records);

        let overview_filter = state
            .drill_down
            .as_ref()
            .map_or(CategoryFilter::All, |c| CategoryFilter::Category(c.clone()));
        let overview = BudgetAggregator::filter_by_category(&records, &overview_filter);

        let small_multiples = categories
            .iter()
            .map(|c| chart(&records, CategoryFilter::Category(c.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        let map_totals = BudgetAggregator::sum_by_state(&records, &state.map_category)?;
        let scale = LogColorScale::from_totals(map_totals.values().copied());
        let map = MapView {
            category: state.map_category.clone(),
            regions: shade_regions(regions, &map_totals, scale.as_ref(), state.selected_state),
            totals: map_totals,
            scale,
        };

        let side_panel = match state.selected_state {
            Some(selected) => SidePanel::State {
                state: selected,
                rows: BudgetAggregator::state_detail(
                    &records,
                    selected,
                    settings.top_n,
                    settings.jurisdiction_count,
                )?,
            },
            None if state.category_panel => {
                SidePanel::Category(chart(&records, state.map_category.clone())?)
            }
            None => SidePanel::Empty,
        };

        Ok(Self {
            render_mode: state.render_mode,
            categories,
            overview,
            small_multiples,
            map,
            side_panel,
        })
    }
}

fn chart(
    records: &[BudgetRecord],
    category: CategoryFilter,
) -> Result<CategoryChart, BudgetError> {
    Ok(CategoryChart {
        totals: BudgetAggregator::sum_by_state(records, &category)?,
        category,
    })
}
