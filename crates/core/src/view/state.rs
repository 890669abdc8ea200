//! Immutable view state and its transitions.

use govspend_shared::Jurisdiction;
use serde::{Deserialize, Serialize};

use super::event::{ViewEvent, category_from_bar_key};
use crate::budget::CategoryFilter;

/// Whether amounts are shown as totals or per person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Dollars per person in the jurisdiction.
    #[default]
    PerCapita,
    /// Dollars.
    Absolute,
}

impl RenderMode {
    /// Mode for a per-capita checkbox state.
    #[must_use]
    pub const fn from_checkbox(checked: bool) -> Self {
        if checked { Self::PerCapita } else { Self::Absolute }
    }
}

/// Everything the user has selected.
///
/// A value type: each event produces a new state via [`ViewState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Totals or per-capita.
    pub render_mode: RenderMode,
    /// Category the overview chart is narrowed to.
    pub drill_down: Option<String>,
    /// Category shown on the map.
    pub map_category: CategoryFilter,
    /// State whose detail chart is open.
    pub selected_state: Option<Jurisdiction>,
    /// Whether a dropdown choice has opened the category chart beside the map.
    #[serde(default)]
    pub category_panel: bool,
}

impl ViewState {
    /// Returns the state after `event`.
    #[must_use]
    pub fn apply(&self, event: &ViewEvent) -> Self {
        match event {
            // The whole dashboard is redrawn, so everything else starts over.
            ViewEvent::PerCapitaToggled { checked } => Self {
                render_mode: RenderMode::from_checkbox(*checked),
                ..Self::default()
            },
            ViewEvent::MapCategoryChosen { category } => Self {
                map_category: category.clone(),
                selected_state: None,
                category_panel: true,
                ..self.clone()
            },
            ViewEvent::LegendClicked { category } => self.drill(Some(category.trim())),
            ViewEvent::BarClicked { key } => self.drill(category_from_bar_key(key)),
            ViewEvent::BackgroundClicked => self.drill(None),
            ViewEvent::RegionClicked { name } => match Jurisdiction::from_state_name(name) {
                Some(state) => Self {
                    selected_state: Some(state),
                    ..self.clone()
                },
                None => self.clone(),
            },
        }
    }

    /// Narrows the overview to `category`, or widens it back to all categories
    /// when `category` is absent, blank, or already the drilled-into key.
    fn drill(&self, category: Option<&str>) -> Self {
        let drill_down = match category {
            Some(c) if !c.is_empty() && self.drill_down.as_deref() != Some(c) => {
                Some(c.to_string())
            }
            _ => None,
        };
        Self {
            drill_down,
            ..self.clone()
        }
    }
}
