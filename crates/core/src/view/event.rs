//! UI events that drive view-state transitions.

use serde::{Deserialize, Serialize};

use crate::budget::CategoryFilter;

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    /// The per-capita checkbox changed.
    PerCapitaToggled {
        /// New checkbox state.
        checked: bool,
    },
    /// A category was picked from the map dropdown.
    MapCategoryChosen {
        /// The chosen category, or `"All"`.
        category: CategoryFilter,
    },
    /// A legend entry was clicked.
    LegendClicked {
        /// The legend's category.
        category: String,
    },
    /// A bar was clicked.
    BarClicked {
        /// The bar's key, `<category>_<series...>`.
        key: String,
    },
    /// The chart background was clicked.
    BackgroundClicked,
    /// A map region was clicked.
    RegionClicked {
        /// The region's `STATE_NAME`.
        name: String,
    },
}

/// Extracts the category from a bar key: the text before the first `_`, trimmed.
///
/// Returns `None` when the key has no `_` or the category part is blank.
#[must_use]
pub fn category_from_bar_key(key: &str) -> Option<&str> {
    let (category, _) = key.split_once('_')?;
    let category = category.trim();
    (!category.is_empty()).then_some(category)
}
