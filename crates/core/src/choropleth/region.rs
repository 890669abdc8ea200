//! Map regions and their fills.

use std::collections::BTreeMap;

use govspend_shared::Jurisdiction;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::color::{HIGHLIGHT_FILL, Rgb};
use super::scale::LogColorScale;

/// A region from the boundary file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRegion {
    /// The feature's `STATE_NAME`.
    pub name: String,
    /// The jurisdiction the name resolves to, if any.
    pub jurisdiction: Option<Jurisdiction>,
}

impl MapRegion {
    /// Creates a region, resolving its name.
    #[must_use]
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let jurisdiction = Jurisdiction::from_state_name(&name);
        Self { name, jurisdiction }
    }
}

/// How one region is painted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionShade {
    /// The feature's `STATE_NAME`.
    pub name: String,
    /// Resolved jurisdiction.
    pub jurisdiction: Option<Jurisdiction>,
    /// The region's total, when it has one.
    pub total: Option<Decimal>,
    /// Fill colour. `None` when the total is missing or not positive.
    pub fill: Option<Rgb>,
    /// Whether this is the clicked region.
    pub selected: bool,
    /// Tooltip amount, two decimals.
    pub tooltip: String,
}

/// Formats a state's total for the map tooltip. Missing totals read `0.00`.
#[must_use]
pub fn tooltip_amount(totals: &BTreeMap<Jurisdiction, Decimal>, state: Option<Jurisdiction>) -> String {
    let total = state
        .and_then(|s| totals.get(&s))
        .copied()
        .unwrap_or(Decimal::ZERO);
    format!(
        "{:.2}",
        total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Paints every region from the state totals.
///
/// The selected jurisdiction gets the highlight fill regardless of its total.
#[must_use]
pub fn shade_regions(
    regions: &[MapRegion],
    totals: &BTreeMap<Jurisdiction, Decimal>,
    scale: Option<&LogColorScale>,
    selected: Option<Jurisdiction>,
) -> Vec<RegionShade> {
    regions
        .iter()
        .map(|region| {
            let total = region.jurisdiction.and_then(|j| totals.get(&j)).copied();
            let is_selected = selected.is_some() && region.jurisdiction == selected;
            let fill = if is_selected {
                Some(HIGHLIGHT_FILL)
            } else {
                total.zip(scale).and_then(|(t, s)| s.color_for(t))
            };
            RegionShade {
                name: region.name.clone(),
                jurisdiction: region.jurisdiction,
                total,
                fill,
                selected: is_selected,
                tooltip: tooltip_amount(totals, region.jurisdiction),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choropleth::color::{HIGH_FILL, LOW_FILL};
    use rust_decimal_macros::dec;

    fn regions() -> Vec<MapRegion> {
        vec![
            MapRegion::from_name("New South Wales"),
            MapRegion::from_name("Victoria"),
            MapRegion::from_name("Tasmania"),
            MapRegion::from_name("Jervis Bay Territory"),
        ]
    }

    fn totals() -> BTreeMap<Jurisdiction, Decimal> {
        BTreeMap::from([
            (Jurisdiction::Nsw, dec!(1000)),
            (Jurisdiction::Vic, dec!(10)),
        ])
    }

    #[test]
    fn test_from_name_resolves() {
        assert_eq!(
            MapRegion::from_name("Victoria").jurisdiction,
            Some(Jurisdiction::Vic)
        );
        assert_eq!(MapRegion::from_name("Jervis Bay Territory").jurisdiction, None);
    }

    #[test]
    fn test_tooltip_amount() {
        let totals = BTreeMap::from([(Jurisdiction::Nsw, dec!(12.345))]);
        assert_eq!(tooltip_amount(&totals, Some(Jurisdiction::Nsw)), "12.35");
        assert_eq!(tooltip_amount(&totals, Some(Jurisdiction::Vic)), "0.00");
        assert_eq!(tooltip_amount(&totals, None), "0.00");

        let whole = BTreeMap::from([(Jurisdiction::Nsw, dec!(7))]);
        assert_eq!(tooltip_amount(&whole, Some(Jurisdiction::Nsw)), "7.00");
    }

    #[test]
    fn test_shade_regions_uses_scale() {
        let totals = totals();
        let scale = LogColorScale::from_totals(totals.values().copied());
        let shades = shade_regions(&regions(), &totals, scale.as_ref(), None);

        assert_eq!(shades.len(), 4);
        assert_eq!(shades[0].fill, Some(HIGH_FILL));
        assert_eq!(shades[1].fill, Some(LOW_FILL));
        assert_eq!(shades[2].fill, None);
        assert_eq!(shades[2].tooltip, "0.00");
        assert_eq!(shades[3].jurisdiction, None);
        assert!(shades.iter().all(|s| !s.selected));
    }

    #[test]
    fn test_selected_region_highlighted() {
        let totals = totals();
        let scale = LogColorScale::from_totals(totals.values().copied());
        let shades = shade_regions(&regions(), &totals, scale.as_ref(), Some(Jurisdiction::Tas));

        assert_eq!(shades[2].fill, Some(HIGHLIGHT_FILL));
        assert!(shades[2].selected);
        assert_eq!(shades[0].fill, Some(HIGH_FILL));
        assert!(!shades[3].selected);
    }
}
