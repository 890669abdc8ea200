//! Choropleth shading for the state map.
//!
//! This module provides:
//! - A log-scaled colour ramp over state totals
//! - Region fills with a highlight for the clicked state
//! - Tooltip amounts

pub mod color;
pub mod region;
pub mod scale;

pub use color::{HIGH_FILL, HIGHLIGHT_FILL, LOW_FILL, Rgb};
pub use region::{MapRegion, RegionShade, shade_regions, tooltip_amount};
pub use scale::LogColorScale;
