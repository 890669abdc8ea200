//! GeoJSON state boundary reader.
//!
//! Only each feature's `STATE_NAME` property is read; geometry is left to
//! whatever draws the map.

use std::fs;
use std::path::Path;

use geojson::GeoJson;
use govspend_core::choropleth::MapRegion;
use tracing::{debug, info};

use crate::error::BoundaryError;

const STATE_NAME_PROPERTY: &str = "STATE_NAME";

/// Reads the regions from the boundary file at `path`.
///
/// # Errors
///
/// Returns `BoundaryError::Read` if the file cannot be read, and any error
/// [`parse_regions`] returns.
pub fn load_regions(path: &Path) -> Result<Vec<MapRegion>, BoundaryError> {
    let content = fs::read_to_string(path).map_err(|source| BoundaryError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let regions = parse_regions(&content)?;
    info!(
        path = %path.display(),
        regions = regions.len(),
        resolved = regions.iter().filter(|r| r.jurisdiction.is_some()).count(),
        "Boundaries loaded"
    );
    Ok(regions)
}

/// Extracts one region per feature, in file order.
///
/// Features without a `STATE_NAME` get an empty name. Names that match no
/// jurisdiction are kept unresolved.
///
/// # Errors
///
/// Returns `BoundaryError::Parse` for invalid GeoJSON and
/// `BoundaryError::NotFeatureCollection` for any other GeoJSON object.
pub fn parse_regions(content: &str) -> Result<Vec<MapRegion>, BoundaryError> {
    let GeoJson::FeatureCollection(collection) = content.parse::<GeoJson>()? else {
        return Err(BoundaryError::NotFeatureCollection);
    };

    Ok(collection
        .features
        .iter()
        .map(|feature| {
            let name = feature
                .property(STATE_NAME_PROPERTY)
                .and_then(|v| v.as_str())
                .unwrap_or_default();
            let region = MapRegion::from_name(name);
            if region.jurisdiction.is_none() {
                debug!(name, "Boundary feature has no matching jurisdiction");
            }
            region
        })
        .collect())
}
