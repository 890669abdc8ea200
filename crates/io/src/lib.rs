//! Dataset and map boundary loaders for Govspend.
//!
//! This crate provides:
//! - The tab-separated spending dataset reader, with state-code validation
//! - The GeoJSON boundary reader for the state map

pub mod boundaries;
pub mod dataset;
pub mod error;

pub use boundaries::{load_regions, parse_regions};
pub use dataset::{Dataset, StateCodePolicy, load_dataset, parse_dataset};
pub use error::{BoundaryError, DatasetError};
