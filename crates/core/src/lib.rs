//! Core spending logic for Govspend.
//!
//! This crate contains pure logic with ZERO file-format or rendering dependencies.
//! All domain types, aggregations, and view transitions live here.
//!
//! # Modules
//!
//! - `budget` - Spending records, population table, and aggregation
//! - `choropleth` - Log colour scale and map region fills
//! - `view` - View state, UI events, derived views, and observers

pub mod budget;
pub mod choropleth;
pub mod view;
