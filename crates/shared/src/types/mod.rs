//! Common types used across the application.

pub mod jurisdiction;

#[cfg(test)]
mod jurisdiction_tests;

pub use jurisdiction::Jurisdiction;
