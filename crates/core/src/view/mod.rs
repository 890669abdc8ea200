//! Dashboard view state.
//!
//! UI events are turned into a new immutable [`ViewState`], the derived views
//! are recomputed from the base dataset, and registered observers are told.

pub mod dashboard;
pub mod derived;
pub mod event;
pub mod state;


pub use dashboard::{Dashboard, ObserverHandle, ViewObserver};
pub use derived::{CategoryChart, DerivedViews, MapView, SidePanel, ViewSettings};
pub use event::{ViewEvent, category_from_bar_key};
pub use state::{RenderMode, ViewState};
