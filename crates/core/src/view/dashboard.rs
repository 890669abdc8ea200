//! Event dispatch and observer registration.

use std::sync::Arc;

use tracing::debug;

use super::derived::{DerivedViews, ViewSettings};
use super::event::ViewEvent;
use super::state::ViewState;
use crate::budget::{BudgetError, BudgetRecord, PopulationTable};
use crate::choropleth::MapRegion;

/// Receives the new state and views after every dispatched event.
pub trait ViewObserver {
    /// Called once per successful dispatch.
    fn on_view_changed(&mut self, state: &ViewState, views: &DerivedViews);
}

impl<F> ViewObserver for F
where
    F: FnMut(&ViewState, &DerivedViews),
{
    fn on_view_changed(&mut self, state: &ViewState, views: &DerivedViews) {
        self(state, views);
    }
}

/// Identifies a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

/// Holds the dataset and the current view state.
///
/// The records are never modified; every dispatch recomputes the derived
/// views from them.
pub struct Dashboard {
    records: Arc<[BudgetRecord]>,
    populations: PopulationTable,
    regions: Vec<MapRegion>,
    settings: ViewSettings,
    state: ViewState,
    observers: Vec<(ObserverHandle, Box<dyn ViewObserver>)>,
    next_handle: u64,
}

impl Dashboard {
    /// Creates a dashboard in the initial view state.
    #[must_use]
    pub fn new(
        records: impl Into<Arc<[BudgetRecord]>>,
        populations: PopulationTable,
        settings: ViewSettings,
    ) -> Self {
        Self {
            records: records.into(),
            populations,
            regions: Vec::new(),
            settings,
            state: ViewState::default(),
            observers: Vec::new(),
            next_handle: 0,
        }
    }

    /// Sets the map regions.
    #[must_use]
    pub fn with_regions(mut self, regions: Vec<MapRegion>) -> Self {
        self.regions = regions;
        self
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Base records.
    #[must_use]
    pub fn records(&self) -> &[BudgetRecord] {
        &self.records
    }

    /// Views for the current state.
    ///
    /// # Errors
    ///
    /// See [`DerivedViews::compute`].
    pub fn views(&self) -> Result<DerivedViews, BudgetError> {
        self.compute(&self.state)
    }

    /// Registers an observer.
    pub fn subscribe(&mut self, observer: impl ViewObserver + 'static) -> ObserverHandle {
        let handle = ObserverHandle(self.next_handle);
        self.next_handle += 1;
        self.observers.push((handle, Box::new(observer)));
        handle
    }

    /// Removes an observer. Returns false if the handle was not registered.
    pub fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(h, _)| *h != handle);
        self.observers.len() != before
    }

    /// Applies `event`, recomputes the views and notifies every observer.
    ///
    /// On error the current state is left unchanged and no observer is called.
    ///
    /// # Errors
    ///
    /// See [`DerivedViews::compute`].
    pub fn dispatch(&mut self, event: &ViewEvent) -> Result<DerivedViews, BudgetError> {
        let next = self.state.apply(event);
        let views = self.compute(&next)?;

        debug!(
            ?event,
            render_mode = ?next.render_mode,
            drill_down = ?next.drill_down,
            map_category = %next.map_category,
            selected_state = ?next.selected_state,
            observers = self.observers.len(),
            "View state changed"
        );

        self.state = next;
        for (_, observer) in &mut self.observers {
            observer.on_view_changed(&self.state, &views);
        }
        Ok(views)
    }

    fn compute(&self, state: &ViewState) -> Result<DerivedViews, BudgetError> {
        DerivedViews::compute(
            &self.records,
            &self.populations,
            &self.regions,
            self.settings,
            state,
        )
    }
}
