use std::sync::Arc;

use crate::api::RecipeApi;
use crate::model::RecipeSummary;
use crate::state::{FetchController, FetchState};

/// Fetch lifecycle for the dessert list.
///
/// Owns its state exclusively. The presentation layer reads it through
/// [`state`](Self::state) at any time and applies completions from its
/// own task via the `apply_*` methods.
pub struct DessertListController {
    api: Arc<RecipeApi>,
    controller: FetchController<Vec<RecipeSummary>>,
}

impl DessertListController {
    pub fn new(api: Arc<RecipeApi>) -> Self {
        Self {
            api,
            controller: FetchController::new(),
        }
    }

    /// Start (or restart) the list fetch. Always issues a new request,
    /// even while an earlier one is still in flight.
    pub fn load(&mut self) {
        let api = Arc::clone(&self.api);
        self.controller.start(async move { api.list_desserts().await });
    }

    pub fn state(&self) -> &FetchState<Vec<RecipeSummary>> {
        self.controller.state()
    }

    pub fn in_flight(&self) -> usize {
        self.controller.in_flight()
    }

    /// Apply completions received so far without waiting.
    pub fn apply_ready(&mut self) -> usize {
        self.controller.apply_ready()
    }

    /// Apply completions until every started fetch has reported back.
    pub async fn settle(&mut self) {
        self.controller.settle().await;
    }
}
