use std::sync::Arc;

use crate::api::RecipeApi;
use crate::model::RecipeDetail;
use crate::state::{FetchController, FetchState};

/// Fetch lifecycle for one recipe's detail.
///
/// Bound to a single recipe id for its lifetime; browsing to a different
/// recipe means constructing a fresh controller. Results are not cached
/// across ids.
pub struct RecipeDetailController {
    api: Arc<RecipeApi>,
    recipe_id: String,
    controller: FetchController<RecipeDetail>,
}

impl RecipeDetailController {
    pub fn new(api: Arc<RecipeApi>, recipe_id: impl Into<String>) -> Self {
        Self {
            api,
            recipe_id: recipe_id.into(),
            controller: FetchController::new(),
        }
    }

    pub fn recipe_id(&self) -> &str {
        &self.recipe_id
    }

    /// Start (or restart) the detail fetch. Always issues a new request,
    /// even while an earlier one is still in flight.
    pub fn load(&mut self) {
        let api = Arc::clone(&self.api);
        let id = self.recipe_id.clone();
        self.controller.start(async move { api.recipe_detail(&id).await });
    }

    pub fn state(&self) -> &FetchState<RecipeDetail> {
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
