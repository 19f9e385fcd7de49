//! Client library for browsing dessert recipes from
//! [TheMealDB](https://themealdb.com).
//!
//! Two read-only endpoints are covered: the Dessert category listing and
//! the per-recipe lookup. [`RecipeApi`] does the fetch/decode work, and
//! [`DessertListController`] / [`RecipeDetailController`] hold the fetch
//! lifecycle (`Idle → Loading → Success | Failure`) for a presentation
//! layer to render.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use recipe_browser::{DessertListController, RecipeApi};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let api = Arc::new(RecipeApi::default());
//! let mut list = DessertListController::new(api);
//!
//! list.load();
//! list.settle().await;
//!
//! if let Some(desserts) = list.state().value() {
//!     for dessert in desserts {
//!         println!("{}", dessert.name);
//!     }
//! }
//! # }
//! ```

pub mod api;
pub mod config;
pub mod controllers;
pub mod error;
pub mod model;
pub mod state;

pub use api::RecipeApi;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use controllers::{DessertListController, RecipeDetailController};
pub use error::FetchError;
pub use model::{Ingredient, RecipeDetail, RecipeSummary};
pub use state::{FetchController, FetchState};

/// Fetch the dessert list with a default-configured service.
pub async fn fetch_desserts() -> Result<Vec<RecipeSummary>, FetchError> {
    RecipeApi::default().list_desserts().await
}

/// Fetch one recipe's detail with a default-configured service.
pub async fn fetch_recipe_detail(id: &str) -> Result<RecipeDetail, FetchError> {
    RecipeApi::default().recipe_detail(id).await
}
