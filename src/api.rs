use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::model::{Ingredient, RecipeDetail, RecipeSummary};

/// Highest numbered ingredient/measure slot the API populates.
const INGREDIENT_SLOTS: usize = 20;

/// Client for the recipe API's two read-only endpoints.
///
/// Construct one at startup and hand it to the controllers that need it;
/// it holds no mutable state between calls.
pub struct RecipeApi {
    client: reqwest::Client,
    base_url: String,
}

impl RecipeApi {
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Point the service at an alternate host, keeping default client
    /// settings. Tests use this to talk to a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let config = ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        };
        Self::new(&config)
    }

    /// Fetch all recipes in the Dessert category, sorted by name.
    ///
    /// Entries sharing a name keep their response order.
    pub async fn list_desserts(&self) -> Result<Vec<RecipeSummary>, FetchError> {
        let body = self.fetch(&format!("{}/filter.php?c=Dessert", self.base_url)).await?;
        let envelope: MealsEnvelope<MealRow> = serde_json::from_str(&body)?;

        let mut desserts: Vec<RecipeSummary> = envelope
            .meals
            .into_iter()
            .map(RecipeSummary::from)
            .collect();
        desserts.sort_by(|a, b| a.name.cmp(&b.name));

        debug!("listed {} desserts", desserts.len());
        Ok(desserts)
    }

    /// Fetch full detail for one recipe id.
    pub async fn recipe_detail(&self, id: &str) -> Result<RecipeDetail, FetchError> {
        let body = self.fetch(&format!("{}/lookup.php?i={}", self.base_url, id)).await?;
        let envelope: MealsEnvelope<MealDetailRow> = serde_json::from_str(&body)?;

        let row = envelope
            .meals
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound(id.to_string()))?;

        let detail = RecipeDetail::from(row);
        debug!(
            "decoded recipe {} with {} ingredients",
            detail.id,
            detail.ingredients.len()
        );
        Ok(detail)
    }

    /// Issue a GET and return the body. Non-2xx statuses are rejected
    /// before any decode attempt.
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("recipe API answered {status}");
            return Err(FetchError::InvalidResponse(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

impl Default for RecipeApi {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

/// Envelope wrapping every endpoint's payload.
#[derive(Debug, Deserialize)]
struct MealsEnvelope<T> {
    meals: Vec<T>,
}

/// List row as served by `filter.php`.
#[derive(Debug, Deserialize)]
struct MealRow {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail_url: String,
}

impl From<MealRow> for RecipeSummary {
    fn from(row: MealRow) -> Self {
        RecipeSummary {
            id: row.id,
            name: row.name,
            thumbnail_url: row.thumbnail_url,
        }
    }
}

/// Detail row as served by `lookup.php`. The numbered ingredient and
/// measure slots land in `extra` alongside every other key not decoded
/// by name; `extra` is consumed while deriving the ingredient list and
/// never leaves this module.
#[derive(Debug, Deserialize)]
struct MealDetailRow {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strInstructions")]
    instructions: String,
    #[serde(rename = "strMealThumb")]
    thumbnail_url: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<MealDetailRow> for RecipeDetail {
    fn from(row: MealDetailRow) -> Self {
        let ingredients = collect_ingredients(&row.extra);
        RecipeDetail {
            id: row.id,
            name: row.name,
            instructions: row.instructions,
            thumbnail_url: row.thumbnail_url,
            ingredients,
        }
    }
}

/// Reduce the numbered `strIngredient{i}`/`strMeasure{i}` slots to an
/// ordered ingredient list. A slot is kept only when both values pass
/// [`filled`]; the API pads unused slots with `""`, `" "` or `null`.
fn collect_ingredients(extra: &Map<String, Value>) -> Vec<Ingredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|i| {
            let name = filled(extra.get(&format!("strIngredient{i}")))?;
            let measure = filled(extra.get(&format!("strMeasure{i}")))?;
            Some(Ingredient {
                name: name.to_string(),
                measure: measure.to_string(),
            })
        })
        .collect()
}

/// A slot value counts as filled when it is a non-empty string other
/// than a single space.
fn filled(value: Option<&Value>) -> Option<&str> {
    match value.and_then(Value::as_str) {
        Some(s) if !s.is_empty() && s != " " => Some(s),
        _ => None,
    }
}
