use serde::Serialize;

/// One entry of the dessert list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

/// A single normalized ingredient line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Full detail for one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub thumbnail_url: String,
    /// Ingredient/measure pairs in the order the source numbers them
    pub ingredients: Vec<Ingredient>,
}
