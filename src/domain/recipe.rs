use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One normalized ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// `None` when the submitted row left the quantity empty.
    pub quantity: Option<f64>,
    pub unit: String,
    pub description: String,
}

impl Ingredient {
    pub fn new(quantity: Option<f64>, unit: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            quantity,
            unit: unit.into(),
            description: description.into(),
        }
    }
}

/// A fully validated recipe, ready for the upload boundary.
///
/// Only the submit pipeline constructs one of these from raw form input;
/// there is no partially valid draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub source_url: String,
    pub image: String,
    pub publisher: String,
    pub cooking_time: f64,
    pub servings: f64,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeDraft {
    /// Wire payload for the upload boundary, with camelCase keys.
    pub fn to_payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// A stored recipe opened for editing: its identifier plus the editable
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipe {
    pub id: String,
    #[serde(flatten)]
    pub recipe: RecipeDraft,
}
