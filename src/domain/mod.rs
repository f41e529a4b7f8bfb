mod fields;
mod recipe;

pub use fields::{RecipeField, RowField};
pub use recipe::{Ingredient, RecipeDraft, SavedRecipe};
