use log::debug;

use crate::domain::{Ingredient, RecipeDraft, RecipeField};
use crate::form::error::ValidationError;
use crate::form::snapshot::{FormSnapshot, RowSnapshot};

/// Validate a submitted snapshot and assemble the canonical draft.
///
/// Numeric scalars are checked before any ingredient work, so a negative
/// cooking time rejects the submission even when every row is broken.
/// Either every check passes and a complete draft comes back, or the first
/// violation rejects the whole submission.
pub fn validate(snapshot: &FormSnapshot) -> Result<RecipeDraft, ValidationError> {
    let cooking_time = numeric_scalar(snapshot, RecipeField::CookingTime)?;
    let servings = numeric_scalar(snapshot, RecipeField::Servings)?;

    let mut ingredients = Vec::new();
    for row in snapshot.rows() {
        if row.is_blank() {
            continue;
        }
        ingredients.push(normalize_row(row)?);
    }
    debug!("validated submission with {} ingredient(s)", ingredients.len());

    Ok(RecipeDraft {
        title: snapshot.scalar(RecipeField::Title).to_string(),
        source_url: snapshot.scalar(RecipeField::SourceUrl).to_string(),
        image: snapshot.scalar(RecipeField::Image).to_string(),
        publisher: snapshot.scalar(RecipeField::Publisher).to_string(),
        cooking_time,
        servings,
        ingredients,
    })
}

/// Parse a numeric scalar. An empty value coerces to zero; anything
/// non-finite or below zero is rejected.
fn numeric_scalar(snapshot: &FormSnapshot, field: RecipeField) -> Result<f64, ValidationError> {
    let raw = snapshot.scalar(field).trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| ValidationError::NumberSyntax { field })?;
    if !value.is_finite() {
        return Err(ValidationError::NumberSyntax { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(value)
}

/// Normalize one non-blank row. A row is valid when its description is
/// non-empty and its quantity is empty or a non-negative number; the empty
/// quantity becomes `None`.
fn normalize_row(row: &RowSnapshot) -> Result<Ingredient, ValidationError> {
    let description = row.description.trim();
    if description.is_empty() {
        return Err(ValidationError::Ingredients);
    }

    let quantity = match row.quantity.trim() {
        "" => None,
        raw => {
            let value: f64 = raw.parse().map_err(|_| ValidationError::Ingredients)?;
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::Ingredients);
            }
            Some(value)
        }
    };

    Ok(Ingredient {
        quantity,
        unit: row.unit.trim().to_string(),
        description: description.to_string(),
    })
}
