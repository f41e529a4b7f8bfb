use crate::domain::RecipeField;

/// Why a submission was rejected. One error covers the whole submission;
/// nothing is uploaded and the form stays open for correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A numeric scalar parsed below zero.
    NegativeValue { field: RecipeField },
    /// A numeric scalar was not a number.
    NumberSyntax { field: RecipeField },
    /// At least one non-blank ingredient row was malformed.
    Ingredients,
}

impl ValidationError {
    /// Copy shown on the shared message line.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::NegativeValue { .. } => {
                "Cooking time and servings cannot be negative numbers."
            }
            ValidationError::NumberSyntax { .. } => "Cooking time and servings must be numbers.",
            ValidationError::Ingredients => {
                "Invalid input: please fill all required fields and give every ingredient a description."
            }
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NegativeValue { field } => {
                write!(f, "{} cannot be negative", field.label())
            }
            ValidationError::NumberSyntax { field } => {
                write!(f, "{} is not a number", field.label())
            }
            ValidationError::Ingredients => f.write_str("one or more ingredient rows are invalid"),
        }
    }
}

impl std::error::Error for ValidationError {}
