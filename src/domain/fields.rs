use super::recipe::RecipeDraft;

/// The six scalar inputs of the editor's data column, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeField {
    Title,
    SourceUrl,
    Image,
    Publisher,
    CookingTime,
    Servings,
}

impl RecipeField {
    pub const ALL: [RecipeField; 6] = [
        RecipeField::Title,
        RecipeField::SourceUrl,
        RecipeField::Image,
        RecipeField::Publisher,
        RecipeField::CookingTime,
        RecipeField::Servings,
    ];

    /// Wire name carried by the input's `name` attribute and by snapshot
    /// entries.
    pub fn name(self) -> &'static str {
        match self {
            RecipeField::Title => "title",
            RecipeField::SourceUrl => "sourceUrl",
            RecipeField::Image => "image",
            RecipeField::Publisher => "publisher",
            RecipeField::CookingTime => "cookingTime",
            RecipeField::Servings => "servings",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Label rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            RecipeField::Title => "Title",
            RecipeField::SourceUrl => "URL",
            RecipeField::Image => "Image URL",
            RecipeField::Publisher => "Publisher",
            RecipeField::CookingTime => "Prep time",
            RecipeField::Servings => "Servings",
        }
    }

    /// Numeric fields render as number inputs and go through numeric
    /// validation on submit.
    pub fn numeric(self) -> bool {
        matches!(self, RecipeField::CookingTime | RecipeField::Servings)
    }

    /// Pre-fill value drawn from a source recipe when editing.
    pub fn value_of(self, recipe: &RecipeDraft) -> String {
        match self {
            RecipeField::Title => recipe.title.clone(),
            RecipeField::SourceUrl => recipe.source_url.clone(),
            RecipeField::Image => recipe.image.clone(),
            RecipeField::Publisher => recipe.publisher.clone(),
            RecipeField::CookingTime => recipe.cooking_time.to_string(),
            RecipeField::Servings => recipe.servings.to_string(),
        }
    }
}

/// The three inputs of one ingredient row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    Quantity,
    Unit,
    Description,
}

impl RowField {
    pub const ALL: [RowField; 3] = [RowField::Quantity, RowField::Unit, RowField::Description];

    pub fn key(self) -> &'static str {
        match self {
            RowField::Quantity => "quantity",
            RowField::Unit => "unit",
            RowField::Description => "description",
        }
    }

    /// Wire name of the field's input in row `index`, e.g.
    /// `ingredient-quantity-3`. Row indices are 1-based.
    pub fn input_name(self, index: usize) -> String {
        format!("ingredient-{}-{index}", self.key())
    }

    /// Inverse of [`RowField::input_name`]. Returns `None` for names outside
    /// the ingredient group or with a malformed index.
    pub fn parse_input_name(name: &str) -> Option<(Self, usize)> {
        let rest = name.strip_prefix("ingredient-")?;
        for field in Self::ALL {
            if let Some(tail) = rest.strip_prefix(field.key())
                && let Some(raw_index) = tail.strip_prefix('-')
            {
                return raw_index
                    .parse()
                    .ok()
                    .filter(|index| *index >= 1)
                    .map(|index| (field, index));
            }
        }
        None
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            RowField::Quantity => "Quantity",
            RowField::Unit => "Unit (e.g., cups)",
            RowField::Description => "Description (e.g., flour)",
        }
    }
}
