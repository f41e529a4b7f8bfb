use std::fmt::Write as _;

use crate::config::DEFAULT_BLANK_ROWS;
use crate::domain::{Ingredient, RecipeField, RowField};
use crate::form::FormContext;
use crate::markup::{ICON_UPLOAD, Markup, MarkupOptions, attr, text};
use crate::surface::Region;

use super::View;

/// Class on the add-ingredient button. Hosts bind their click handler
/// against it after every full form render.
pub const ADD_ROW_CLASS: &str = "editor__add-row";

/// Renders the complete editor form document.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    options: MarkupOptions,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MarkupOptions) -> Self {
        Self { options }
    }
}

impl View for FormView {
    type State = FormContext;

    fn render(&self, state: &FormContext) -> Markup {
        let mut html = String::new();

        html.push_str("<div class=\"editor__column\">\n<h3 class=\"editor__heading\">Recipe data</h3>\n");
        for field in RecipeField::ALL {
            let value = state
                .source
                .as_ref()
                .map(|recipe| field.value_of(recipe))
                .unwrap_or_default();
            let _ = writeln!(html, "<label>{}</label>", text(field.label()));
            let kind = if field.numeric() {
                "type=\"number\" min=\"0\" step=\"any\""
            } else {
                "type=\"text\""
            };
            let _ = writeln!(
                html,
                "<input value=\"{}\" required name=\"{}\" {kind} />",
                attr(&value),
                field.name(),
            );
        }
        html.push_str("</div>\n");

        html.push_str("<div class=\"editor__column\">\n<h3 class=\"editor__heading\">Ingredients</h3>\n");
        html.push_str("<div class=\"editor__rows\">\n");
        match &state.source {
            Some(recipe) => {
                for (i, ingredient) in recipe.ingredients.iter().enumerate() {
                    push_row(&mut html, i + 1, Some(ingredient));
                }
            }
            None => {
                for index in 1..=DEFAULT_BLANK_ROWS {
                    push_row(&mut html, index, None);
                }
            }
        }
        html.push_str("</div>\n");
        let _ = writeln!(html, "<button type=\"button\" class=\"{ADD_ROW_CLASS}\">Add ingredient</button>");
        html.push_str("</div>\n");

        let label = if state.editing { "UPDATE RECIPE" } else { "UPLOAD RECIPE" };
        html.push_str("<button class=\"editor__submit\">\n");
        let _ = writeln!(
            html,
            "<svg class=\"editor__icon\"><use href=\"{}\"></use></svg>",
            attr(&self.options.icon_href(ICON_UPLOAD)),
        );
        let _ = writeln!(html, "<span>{label}</span>");
        html.push_str("</button>\n");

        Markup::from_raw(html)
    }

    fn region(&self) -> Region {
        Region::Form
    }
}

/// Markup for one ingredient row. `None` renders the row blank.
///
/// All three inputs stay plain text inputs without `required`: a row is
/// allowed to be entirely blank, and "description required only if the row
/// is non-blank" is checked on submit instead.
pub fn ingredient_row_markup(index: usize, ingredient: Option<&Ingredient>) -> Markup {
    let mut html = String::new();
    push_row(&mut html, index, ingredient);
    Markup::from_raw(html)
}

fn push_row(html: &mut String, index: usize, ingredient: Option<&Ingredient>) {
    let quantity = ingredient
        .and_then(|i| i.quantity)
        .map(|q| q.to_string())
        .unwrap_or_default();
    let unit = ingredient.map_or("", |i| i.unit.as_str());
    let description = ingredient.map_or("", |i| i.description.as_str());

    let _ = writeln!(html, "<div class=\"editor__row\" data-row=\"{index}\">");
    let _ = writeln!(html, "<label>Ingredient {index}</label>");
    for (field, value) in [
        (RowField::Quantity, quantity.as_str()),
        (RowField::Unit, unit),
        (RowField::Description, description),
    ] {
        let _ = writeln!(
            html,
            "<input value=\"{}\" type=\"text\" class=\"editor__input--{}\" name=\"{}\" placeholder=\"{}\" />",
            attr(value),
            field.key(),
            field.input_name(index),
            field.placeholder(),
        );
    }
    html.push_str("</div>\n");
}
