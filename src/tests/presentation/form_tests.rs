use crate::form::FormContext;
use crate::markup::MarkupOptions;
use crate::presentation::{FormView, View, ingredient_row_markup};
use crate::surface::Region;
use crate::tests::support::sample_draft;

fn row_count(html: &str) -> usize {
    html.matches("class=\"editor__row\"").count()
}

#[test]
fn create_form_renders_three_blank_rows() {
    let html = FormView::new().render(&FormContext::default()).into_string();

    assert_eq!(row_count(&html), 3);
    assert!(html.contains("Ingredient 1"));
    assert!(html.contains("Ingredient 3"));
    assert!(html.contains("name=\"ingredient-description-3\""));
    assert!(html.contains("UPLOAD RECIPE"));
    assert!(!html.contains("UPDATE RECIPE"));
}

#[test]
fn edit_form_prefills_every_ingredient() {
    let recipe = sample_draft();
    let context = FormContext { editing: true, source: Some(recipe.clone()) };
    let html = FormView::new().render(&context).into_string();

    assert_eq!(row_count(&html), recipe.ingredients.len());
    assert!(html.contains("value=\"flour\""));
    assert!(html.contains("value=\"1.5\""));
    assert!(html.contains("name=\"ingredient-quantity-5\""));
    assert!(html.contains("UPDATE RECIPE"));
    assert!(!html.contains("UPLOAD RECIPE"));
}

#[test]
fn edit_form_prefills_scalars() {
    let context = FormContext { editing: true, source: Some(sample_draft()) };
    let html = FormView::new().render(&context).into_string();

    assert!(html.contains("value=\"Sourdough pancakes\""));
    assert!(html.contains("value=\"https://example.com/pancakes\""));
    assert!(html.contains("value=\"25\""));
    assert!(html.contains("value=\"4\""));
}

#[test]
fn scalar_inputs_carry_wire_names_and_types() {
    let html = FormView::new().render(&FormContext::default()).into_string();

    for name in ["title", "sourceUrl", "image", "publisher"] {
        assert!(html.contains(&format!("name=\"{name}\" type=\"text\"")), "missing {name}");
    }
    for name in ["cookingTime", "servings"] {
        assert!(
            html.contains(&format!("name=\"{name}\" type=\"number\" min=\"0\"")),
            "missing numeric {name}"
        );
    }
}

#[test]
fn source_values_are_escaped() {
    let mut recipe = sample_draft();
    recipe.title = "Beans & \"toast\" <fast>".to_string();
    let context = FormContext { editing: true, source: Some(recipe) };
    let html = FormView::new().render(&context).into_string();

    assert!(html.contains("Beans &amp; &quot;toast&quot; &lt;fast&gt;"));
    assert!(!html.contains("<fast>"));
}

#[test]
fn add_row_control_is_present() {
    let html = FormView::new().render(&FormContext::default()).into_string();
    assert!(html.contains("class=\"editor__add-row\""));
    assert!(html.contains("Add ingredient"));
}

#[test]
fn row_fragment_labels_only_the_new_row() {
    let html = ingredient_row_markup(4, None).into_string();

    assert_eq!(row_count(&html), 1);
    assert!(html.contains("data-row=\"4\""));
    assert!(html.contains("Ingredient 4"));
    assert!(html.contains("name=\"ingredient-quantity-4\""));
    assert!(html.contains("name=\"ingredient-unit-4\""));
    assert!(html.contains("name=\"ingredient-description-4\""));
    assert!(html.contains("value=\"\""));
}

#[test]
fn row_inputs_are_never_required() {
    let html = ingredient_row_markup(1, None).into_string();
    assert!(!html.contains("required"));
}

#[test]
fn submit_icon_resolves_against_sheet() {
    let options = MarkupOptions::new().with_icon_sheet("/assets/icons.svg");
    let html = FormView::with_options(options)
        .render(&FormContext::default())
        .into_string();
    assert!(html.contains("href=\"/assets/icons.svg#icon-upload-cloud\""));
}

#[test]
fn form_mounts_into_form_region() {
    assert_eq!(FormView::new().region(), Region::Form);
}
