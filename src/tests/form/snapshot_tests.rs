use crate::domain::RecipeField;
use crate::form::{FormSnapshot, RowSnapshot};

#[test]
fn entries_group_rows_by_index() {
    let snapshot = FormSnapshot::from_entries([
        ("title", "Baked beans"),
        ("ingredient-quantity-1", "2"),
        ("ingredient-unit-1", "cups"),
        ("ingredient-description-1", "beans"),
        ("ingredient-quantity-2", ""),
        ("ingredient-unit-2", ""),
        ("ingredient-description-2", "toast"),
        ("servings", "2"),
    ]);

    assert_eq!(snapshot.scalar(RecipeField::Title), "Baked beans");
    assert_eq!(snapshot.scalar(RecipeField::Servings), "2");
    assert_eq!(snapshot.row_count(), 2);

    let rows: Vec<_> = snapshot.rows().collect();
    assert_eq!(rows[0], &RowSnapshot::new("2", "cups", "beans"));
    assert_eq!(rows[1], &RowSnapshot::new("", "", "toast"));
}

#[test]
fn rows_keep_first_seen_order() {
    let snapshot = FormSnapshot::from_entries([
        ("ingredient-description-7", "salt"),
        ("ingredient-description-2", "pepper"),
        ("ingredient-quantity-7", "1"),
    ]);

    let rows: Vec<_> = snapshot.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, "salt");
    assert_eq!(rows[0].quantity, "1");
    assert_eq!(rows[1].description, "pepper");
}

#[test]
fn unrecognized_names_are_dropped() {
    let snapshot = FormSnapshot::from_entries([
        ("csrfToken", "abc123"),
        ("ingredient-flavor-1", "smoky"),
        ("title", "Chili"),
    ]);

    assert_eq!(snapshot.scalar(RecipeField::Title), "Chili");
    assert_eq!(snapshot.row_count(), 0);
}

#[test]
fn missing_row_fields_default_to_empty() {
    let snapshot = FormSnapshot::from_entries([("ingredient-description-1", "cumin")]);
    let rows: Vec<_> = snapshot.rows().collect();
    assert_eq!(rows[0], &RowSnapshot::new("", "", "cumin"));
}

#[test]
fn absent_scalars_read_as_empty() {
    let snapshot = FormSnapshot::new();
    assert_eq!(snapshot.scalar(RecipeField::Publisher), "");
}

#[test]
fn push_row_appends_after_existing_rows() {
    let mut snapshot = FormSnapshot::from_entries([("ingredient-description-4", "thyme")]);
    snapshot.push_row(RowSnapshot::new("1", "sprig", "rosemary"));

    let rows: Vec<_> = snapshot.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].description, "rosemary");
}
