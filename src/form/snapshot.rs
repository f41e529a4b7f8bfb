use indexmap::IndexMap;
use log::debug;

use crate::domain::{RecipeField, RowField};

/// Raw values of one ingredient row exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSnapshot {
    pub quantity: String,
    pub unit: String,
    pub description: String,
}

impl RowSnapshot {
    pub fn new(
        quantity: impl Into<String>,
        unit: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            quantity: quantity.into(),
            unit: unit.into(),
            description: description.into(),
        }
    }

    /// Blank rows are dropped before validation, so trailing untouched rows
    /// never fail a submission.
    pub fn is_blank(&self) -> bool {
        self.quantity.trim().is_empty()
            && self.unit.trim().is_empty()
            && self.description.trim().is_empty()
    }

    fn set(&mut self, field: RowField, value: &str) {
        let slot = match field {
            RowField::Quantity => &mut self.quantity,
            RowField::Unit => &mut self.unit,
            RowField::Description => &mut self.description,
        };
        *slot = value.to_string();
    }
}

/// Structured capture of one submission.
///
/// All extraction from the serialized form happens here, once; validation
/// and normalization read the snapshot and never revisit the document.
/// Rows keep the order their wire names were first seen in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    scalars: IndexMap<RecipeField, String>,
    rows: IndexMap<usize, RowSnapshot>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from serialized `(name, value)` entries in document
    /// order. `ingredient-<field>-<index>` names are grouped into rows by
    /// index; unrecognized names are dropped.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut snapshot = Self::new();
        for (name, value) in entries {
            snapshot.push_entry(name, value);
        }
        snapshot
    }

    /// Ingest one submitted entry.
    pub fn push_entry(&mut self, name: &str, value: &str) {
        if let Some((field, index)) = RowField::parse_input_name(name) {
            self.rows.entry(index).or_default().set(field, value);
        } else if let Some(field) = RecipeField::from_name(name) {
            self.scalars.insert(field, value.to_string());
        } else {
            debug!("snapshot: dropping unrecognized entry {name:?}");
        }
    }

    pub fn set_scalar(&mut self, field: RecipeField, value: impl Into<String>) {
        self.scalars.insert(field, value.into());
    }

    /// Append a row after the highest index seen so far.
    pub fn push_row(&mut self, row: RowSnapshot) {
        let index = self.rows.keys().copied().max().unwrap_or(0) + 1;
        self.rows.insert(index, row);
    }

    /// Raw value of a scalar field; empty when the field never appeared.
    pub fn scalar(&self, field: RecipeField) -> &str {
        self.scalars.get(&field).map_or("", String::as_str)
    }

    /// Rows in document order.
    pub fn rows(&self) -> impl Iterator<Item = &RowSnapshot> {
        self.rows.values()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
