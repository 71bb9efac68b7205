//! Named-field access for grid records.
//!
//! The grid never interprets field semantics. It reads a field to show it and
//! writes raw input text back into a copy of a record when an edit commits.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// A value stored in one field of a [`Record`].
pub trait CellValue {
    /// Text shown for this value in a static cell or an edit input.
    fn cell_text(&self) -> String;

    /// Whether this value should render as an empty cell.
    ///
    /// `null`-like values report `true` so they never show up literally.
    fn is_empty_value(&self) -> bool {
        false
    }
}

/// A caller-defined row with named fields.
pub trait Record: Clone {
    type Value: CellValue;

    /// Read a field by name.
    fn field(&self, name: &str) -> Option<&Self::Value>;

    /// Overwrite a field with raw input text, creating it when absent.
    fn assign(&mut self, name: &str, raw: String);

    /// Display text for a field, empty when the field is absent or null.
    fn field_text(&self, name: &str) -> String {
        match self.field(name) {
            Some(value) if !value.is_empty_value() => value.cell_text(),
            _ => String::new(),
        }
    }
}

impl CellValue for Value {
    fn cell_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            // `Value`'s Display would wrap strings in quotes.
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    fn is_empty_value(&self) -> bool {
        self.is_null()
    }
}

impl CellValue for String {
    fn cell_text(&self) -> String {
        self.clone()
    }
}

impl Record for Map<String, Value> {
    type Value = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn assign(&mut self, name: &str, raw: String) {
        self.insert(name.to_owned(), Value::String(raw));
    }
}

impl Record for BTreeMap<String, String> {
    type Value = String;

    fn field(&self, name: &str) -> Option<&String> {
        self.get(name)
    }

    fn assign(&mut self, name: &str, raw: String) {
        self.insert(name.to_owned(), raw);
    }
}

impl Record for HashMap<String, String> {
    type Value = String;

    fn field(&self, name: &str) -> Option<&String> {
        self.get(name)
    }

    fn assign(&mut self, name: &str, raw: String) {
        self.insert(name.to_owned(), raw);
    }
}
