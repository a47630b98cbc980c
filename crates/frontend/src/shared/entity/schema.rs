use contracts::domain::common::Entity;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;

use crate::shared::list_utils::{compare_text, Searchable, Sortable};

/// Editor widget of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Checkbox,
    /// Select filled from `source` (a `*/list` endpoint returning `{id, name}` rows)
    Lookup { source: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
}

/// Value of one field as the editor sees it
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Option<f64>),
    Flag(bool),
    Reference(Option<i64>),
}

impl FieldValue {
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(Some(n)) => format_number(*n),
            Self::Flag(true) => "Yes".to_string(),
            Self::Flag(false) => "No".to_string(),
            Self::Reference(Some(id)) => id.to_string(),
            Self::Number(None) | Self::Reference(None) => String::new(),
        }
    }

    /// Editor input text for `kind`; text is kept as typed
    pub fn from_input(kind: FieldKind, input: &str) -> Self {
        match kind {
            FieldKind::Text | FieldKind::TextArea => Self::Text(input.to_string()),
            FieldKind::Number => Self::Number(input.trim().parse().ok()),
            FieldKind::Checkbox => Self::Flag(input.trim() == "true"),
            FieldKind::Lookup { .. } => Self::Reference(input.trim().parse().ok()),
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            _ => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, Self::Flag(true))
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a
                .unwrap_or(f64::NEG_INFINITY)
                .total_cmp(&b.unwrap_or(f64::NEG_INFINITY)),
            (Self::Flag(a), Self::Flag(b)) => a.cmp(b),
            (Self::Reference(a), Self::Reference(b)) => a.cmp(b),
            _ => compare_text(&self.display(), &other.display()),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        format!("{n:.2}")
    }
}

/// Text fields store `None` for blank input
pub fn optional_text(value: &FieldValue) -> Option<String> {
    let text = value.as_text().trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Describes how a record is shown in the generic list and edited in the dialog
pub trait EntitySchema:
    Entity + Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Editable fields in dialog order
    const FIELDS: &'static [FieldSpec];

    /// Table columns in display order
    const COLUMNS: &'static [ColumnSpec];

    fn field(&self, key: &str) -> FieldValue;

    fn set_field(&mut self, key: &str, value: FieldValue);

    /// Text shown in a table cell; lookups override this to show names instead of ids
    fn cell(&self, key: &str) -> String {
        self.field(key).display()
    }

    fn default_sort() -> &'static str {
        Self::COLUMNS.first().map(|c| c.key).unwrap_or("id")
    }
}

impl<E: EntitySchema> Searchable for E {
    fn matches_filter(&self, filter: &str) -> bool {
        E::COLUMNS
            .iter()
            .any(|column| self.cell(column.key).to_lowercase().contains(filter))
    }
}

impl<E: EntitySchema> Sortable for E {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        self.field(field).compare(&other.field(field))
    }
}

/// Whether the dialog creates a record or edits a loaded one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Insert,
    Update,
}

impl EditorMode {
    pub fn of<E: Entity>(record: &E) -> Self {
        if record.id().is_some() {
            Self::Update
        } else {
            Self::Insert
        }
    }
}

/// Merge a saved record into the loaded rows
pub fn apply_saved<E: Entity>(rows: &mut Vec<E>, saved: E, mode: EditorMode) {
    if mode == EditorMode::Update {
        if let Some(slot) = rows.iter_mut().find(|row| row.id() == saved.id()) {
            *slot = saved;
            return;
        }
    }
    rows.push(saved);
}
