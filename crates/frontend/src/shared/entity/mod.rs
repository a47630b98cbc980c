//! Generic master-data screens: a table of records and a create/edit dialog,
//! both driven by an [`EntitySchema`] implementation.
pub mod editor;
pub mod list;
pub mod schema;

pub use list::entity_list_page;
pub use schema::{ColumnSpec, EditorMode, EntitySchema, FieldKind, FieldSpec, FieldValue};
