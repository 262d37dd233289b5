//! Admin resource declarations
//!
//! A resource is the declarative bundle behind one admin CRUD screen: a
//! form schema, a table schema and the validation rules derived from them.
//! [`schema`] holds the typed building blocks, [`employee`] the one
//! resource this server exposes, [`form`] the submission validator.

pub mod employee;
pub mod form;
pub mod schema;

pub use schema::{ColumnDef, FieldDef, FormSchema, TableSchema, WidgetKind};
