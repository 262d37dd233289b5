//! Typed form/table schema building blocks
//!
//! These structs replace the usual "array of builder objects" admin-panel
//! configuration with plain data the server can both serve to the client
//! and drive validation from.

use serde::Serialize;
use shared::models::LookupKind;

/// Input widget behind a form field
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetKind {
    /// Dropdown bound to a lookup table
    Select { options: LookupKind },
    TextInput,
    /// Calendar widget; `display_format` is applied client-side, values on
    /// the wire stay ISO `YYYY-MM-DD`
    DatePicker {
        display_format: &'static str,
        native: bool,
    },
}

/// One form field: name, widget, and the rules the validator enforces
#[derive(Debug, Clone, Serialize)]
pub struct FieldDef {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub widget: WidgetKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
}

impl FieldDef {
    pub fn select(name: &'static str, options: LookupKind) -> Self {
        Self {
            name,
            label: None,
            widget: WidgetKind::Select { options },
            required: false,
            max_len: None,
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self {
            name,
            label: None,
            widget: WidgetKind::TextInput,
            required: false,
            max_len: None,
        }
    }

    /// Non-native date picker with the admin panel's d/m/Y display format
    pub fn date(name: &'static str) -> Self {
        Self {
            name,
            label: None,
            widget: WidgetKind::DatePicker {
                display_format: "d/m/Y",
                native: false,
            },
            required: false,
            max_len: None,
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

/// Ordered form field list, served as-is to the client
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub fields: Vec<FieldDef>,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One list-view column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub sortable: bool,
    pub searchable: bool,
    /// Render as a timestamp (epoch millis) rather than plain text
    pub datetime: bool,
}

impl ColumnDef {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            label: None,
            sortable: false,
            searchable: false,
            datetime: false,
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn datetime(mut self) -> Self {
        self.datetime = true;
        self
    }
}

/// Ordered column list for the list view
#[derive(Debug, Clone, Serialize)]
pub struct TableSchema {
    pub columns: Vec<ColumnDef>,
}
