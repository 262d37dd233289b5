//! Lookup Models
//!
//! Reference tables the employee form selects against. States belong to a
//! country and cities to a state, so their option lists can be narrowed by
//! parent id.

use serde::{Deserialize, Serialize};

/// A single `{id, name}` entry for a select widget. All four lookup
/// tables are read through this shape; parent filtering happens in the
/// query, not in the row type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LookupOption {
    pub id: i64,
    pub name: String,
}

/// The lookup tables a select field can draw its options from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Country,
    State,
    City,
    Department,
}

impl LookupKind {
    /// Table name in the database
    pub fn table(&self) -> &'static str {
        match self {
            LookupKind::Country => "country",
            LookupKind::State => "state",
            LookupKind::City => "city",
            LookupKind::Department => "department",
        }
    }
}
