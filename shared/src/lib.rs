//! Shared types for the admin panel backend
//!
//! Model structs (entities + create/update payloads) and small helpers
//! used by both the server and any in-process test clients.
//!
//! The `db` feature gates `sqlx::FromRow` derives so UI-side consumers
//! can depend on the models without pulling in a database driver.

pub mod models;
pub mod util;
