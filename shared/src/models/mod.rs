//! Data models shared between server and clients

pub mod employee;
pub mod lookup;

pub use employee::{EmployeeCreate, EmployeeUpdate, EmployeeWithLookups};
pub use lookup::{LookupKind, LookupOption};
