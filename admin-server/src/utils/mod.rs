//! Utility modules

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, AppResponse, FieldError};
pub use result::AppResult;
