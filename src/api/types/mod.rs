//! HTTP request and response types

pub mod error;
pub mod form;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use form::PositionalForm;
