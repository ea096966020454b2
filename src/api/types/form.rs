//! Form extractor that keeps submission order and returns errors as JSON

use axum::{
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};

use super::error::{ApiError, ApiErrorType};

/// URL-encoded form body as ordered `(name, value)` pairs.
///
/// Field names are kept for logging only; consumers read values by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionalForm {
    fields: Vec<(String, String)>,
}

impl PositionalForm {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Values in submission order
    pub fn values(&self) -> Vec<&str> {
        self.fields.iter().map(|(_, value)| value.as_str()).collect()
    }

    /// Field names in submission order
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S> FromRequest<S> for PositionalForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(fields)) => Ok(Self::new(fields)),
            Err(rejection) => Err(rejection_to_error(&rejection)),
        }
    }
}

fn rejection_to_error(rejection: &FormRejection) -> ApiError {
    use axum::extract::rejection::FormRejection::*;

    match rejection {
        InvalidFormContentType(_) => ApiError::unsupported_media_type(
            "Expected Content-Type 'application/x-www-form-urlencoded'",
        ),
        FailedToDeserializeForm(err) => {
            ApiError::bad_request(format!("Invalid form data: {}", err.body_text()))
        }
        FailedToDeserializeFormBody(err) => {
            ApiError::bad_request(format!("Invalid form data: {}", err.body_text()))
        }
        BytesRejection(err) => ApiError::new(
            err.status(),
            ApiErrorType::InvalidRequestError,
            format!("Failed to read request body: {}", err.body_text()),
        ),
        _ => ApiError::new(
            rejection.status(),
            ApiErrorType::InvalidRequestError,
            rejection.body_text(),
        ),
    }
}
