//! Error conversion glue between layers.
//!
//! The form layer must not depend on service error types, so the conversion
//! lives here.

use crate::forms::FormError;
use crate::services::ServiceError;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
