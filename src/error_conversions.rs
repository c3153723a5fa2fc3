//! Error conversion glue between the domain, repository and service layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::updates::AddUpdateFormError;
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::Validation(val.to_string())
        }
    }

    impl From<AddUpdateFormError> for ServiceError {
        fn from(val: AddUpdateFormError) -> Self {
            ServiceError::Validation(val.to_string())
        }
    }
}
