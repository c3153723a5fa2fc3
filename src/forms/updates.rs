use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategoryName, SourceName, TypeConstraintError};
use crate::domain::update::{CandidateUpdate, NewUpdate};

/// JSON body accepted by `POST /api/updates`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddUpdateForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(url)]
    pub original_url: String,
    pub summary: Option<String>,
    #[validate(length(min = 1))]
    pub source: String,
    #[validate(length(min = 1))]
    pub category: String,
}

/// Validated form of [`AddUpdateForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddUpdateFormPayload {
    pub candidate: CandidateUpdate,
    pub source: SourceName,
    pub category: CategoryName,
}

impl AddUpdateFormPayload {
    pub fn into_new_update(self, publish_date: chrono::NaiveDate) -> NewUpdate {
        NewUpdate::from_candidate(self.candidate, self.source, self.category, publish_date)
    }
}

#[derive(Debug, Error)]
pub enum AddUpdateFormError {
    #[error("Add update form validation failed: {0}")]
    Validation(String),
    #[error("Add update form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddUpdateFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddUpdateFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddUpdateForm> for AddUpdateFormPayload {
    type Error = AddUpdateFormError;

    fn try_from(value: AddUpdateForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let summary = value.summary.map(|s| s.trim().to_string());
        Ok(Self {
            candidate: CandidateUpdate::new(value.title, value.original_url, summary)?,
            source: SourceName::new(value.source)?,
            category: CategoryName::new(value.category.trim().to_lowercase())?,
        })
    }
}
