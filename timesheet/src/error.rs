use thiserror::Error;

use crate::{ActivityId, CaseId};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HoursError {
    #[error("hours must be a finite number, got {0}")]
    NotFinite(f64),
    #[error("hours must be at least 0.25, got {0}")]
    TooSmall(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("activity {0} no longer exists")]
    NotFound(ActivityId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuickAddError {
    #[error("select a case before adding")]
    MissingCase,
    #[error("select an activity type before adding")]
    MissingActivityType,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("no cases configured")]
    NoCases,
    #[error("case {0} is configured more than once")]
    DuplicateCase(CaseId),
    #[error("activity type \"{0}\" is configured more than once")]
    DuplicateActivityType(String),
    #[error("activity type labels cannot be blank")]
    BlankActivityType,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode week submission: {0}")]
    Encode(#[from] serde_json::Error),
}
