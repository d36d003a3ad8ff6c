//! Errors raised while parsing typed payloads and type identifiers

use thiserror::Error;

/// Failure to parse a users listing query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("sort field is empty")]
    EmptySortField,

    #[error("unknown sort field `{0}`")]
    UnknownSortField(String),
}

/// A string that is not one of the users action type identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown users action type `{0}`")]
pub struct UnknownActionType(pub String);
