//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when an input does not satisfy the field rules.
//! - [`KeyNotFound`] thrown when an item is not found.
//! - [`ExistingKey`] thrown when a unique value is already taken.
//! - [`InUse`] thrown when a delete is blocked by a dependent row.
//! - [`Unauthorized`] thrown when credentials or a token are rejected.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`InUse`]: EngineError::InUse
//!  [`Unauthorized`]: EngineError::Unauthorized
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::ValidationErrors;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error("{0} already exists")]
    ExistingKey(String),
    #[error("{0} is still referenced by other records")]
    InUse(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Invalid stored data: {0}")]
    InvalidData(String),
    #[error("Password hashing failed: {0}")]
    Password(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// Classify a failed write, turning constraint violations into domain errors.
    ///
    /// `subject` names the record being written and ends up in the message.
    pub(crate) fn from_write(err: DbErr, subject: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::ExistingKey(subject.to_string()),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::InUse(subject.to_string()),
            _ if is_foreign_key_failure(&err) => Self::InUse(subject.to_string()),
            _ => Self::Database(err),
        }
    }
}

/// SQLite raises some foreign key violations (`ON DELETE RESTRICT`) with an
/// extended code sea-orm does not classify; the message is stable.
fn is_foreign_key_failure(err: &DbErr) -> bool {
    err.to_string().contains("FOREIGN KEY constraint failed")
}

impl From<ValidationErrors> for EngineError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InUse(a), Self::InUse(b)) => a == b,
            (Self::Unauthorized(a), Self::Unauthorized(b)) => a == b,
            (Self::InvalidData(a), Self::InvalidData(b)) => a == b,
            (Self::Password(a), Self::Password(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
