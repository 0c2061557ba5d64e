//! Error types for `lectern-core`.

use thiserror::Error;

use crate::record::{MaterialId, QuestionId};

#[derive(Debug, Error)]
pub enum Error {
  /// Caller input was rejected before any storage access.
  #[error("invalid input: {0}")]
  Validation(String),

  #[error("material not found: {0}")]
  MaterialNotFound(MaterialId),

  #[error("question not found: {0}")]
  QuestionNotFound(QuestionId),

  /// There is no question at all to hand out.
  #[error("no questions available")]
  NoneAvailable,

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a storage backend error.
  pub fn storage<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(e))
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::MaterialNotFound(_) | Self::QuestionNotFound(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject identifiers that are empty or whitespace-only.
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::Validation(format!("{field} must not be blank")));
  }
  Ok(())
}

/// Reject the empty string only; whitespace is content.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
  if value.is_empty() {
    return Err(Error::Validation(format!("{field} must not be empty")));
  }
  Ok(())
}
