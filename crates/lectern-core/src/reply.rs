//! Textual outcomes handed to the front-end.
//!
//! Each pipeline call at the boundary produces a [`Reply`]: a status a caller
//! can branch on plus a human-readable message. Storage failures are not
//! replies; they stay errors.

use std::fmt;

use serde::Serialize;

use crate::{
  Error, Result,
  record::{Material, Question, Response},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
  Ok,
  /// The input was invalid.
  Rejected,
  /// The referenced material or question does not exist.
  NotFound,
  /// There was nothing to hand out.
  Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
  pub status:  ReplyStatus,
  pub message: String,
}

impl Reply {
  pub fn is_ok(&self) -> bool { self.status == ReplyStatus::Ok }

  pub fn ok(message: String) -> Self { Self { status: ReplyStatus::Ok, message } }

  /// Reply to a pipeline outcome: `ok` renders success, failures go through
  /// [`Reply::from_error`].
  pub fn settle<T>(outcome: Result<T>, ok: impl FnOnce(&T) -> Reply) -> Result<Self> {
    match outcome {
      Ok(value) => Ok(ok(&value)),
      Err(e) => Self::from_error(e),
    }
  }

  pub fn material_uploaded(material: &Material) -> Self {
    Self::ok(format!("Material {} uploaded successfully!", material.id))
  }

  pub fn question_generated(question: &Question) -> Self {
    Self::ok(format!("Question generated: {}", question.text))
  }

  pub fn question_sent(student_id: &str, question: &Question) -> Self {
    Self::ok(format!("Sent question to {student_id}: {}", question.text))
  }

  pub fn response_submitted(response: &Response) -> Self {
    Self::ok(format!("Response {} submitted successfully!", response.id))
  }

  /// Turn a non-storage pipeline error into its reply.
  ///
  /// Storage errors are handed back unchanged as `Err`.
  pub fn from_error(error: Error) -> Result<Self> {
    let (status, message) = match error {
      Error::Validation(msg) => (ReplyStatus::Rejected, format!("Invalid input: {msg}.")),
      Error::MaterialNotFound(_) => (ReplyStatus::NotFound, "Material not found.".to_owned()),
      Error::QuestionNotFound(_) => (ReplyStatus::NotFound, "Question not found.".to_owned()),
      Error::NoneAvailable => (ReplyStatus::Unavailable, "No questions available.".to_owned()),
      e @ Error::Storage(_) => return Err(e),
    };
    Ok(Self { status, message })
  }
}

impl fmt::Display for Reply {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}
