//! Record types for the three append-only kinds Lectern stores.
//!
//! Records are never updated once written. Identifiers and timestamps are
//! assigned by the store; callers only ever hand over the `New*` inputs.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Identifiers ─────────────────────────────────────────────────────────────

macro_rules! record_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(
      Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
      Deserialize,
    )]
    #[serde(transparent)]
    pub struct $name(pub i64);

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }

    impl From<i64> for $name {
      fn from(raw: i64) -> Self { Self(raw) }
    }
  };
}

record_id! {
  /// Store-assigned identifier of a [`Material`].
  MaterialId
}

record_id! {
  /// Store-assigned identifier of a [`Question`].
  QuestionId
}

record_id! {
  /// Store-assigned identifier of a [`Response`].
  ResponseId
}

// ─── Material ────────────────────────────────────────────────────────────────

/// A unit of course content submitted by an instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
  pub id:           MaterialId,
  /// Free-form instructor identifier.
  pub staff_id:     String,
  pub text:         String,
  pub submitted_at: DateTime<Utc>,
}

/// Input to [`crate::store::CourseStore::insert_material`].
#[derive(Debug, Clone)]
pub struct NewMaterial {
  pub staff_id: String,
  pub text:     String,
}

// ─── Question ────────────────────────────────────────────────────────────────

/// A short interrogative derived from exactly one [`Material`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id:          QuestionId,
  pub material_id: MaterialId,
  /// Always ends with `?`.
  pub text:        String,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::CourseStore::insert_question`].
/// The referenced material must already exist.
#[derive(Debug, Clone)]
pub struct NewQuestion {
  pub material_id: MaterialId,
  pub text:        String,
}

// ─── Response ────────────────────────────────────────────────────────────────

/// A student's answer to one [`Question`], with the grader's verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
  pub id:          ResponseId,
  pub question_id: QuestionId,
  pub student_id:  String,
  pub answer_text: String,
  pub is_correct:  bool,
  pub answered_at: DateTime<Utc>,
}

/// Input to [`crate::store::CourseStore::insert_response`].
/// The referenced question must already exist.
#[derive(Debug, Clone)]
pub struct NewResponse {
  pub question_id: QuestionId,
  pub student_id:  String,
  pub answer_text: String,
  pub is_correct:  bool,
}
