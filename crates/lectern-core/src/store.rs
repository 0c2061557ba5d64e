//! The `CourseStore` trait, the storage gateway every pipeline stage uses.
//!
//! The trait is implemented by storage backends (e.g. `lectern-store-sqlite`).
//! Pipeline code depends on this abstraction, never on a concrete backend,
//! and holds no copy of stored records between calls.

use std::future::Future;

use crate::record::{
  Material, MaterialId, NewMaterial, NewQuestion, NewResponse, Question,
  QuestionId, Response,
};

/// Abstraction over a Lectern storage backend.
///
/// All writes are appends; nothing is ever updated in place. Each call must be
/// atomic for the single row it touches. Identifiers and timestamps are
/// assigned by the store.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait CourseStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Materials ─────────────────────────────────────────────────────────

  /// Persist a new material and return it with its assigned id.
  fn insert_material(
    &self,
    input: NewMaterial,
  ) -> impl Future<Output = Result<Material, Self::Error>> + Send + '_;

  /// Retrieve a material by id. Returns `None` if not found.
  fn get_material(
    &self,
    id: MaterialId,
  ) -> impl Future<Output = Result<Option<Material>, Self::Error>> + Send + '_;

  // ── Questions ─────────────────────────────────────────────────────────

  /// Persist a new question. Fails if `input.material_id` does not exist.
  fn insert_question(
    &self,
    input: NewQuestion,
  ) -> impl Future<Output = Result<Question, Self::Error>> + Send + '_;

  /// Retrieve a question by id. Returns `None` if not found.
  fn get_question(
    &self,
    id: QuestionId,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + '_;

  /// Every stored question id, ascending.
  ///
  /// Callers select from this set themselves so that selection is uniform
  /// regardless of how the backend orders rows.
  fn list_question_ids(
    &self,
  ) -> impl Future<Output = Result<Vec<QuestionId>, Self::Error>> + Send + '_;

  /// All questions derived from `material_id`, ascending by id.
  fn list_questions_for(
    &self,
    material_id: MaterialId,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  // ── Responses ─────────────────────────────────────────────────────────

  /// Persist a new response. Fails if `input.question_id` does not exist.
  fn insert_response(
    &self,
    input: NewResponse,
  ) -> impl Future<Output = Result<Response, Self::Error>> + Send + '_;

  /// All responses to `question_id`, ascending by id.
  fn list_responses_for(
    &self,
    question_id: QuestionId,
  ) -> impl Future<Output = Result<Vec<Response>, Self::Error>> + Send + '_;
}
