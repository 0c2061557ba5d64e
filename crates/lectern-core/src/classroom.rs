//! [`Classroom`]: the pipeline with its collaborators wired in.
//!
//! The store, the random source and the grading strategy are all handed in by
//! the surrounding application; a classroom owns no storage lifecycle of its
//! own and keeps no state between calls.

use std::sync::Arc;

use rand::rngs::StdRng;

use crate::{
  Error, Result, dispatch,
  grade::{AlwaysCorrect, Grader},
  material,
  pick::{Picker, RngPicker},
  record::{Material, MaterialId, Question, QuestionId, Response},
  reply::Reply,
  respond,
  store::CourseStore,
};

pub struct Classroom<S, P = RngPicker<StdRng>, G = AlwaysCorrect> {
  store:  Arc<S>,
  picker: P,
  grader: G,
}

impl<S: CourseStore> Classroom<S> {
  /// A classroom with an entropy-seeded picker and the always-correct grader.
  pub fn new(store: Arc<S>) -> Self {
    Self { store, picker: RngPicker::from_entropy(), grader: AlwaysCorrect }
  }
}

impl<S, P, G> Classroom<S, P, G>
where
  S: CourseStore,
  P: Picker,
  G: Grader,
{
  /// Replace the random source.
  pub fn with_picker<Q: Picker>(self, picker: Q) -> Classroom<S, Q, G> {
    Classroom { store: self.store, picker, grader: self.grader }
  }

  /// Replace the grading strategy.
  pub fn with_grader<H: Grader>(self, grader: H) -> Classroom<S, P, H> {
    Classroom { store: self.store, picker: self.picker, grader }
  }

  pub fn store(&self) -> &Arc<S> { &self.store }

  // ── Typed operations ──────────────────────────────────────────────────────

  pub async fn submit(&self, staff_id: &str, text: &str) -> Result<Material> {
    material::submit(self.store.as_ref(), staff_id, text).await
  }

  pub async fn derive_and_store(&self, material_id: MaterialId) -> Result<Question> {
    dispatch::derive_and_store(self.store.as_ref(), &self.picker, material_id).await
  }

  pub async fn dispatch(&self, student_id: &str) -> Result<Question> {
    dispatch::dispatch(self.store.as_ref(), &self.picker, student_id).await
  }

  pub async fn record(
    &self,
    question_id: QuestionId,
    student_id: &str,
    answer_text: &str,
  ) -> Result<Response> {
    respond::record(
      self.store.as_ref(),
      &self.grader,
      question_id,
      student_id,
      answer_text,
    )
    .await
  }

  /// Every response recorded against `question_id`, oldest first.
  pub async fn responses_to(&self, question_id: QuestionId) -> Result<Vec<Response>> {
    self
      .store
      .get_question(question_id)
      .await
      .map_err(Error::storage)?
      .ok_or(Error::QuestionNotFound(question_id))?;
    self
      .store
      .list_responses_for(question_id)
      .await
      .map_err(Error::storage)
  }

  // ── Boundary ──────────────────────────────────────────────────────────────

  pub async fn upload_material(&self, staff_id: &str, text: &str) -> Result<Reply> {
    Reply::settle(self.submit(staff_id, text).await, Reply::material_uploaded)
  }

  pub async fn generate_question(&self, material_id: MaterialId) -> Result<Reply> {
    Reply::settle(self.derive_and_store(material_id).await, Reply::question_generated)
  }

  pub async fn send_question(&self, student_id: &str) -> Result<Reply> {
    Reply::settle(self.dispatch(student_id).await, |q| Reply::question_sent(student_id, q))
  }

  pub async fn submit_answer(
    &self,
    question_id: QuestionId,
    student_id: &str,
    answer_text: &str,
  ) -> Result<Reply> {
    Reply::settle(
      self.record(question_id, student_id, answer_text).await,
      Reply::response_submitted,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    reply::ReplyStatus,
    testing::{FixedPicker, MemoryStore},
  };

  fn classroom() -> Classroom<MemoryStore, FixedPicker> {
    Classroom::new(Arc::new(MemoryStore::default())).with_picker(FixedPicker(0))
  }

  #[tokio::test]
  async fn end_to_end_scenario() {
    let c = classroom();

    let m = c
      .submit("staff1", "Photosynthesis uses light. Plants grow.")
      .await
      .unwrap();
    assert_eq!(m.id, MaterialId(1));

    let q = c.derive_and_store(m.id).await.unwrap();
    assert_eq!(q.material_id, MaterialId(1));
    assert_eq!(q.text, "Photosynthesis uses light?");

    let sent = c.dispatch("student9").await.unwrap();
    assert_eq!(sent, q);

    let r = c.record(q.id, "student9", "light").await.unwrap();
    assert!(r.is_correct);
    assert_eq!(c.responses_to(q.id).await.unwrap(), vec![r]);
  }

  #[tokio::test]
  async fn boundary_messages() {
    let c = classroom();

    let reply = c.upload_material("staff1", "Cells divide. DNA copies.").await.unwrap();
    assert!(reply.is_ok());
    assert_eq!(reply.message, "Material 1 uploaded successfully!");

    let reply = c.generate_question(MaterialId(1)).await.unwrap();
    assert_eq!(reply.message, "Question generated: Cells divide?");

    let reply = c.send_question("student9").await.unwrap();
    assert_eq!(reply.message, "Sent question to student9: Cells divide?");

    let reply = c.submit_answer(QuestionId(1), "student9", "mitosis").await.unwrap();
    assert_eq!(reply.message, "Response 1 submitted successfully!");
  }

  #[tokio::test]
  async fn boundary_failures_are_replies() {
    let c = classroom();

    let reply = c.send_question("student9").await.unwrap();
    assert_eq!(reply.status, ReplyStatus::Unavailable);
    assert_eq!(reply.message, "No questions available.");

    let reply = c.generate_question(MaterialId(8)).await.unwrap();
    assert_eq!(reply.status, ReplyStatus::NotFound);
    assert_eq!(reply.message, "Material not found.");

    let reply = c.submit_answer(QuestionId(8), "student9", "x").await.unwrap();
    assert_eq!(reply.status, ReplyStatus::NotFound);
    assert_eq!(reply.message, "Question not found.");

    let reply = c.upload_material("", "text").await.unwrap();
    assert_eq!(reply.status, ReplyStatus::Rejected);
  }

  #[tokio::test]
  async fn storage_failures_stay_errors() {
    let c = classroom();
    c.store().go_offline();
    let err = c.upload_material("staff1", "text").await.unwrap_err();
    assert!(matches!(err, Error::Storage(_)));
  }

  #[tokio::test]
  async fn swapped_grader_is_used() {
    let c = classroom().with_grader(|q: &Question, answer: &str| {
      q.text.to_lowercase().contains(&answer.to_lowercase())
    });
    let m = c.submit("staff1", "Plants grow").await.unwrap();
    let q = c.derive_and_store(m.id).await.unwrap();

    assert!(c.record(q.id, "student9", "plants").await.unwrap().is_correct);
    assert!(!c.record(q.id, "student9", "rocks").await.unwrap().is_correct);
  }

  #[tokio::test]
  async fn responses_to_missing_question_is_not_found() {
    let c = classroom();
    let err = c.responses_to(QuestionId(1)).await.unwrap_err();
    assert!(err.is_not_found());
  }
}
