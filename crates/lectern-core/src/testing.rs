//! Test doubles shared by the unit tests in this crate.

use std::sync::{
  Mutex,
  atomic::{AtomicBool, AtomicUsize, Ordering},
};

use chrono::Utc;
use thiserror::Error;

use crate::{
  pick::Picker,
  record::{
    Material, MaterialId, NewMaterial, NewQuestion, NewResponse, Question,
    QuestionId, Response, ResponseId,
  },
  store::CourseStore,
};

// ─── Pickers ─────────────────────────────────────────────────────────────────

/// Always returns the same index, clamped to the range.
pub struct FixedPicker(pub usize);

impl Picker for FixedPicker {
  fn pick(&self, len: usize) -> usize { self.0.min(len - 1) }
}

/// Cycles through `0..len` on successive calls.
#[derive(Default)]
pub struct CyclePicker(AtomicUsize);

impl Picker for CyclePicker {
  fn pick(&self, len: usize) -> usize {
    self.0.fetch_add(1, Ordering::Relaxed) % len
  }
}

/// Misbehaves by returning `len`, one past the last valid index.
pub struct PastTheEnd;

impl Picker for PastTheEnd {
  fn pick(&self, len: usize) -> usize { len }
}

// ─── Store ───────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum MemoryError {
  #[error("material {0} does not exist")]
  DanglingMaterial(MaterialId),
  #[error("question {0} does not exist")]
  DanglingQuestion(QuestionId),
  #[error("store is offline")]
  Offline,
}

#[derive(Default)]
struct Tables {
  materials: Vec<Material>,
  questions: Vec<Question>,
  responses: Vec<Response>,
}

/// An in-memory [`CourseStore`] that assigns ids from 1, like SQLite would.
#[derive(Default)]
pub struct MemoryStore {
  tables:  Mutex<Tables>,
  offline: AtomicBool,
  calls:   AtomicUsize,
}

impl MemoryStore {
  /// Make every subsequent call fail with [`MemoryError::Offline`].
  pub fn go_offline(&self) { self.offline.store(true, Ordering::SeqCst); }

  /// Number of calls that reached the store, reads and writes alike.
  pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

  pub fn material_count(&self) -> usize {
    self.tables.lock().unwrap().materials.len()
  }

  pub fn question_count(&self) -> usize {
    self.tables.lock().unwrap().questions.len()
  }

  pub fn response_count(&self) -> usize {
    self.tables.lock().unwrap().responses.len()
  }

  fn enter(&self) -> Result<std::sync::MutexGuard<'_, Tables>, MemoryError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.offline.load(Ordering::SeqCst) {
      return Err(MemoryError::Offline);
    }
    Ok(self.tables.lock().unwrap())
  }
}

impl CourseStore for MemoryStore {
  type Error = MemoryError;

  async fn insert_material(
    &self,
    input: NewMaterial,
  ) -> Result<Material, MemoryError> {
    let mut t = self.enter()?;
    let material = Material {
      id:           MaterialId(t.materials.len() as i64 + 1),
      staff_id:     input.staff_id,
      text:         input.text,
      submitted_at: Utc::now(),
    };
    t.materials.push(material.clone());
    Ok(material)
  }

  async fn get_material(
    &self,
    id: MaterialId,
  ) -> Result<Option<Material>, MemoryError> {
    let t = self.enter()?;
    Ok(t.materials.iter().find(|m| m.id == id).cloned())
  }

  async fn insert_question(
    &self,
    input: NewQuestion,
  ) -> Result<Question, MemoryError> {
    let mut t = self.enter()?;
    if !t.materials.iter().any(|m| m.id == input.material_id) {
      return Err(MemoryError::DanglingMaterial(input.material_id));
    }
    let question = Question {
      id:          QuestionId(t.questions.len() as i64 + 1),
      material_id: input.material_id,
      text:        input.text,
      created_at:  Utc::now(),
    };
    t.questions.push(question.clone());
    Ok(question)
  }

  async fn get_question(
    &self,
    id: QuestionId,
  ) -> Result<Option<Question>, MemoryError> {
    let t = self.enter()?;
    Ok(t.questions.iter().find(|q| q.id == id).cloned())
  }

  async fn list_question_ids(&self) -> Result<Vec<QuestionId>, MemoryError> {
    let t = self.enter()?;
    Ok(t.questions.iter().map(|q| q.id).collect())
  }

  async fn list_questions_for(
    &self,
    material_id: MaterialId,
  ) -> Result<Vec<Question>, MemoryError> {
    let t = self.enter()?;
    Ok(
      t.questions
        .iter()
        .filter(|q| q.material_id == material_id)
        .cloned()
        .collect(),
    )
  }

  async fn insert_response(
    &self,
    input: NewResponse,
  ) -> Result<Response, MemoryError> {
    let mut t = self.enter()?;
    if !t.questions.iter().any(|q| q.id == input.question_id) {
      return Err(MemoryError::DanglingQuestion(input.question_id));
    }
    let response = Response {
      id:          ResponseId(t.responses.len() as i64 + 1),
      question_id: input.question_id,
      student_id:  input.student_id,
      answer_text: input.answer_text,
      is_correct:  input.is_correct,
      answered_at: Utc::now(),
    };
    t.responses.push(response.clone());
    Ok(response)
  }

  async fn list_responses_for(
    &self,
    question_id: QuestionId,
  ) -> Result<Vec<Response>, MemoryError> {
    let t = self.enter()?;
    Ok(
      t.responses
        .iter()
        .filter(|r| r.question_id == question_id)
        .cloned()
        .collect(),
    )
  }
}
