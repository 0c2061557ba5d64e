//! Grading strategies for student responses.
//!
//! The recorder asks a [`Grader`] for its verdict and stores it verbatim.
//! Lectern ships only [`AlwaysCorrect`], a placeholder that accepts every
//! answer; real grading plugs in here without touching the recorder.

use crate::record::Question;

pub trait Grader: Send + Sync {
  /// Whether `answer` is a correct answer to `question`.
  fn grade(&self, question: &Question, answer: &str) -> bool;
}

/// Marks every answer correct.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysCorrect;

impl Grader for AlwaysCorrect {
  fn grade(&self, _question: &Question, _answer: &str) -> bool { true }
}

impl<F> Grader for F
where
  F: Fn(&Question, &str) -> bool + Send + Sync,
{
  fn grade(&self, question: &Question, answer: &str) -> bool {
    self(question, answer)
  }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;
  use crate::record::{MaterialId, QuestionId};

  fn question() -> Question {
    Question {
      id:          QuestionId(1),
      material_id: MaterialId(1),
      text:        "Plants grow?".into(),
      created_at:  Utc::now(),
    }
  }

  #[test]
  fn always_correct_ignores_the_answer() {
    let q = question();
    assert!(AlwaysCorrect.grade(&q, "light"));
    assert!(AlwaysCorrect.grade(&q, ""));
  }

  #[test]
  fn closures_are_graders() {
    let q = question();
    let strict = |_: &Question, answer: &str| answer.eq_ignore_ascii_case("yes");
    assert!(strict.grade(&q, "YES"));
    assert!(!strict.grade(&q, "no"));
  }
}
