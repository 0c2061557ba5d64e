//! Response capture and grading.

use crate::{
  Error, Result,
  error::require_non_blank,
  grade::Grader,
  record::{NewResponse, QuestionId, Response},
  store::CourseStore,
};

/// Grade and persist a student's answer to `question_id`.
///
/// The question must exist: a dangling id yields
/// [`Error::QuestionNotFound`] and no response is written. `student_id` must
/// not be blank; `answer_text` may be empty and is stored as given. The
/// verdict comes from `grader`.
pub async fn record<S, G>(
  store: &S,
  grader: &G,
  question_id: QuestionId,
  student_id: &str,
  answer_text: &str,
) -> Result<Response>
where
  S: CourseStore + ?Sized,
  G: Grader + ?Sized,
{
  require_non_blank("student_id", student_id)?;

  let question = store
    .get_question(question_id)
    .await
    .map_err(Error::storage)?
    .ok_or(Error::QuestionNotFound(question_id))?;

  let is_correct = grader.grade(&question, answer_text);

  let response = store
    .insert_response(NewResponse {
      question_id,
      student_id: student_id.to_owned(),
      answer_text: answer_text.to_owned(),
      is_correct,
    })
    .await
    .map_err(Error::storage)?;

  tracing::debug!(
    response_id = %response.id,
    %question_id,
    student_id,
    is_correct,
    "response recorded"
  );
  Ok(response)
}
