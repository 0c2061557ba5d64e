//! Question derivation-and-storage, and dispatch of stored questions.

use crate::{
  Error, Result,
  derive::derive_question,
  error::require_non_blank,
  pick::{Picker, choose},
  record::{MaterialId, NewQuestion, Question},
  store::CourseStore,
};

/// Derive a question from material `material_id` and persist it.
///
/// Returns [`Error::MaterialNotFound`] without writing anything if the
/// material does not exist.
pub async fn derive_and_store<S, P>(
  store: &S,
  picker: &P,
  material_id: MaterialId,
) -> Result<Question>
where
  S: CourseStore + ?Sized,
  P: Picker + ?Sized,
{
  let material = store
    .get_material(material_id)
    .await
    .map_err(Error::storage)?
    .ok_or(Error::MaterialNotFound(material_id))?;

  let text = derive_question(&material.text, picker);

  let question = store
    .insert_question(NewQuestion { material_id, text })
    .await
    .map_err(Error::storage)?;

  tracing::debug!(
    question_id = %question.id,
    %material_id,
    text = %question.text,
    "question stored"
  );
  Ok(question)
}

/// Pick one stored question uniformly at random for `student_id`.
///
/// The student id is only logged; it never narrows the selection. Nothing is
/// written.
pub async fn dispatch<S, P>(
  store: &S,
  picker: &P,
  student_id: &str,
) -> Result<Question>
where
  S: CourseStore + ?Sized,
  P: Picker + ?Sized,
{
  require_non_blank("student_id", student_id)?;

  let ids = store.list_question_ids().await.map_err(Error::storage)?;
  let Some(&id) = choose(picker, &ids) else {
    return Err(Error::NoneAvailable);
  };

  match store.get_question(id).await.map_err(Error::storage)? {
    Some(question) => {
      tracing::info!(question_id = %question.id, student_id, "question dispatched");
      Ok(question)
    }
    None => {
      // Removed outside the core between the two reads.
      tracing::warn!(question_id = %id, "selected question disappeared");
      Err(Error::NoneAvailable)
    }
  }
}
