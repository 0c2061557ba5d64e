//! Material ingestion.

use crate::{
  Error, Result,
  error::{require_non_blank, require_non_empty},
  record::{Material, NewMaterial},
  store::CourseStore,
};

/// Validate and persist a material submission.
///
/// `staff_id` must contain something other than whitespace and `text` must
/// not be empty. Both are stored exactly as given. One write, no retries.
pub async fn submit<S>(store: &S, staff_id: &str, text: &str) -> Result<Material>
where
  S: CourseStore + ?Sized,
{
  require_non_blank("staff_id", staff_id)?;
  require_non_empty("material text", text)?;

  let material = store
    .insert_material(NewMaterial {
      staff_id: staff_id.to_owned(),
      text:     text.to_owned(),
    })
    .await
    .map_err(Error::storage)?;

  tracing::debug!(material_id = %material.id, staff_id, "material stored");
  Ok(material)
}
