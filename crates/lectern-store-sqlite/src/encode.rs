//! Encoding and decoding helpers between Lectern records and the plain
//! values stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. Ids are the tables' integer
//! primary keys. `is_correct` is stored as 0/1.

use chrono::{DateTime, Utc};
use lectern_core::record::{
  Material, MaterialId, Question, QuestionId, Response, ResponseId,
};

use crate::{Error, Result};

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `materials` row.
pub struct RawMaterial {
  pub id:           i64,
  pub staff_id:     String,
  pub material:     String,
  pub submitted_at: String,
}

impl RawMaterial {
  pub const COLUMNS: &'static str = "id, staff_id, material, submitted_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      staff_id:     row.get(1)?,
      material:     row.get(2)?,
      submitted_at: row.get(3)?,
    })
  }

  pub fn into_material(self) -> Result<Material> {
    Ok(Material {
      id:           MaterialId(self.id),
      staff_id:     self.staff_id,
      text:         self.material,
      submitted_at: decode_dt(&self.submitted_at)?,
    })
  }
}

/// Raw values read directly from a `questions` row.
pub struct RawQuestion {
  pub id:          i64,
  pub material_id: i64,
  pub question:    String,
  pub created_at:  String,
}

impl RawQuestion {
  pub const COLUMNS: &'static str = "id, material_id, question, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      material_id: row.get(1)?,
      question:    row.get(2)?,
      created_at:  row.get(3)?,
    })
  }

  pub fn into_question(self) -> Result<Question> {
    Ok(Question {
      id:          QuestionId(self.id),
      material_id: MaterialId(self.material_id),
      text:        self.question,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read directly from a `responses` row.
pub struct RawResponse {
  pub id:          i64,
  pub question_id: i64,
  pub student_id:  String,
  pub response:    String,
  pub is_correct:  bool,
  pub answered_at: String,
}

impl RawResponse {
  pub const COLUMNS: &'static str =
    "id, question_id, student_id, response, is_correct, answered_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      question_id: row.get(1)?,
      student_id:  row.get(2)?,
      response:    row.get(3)?,
      is_correct:  row.get(4)?,
      answered_at: row.get(5)?,
    })
  }

  pub fn into_response(self) -> Result<Response> {
    Ok(Response {
      id:          ResponseId(self.id),
      question_id: QuestionId(self.question_id),
      student_id:  self.student_id,
      answer_text: self.response,
      is_correct:  self.is_correct,
      answered_at: decode_dt(&self.answered_at)?,
    })
  }
}
