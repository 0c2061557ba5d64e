//! [`SqliteStore`], the SQLite implementation of [`CourseStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use lectern_core::{
  record::{
    Material, MaterialId, NewMaterial, NewQuestion, NewResponse, Question,
    QuestionId, Response, ResponseId,
  },
  store::CourseStore,
};

use crate::{
  Result,
  encode::{RawMaterial, RawQuestion, RawResponse, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Lectern course store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "sqlite store opened");
    Ok(store)
  }

  /// Open an in-memory store, mainly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection, flushing outstanding work.
  ///
  /// Other clones of this store fail every call afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── CourseStore impl ────────────────────────────────────────────────────────

impl CourseStore for SqliteStore {
  type Error = crate::Error;

  // ── Materials ─────────────────────────────────────────────────────────────

  async fn insert_material(&self, input: NewMaterial) -> Result<Material> {
    let submitted_at = Utc::now();
    let at_str = encode_dt(submitted_at);
    let NewMaterial { staff_id, text } = input;
    let (staff, body) = (staff_id.clone(), text.clone());

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO materials (staff_id, material, submitted_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![staff, body, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Material { id: MaterialId(id), staff_id, text, submitted_at })
  }

  async fn get_material(&self, id: MaterialId) -> Result<Option<Material>> {
    let raw: Option<RawMaterial> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {} FROM materials WHERE id = ?1",
          RawMaterial::COLUMNS
        );
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id.0], RawMaterial::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawMaterial::into_material).transpose()
  }

  // ── Questions ─────────────────────────────────────────────────────────────

  async fn insert_question(&self, input: NewQuestion) -> Result<Question> {
    let created_at = Utc::now();
    let at_str = encode_dt(created_at);
    let NewQuestion { material_id, text } = input;
    let body = text.clone();

    // `foreign_keys = ON` makes a dangling material id fail here.
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO questions (material_id, question, created_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![material_id.0, body, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Question { id: QuestionId(id), material_id, text, created_at })
  }

  async fn get_question(&self, id: QuestionId) -> Result<Option<Question>> {
    let raw: Option<RawQuestion> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {} FROM questions WHERE id = ?1",
          RawQuestion::COLUMNS
        );
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id.0], RawQuestion::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawQuestion::into_question).transpose()
  }

  async fn list_question_ids(&self) -> Result<Vec<QuestionId>> {
    let ids: Vec<i64> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id FROM questions ORDER BY id")?;
        let rows = stmt
          .query_map([], |row| row.get::<_, i64>(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(ids.into_iter().map(QuestionId).collect())
  }

  async fn list_questions_for(
    &self,
    material_id: MaterialId,
  ) -> Result<Vec<Question>> {
    let raws: Vec<RawQuestion> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {} FROM questions WHERE material_id = ?1 ORDER BY id",
          RawQuestion::COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![material_id.0], RawQuestion::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawQuestion::into_question).collect()
  }

  // ── Responses ─────────────────────────────────────────────────────────────

  async fn insert_response(&self, input: NewResponse) -> Result<Response> {
    let answered_at = Utc::now();
    let at_str = encode_dt(answered_at);
    let NewResponse { question_id, student_id, answer_text, is_correct } = input;
    let (student, answer) = (student_id.clone(), answer_text.clone());

    // `foreign_keys = ON` makes a dangling question id fail here.
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO responses
             (question_id, student_id, response, is_correct, answered_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![question_id.0, student, answer, is_correct, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Response {
      id: ResponseId(id),
      question_id,
      student_id,
      answer_text,
      is_correct,
      answered_at,
    })
  }

  async fn list_responses_for(
    &self,
    question_id: QuestionId,
  ) -> Result<Vec<Response>> {
    let raws: Vec<RawResponse> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {} FROM responses WHERE question_id = ?1 ORDER BY id",
          RawResponse::COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![question_id.0], RawResponse::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawResponse::into_response).collect()
  }
}
