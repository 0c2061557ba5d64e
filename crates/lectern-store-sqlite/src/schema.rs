//! SQL schema for the Lectern SQLite store.
//!
//! Executed every time a connection is opened. Future migrations will be gated
//! on `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- All three tables are append-only.
-- No UPDATE or DELETE is ever issued by the store.
CREATE TABLE IF NOT EXISTS materials (
    id            INTEGER PRIMARY KEY,
    staff_id      TEXT NOT NULL,
    material      TEXT NOT NULL,
    submitted_at  TEXT NOT NULL    -- RFC 3339 UTC; store-assigned
);

CREATE TABLE IF NOT EXISTS questions (
    id           INTEGER PRIMARY KEY,
    material_id  INTEGER NOT NULL REFERENCES materials(id),
    question     TEXT NOT NULL,
    created_at   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS responses (
    id           INTEGER PRIMARY KEY,
    question_id  INTEGER NOT NULL REFERENCES questions(id),
    student_id   TEXT NOT NULL,
    response     TEXT NOT NULL,
    is_correct   INTEGER NOT NULL CHECK (is_correct IN (0, 1)),
    answered_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS questions_material_idx ON questions(material_id);
CREATE INDEX IF NOT EXISTS responses_question_idx ON responses(question_id);

PRAGMA user_version = 1;
";
