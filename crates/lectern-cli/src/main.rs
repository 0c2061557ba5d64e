//! `lectern`: command-line front-end for the Lectern course pipeline.
//!
//! # Usage
//!
//! ```text
//! lectern submit staff1 "Photosynthesis uses light. Plants grow."
//! lectern generate 1
//! lectern send student9
//! lectern answer 1 student9 light
//! lectern responses 1
//! ```
//!
//! Settings come from `lectern.toml` (or `--config`) and `LECTERN_*`
//! environment variables.

mod settings;

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use lectern_core::{
  Classroom,
  pick::{Picker, RngPicker},
  record::{MaterialId, QuestionId, Response},
  reply::Reply,
};
use lectern_store_sqlite::SqliteStore;
use serde::Serialize;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "lectern", version, about = "Course material to quiz pipeline")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, global = true, default_value = "lectern.toml")]
  config: PathBuf,

  /// Print the created or selected record as JSON instead of a message.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Upload course material on behalf of an instructor.
  Submit { staff_id: String, text: String },
  /// Derive and store a question from a material.
  Generate { material_id: i64 },
  /// Send a randomly chosen question to a student.
  Send { student_id: String },
  /// Record a student's answer to a question.
  Answer {
    question_id: i64,
    student_id:  String,
    answer:      String,
  },
  /// List the responses recorded for a question.
  Responses { question_id: i64 },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;

  let store = SqliteStore::open(&settings.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", settings.store_path))?;
  let store = Arc::new(store);

  let outcome = match settings.seed {
    Some(seed) => {
      let classroom =
        Classroom::new(store.clone()).with_picker(RngPicker::seeded(seed));
      run(&classroom, cli.command, cli.json).await
    }
    None => run(&Classroom::new(store.clone()), cli.command, cli.json).await,
  };

  if let Ok(store) = Arc::try_unwrap(store) {
    store.close().await.context("failed to close store")?;
  }

  let output = outcome?;
  println!("{}", output.text);
  Ok(if output.ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// What a command prints, and whether it succeeded.
#[derive(Debug)]
struct Output {
  text: String,
  ok:   bool,
}

/// Execute one command.
async fn run<P: Picker>(
  classroom: &Classroom<SqliteStore, P>,
  command: Command,
  json: bool,
) -> anyhow::Result<Output> {
  match command {
    Command::Submit { staff_id, text } => report(
      classroom.submit(&staff_id, &text).await,
      json,
      Reply::material_uploaded,
    ),
    Command::Generate { material_id } => report(
      classroom.derive_and_store(MaterialId(material_id)).await,
      json,
      Reply::question_generated,
    ),
    Command::Send { student_id } => report(
      classroom.dispatch(&student_id).await,
      json,
      |q| Reply::question_sent(&student_id, q),
    ),
    Command::Answer { question_id, student_id, answer } => report(
      classroom
        .record(QuestionId(question_id), &student_id, &answer)
        .await,
      json,
      Reply::response_submitted,
    ),
    Command::Responses { question_id } => report(
      classroom.responses_to(QuestionId(question_id)).await,
      json,
      |responses| Reply::ok(list_responses(responses)),
    ),
  }
}

/// Render the outcome of a pipeline call.
///
/// With `json`, a success prints the record itself and a failure prints the
/// [`Reply`]. Storage failures are returned as errors rather than rendered.
fn report<T: Serialize>(
  outcome: lectern_core::Result<T>,
  json: bool,
  ok: impl FnOnce(&T) -> Reply,
) -> anyhow::Result<Output> {
  if json && let Ok(value) = &outcome {
    let text = serde_json::to_string_pretty(value)?;
    return Ok(Output { text, ok: true });
  }

  let reply = Reply::settle(outcome, ok)?;
  let text = if json {
    serde_json::to_string_pretty(&reply)?
  } else {
    reply.to_string()
  };
  Ok(Output { text, ok: reply.is_ok() })
}

fn list_responses(responses: &[Response]) -> String {
  if responses.is_empty() {
    return "No responses yet.".to_owned();
  }
  responses
    .iter()
    .map(|r| {
      let verdict = if r.is_correct { "correct" } else { "incorrect" };
      format!("#{} {}: {} ({verdict})", r.id, r.student_id, r.answer_text)
    })
    .collect::<Vec<_>>()
    .join("\n")
}
