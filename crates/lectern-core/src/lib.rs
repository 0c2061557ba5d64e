//! Core types and pipeline stages for Lectern.
//!
//! Material goes in, a question is derived from it, questions are dispatched
//! to students, and answers come back as graded responses. Every stage talks
//! to storage through the [`store::CourseStore`] trait; this crate has no
//! database or CLI dependencies of its own.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod classroom;
pub mod derive;
pub mod dispatch;
pub mod error;
pub mod grade;
pub mod material;
pub mod pick;
pub mod record;
pub mod reply;
pub mod respond;
pub mod store;

pub use classroom::Classroom;
pub use error::{Error, Result};

#[cfg(test)]
mod testing;
