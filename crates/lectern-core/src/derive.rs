//! Question derivation: turn a material's text into one question string.
//!
//! The policy is deliberately naive. The text is cut at every `.`, each piece
//! is trimmed, one piece is chosen uniformly at random and a `?` is appended.
//! Empty pieces (from `..` or a trailing `.`) stay in the candidate set, so
//! `"?"` is a possible result.

use crate::pick::{Picker, choose};

/// The trimmed, period-delimited fragments of `text`, in order.
///
/// There is always at least one fragment: text without a `.` (including the
/// empty string) yields itself.
pub fn candidates(text: &str) -> Vec<&str> {
  text.split('.').map(str::trim).collect()
}

/// Derive a question from `material_text`, drawing the fragment from `picker`.
pub fn derive_question<P>(material_text: &str, picker: &P) -> String
where
  P: Picker + ?Sized,
{
  let fragments = candidates(material_text);
  let body = choose(picker, &fragments).copied().unwrap_or_default();
  format!("{body}?")
}
