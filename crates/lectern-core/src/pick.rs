//! Injected randomness.
//!
//! Both question derivation and dispatch make a uniform random choice. The
//! source of that choice is a [`Picker`] passed in by the caller, so tests can
//! pin it and the binary can seed it.

use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng, rngs::StdRng};

/// A source of uniformly distributed indices.
pub trait Picker: Send + Sync {
  /// Return an index in `0..len`. Callers guarantee `len > 0`.
  fn pick(&self, len: usize) -> usize;
}

/// Pick one element of `items` uniformly, or `None` if it is empty.
///
/// An index the picker returns outside `0..len` is wrapped back into range,
/// so a non-empty slice always yields one of its own elements.
pub fn choose<'a, T, P>(picker: &P, items: &'a [T]) -> Option<&'a T>
where
  P: Picker + ?Sized,
{
  if items.is_empty() {
    return None;
  }
  let len = items.len();
  let index = picker.pick(len);
  if index >= len {
    tracing::warn!(index, len, "picker returned an out-of-range index");
  }
  items.get(index % len)
}

/// A [`Picker`] backed by any [`rand::Rng`].
///
/// The generator sits behind a mutex that is held for a single draw only.
#[derive(Debug)]
pub struct RngPicker<R> {
  rng: Mutex<R>,
}

impl<R> RngPicker<R> {
  pub fn new(rng: R) -> Self { Self { rng: Mutex::new(rng) } }
}

impl RngPicker<StdRng> {
  /// A generator seeded from the operating system.
  pub fn from_entropy() -> Self { Self::new(StdRng::from_entropy()) }

  /// A reproducible generator: the same seed yields the same picks.
  pub fn seeded(seed: u64) -> Self { Self::new(StdRng::seed_from_u64(seed)) }
}

impl Default for RngPicker<StdRng> {
  fn default() -> Self { Self::from_entropy() }
}

impl<R: Rng + Send> Picker for RngPicker<R> {
  fn pick(&self, len: usize) -> usize {
    let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
    rng.gen_range(0..len)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::PastTheEnd;

  #[test]
  fn seeded_pickers_agree() {
    let a = RngPicker::seeded(17);
    let b = RngPicker::seeded(17);
    let xs: Vec<_> = (0..32).map(|_| a.pick(10)).collect();
    let ys: Vec<_> = (0..32).map(|_| b.pick(10)).collect();
    assert_eq!(xs, ys);
  }

  #[test]
  fn picks_stay_in_range() {
    let p = RngPicker::from_entropy();
    for len in 1..20 {
      for _ in 0..50 {
        assert!(p.pick(len) < len);
      }
    }
  }

  #[test]
  fn choose_on_empty_is_none() {
    let p = RngPicker::seeded(1);
    let empty: [u8; 0] = [];
    assert!(choose(&p, &empty).is_none());
    assert_eq!(choose(&p, &[9]), Some(&9));
  }

  #[test]
  fn out_of_range_picks_wrap_into_the_slice() {
    assert_eq!(choose(&PastTheEnd, &["a", "b"]), Some(&"a"));
    assert_eq!(choose(&PastTheEnd, &[1, 2, 3]), Some(&1));
  }
}
