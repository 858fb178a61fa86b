use crate::{iter::seq_into_iter, Seq, Step};

/// Yields the same value over and over.
///
/// The last repetition of a bounded `Repeat` moves the value out instead of cloning it.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: Option<T>,
    remaining: Option<usize>,
}

/// Repeat `value` forever, or exactly `times` times.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let mut seq = repeat("abc", Some(2));
/// assert_eq!(seq.advance().unwrap_yielded(), "abc");
/// assert_eq!(seq.advance().unwrap_yielded(), "abc");
/// assert!(seq.advance().is_complete());
/// ```
pub fn repeat<T: Clone>(value: T, times: Option<usize>) -> Repeat<T> {
    Repeat {
        value: (times != Some(0)).then_some(value),
        remaining: times,
    }
}

impl<T: Clone> Seq for Repeat<T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        match self.remaining {
            None => self.value.clone().into(),
            Some(0) => Step::Complete,
            Some(1) => {
                self.remaining = Some(0);
                self.value.take().into()
            }
            Some(n) => {
                self.remaining = Some(n - 1);
                self.value.clone().into()
            }
        }
    }
}

seq_into_iter! {
    impl<T> for Repeat<T>;
}
