use std::ops::Add;

use crate::{iter::seq_into_iter, Seq, Step};

/// Arithmetic progression `start, start + step, start + 2*step, ...`.
///
/// Unbounded unless a `stop` count was given, in which case exactly that many
/// values are produced.
#[derive(Debug, Clone)]
pub struct Count<T> {
    current: T,
    step: T,
    emitted: usize,
    stop: Option<usize>,
}

/// Count from `start` by `step`, producing `stop` values if given, forever otherwise.
///
/// The sum is only computed when the next value is actually pulled, so a bounded
/// count never evaluates `start + stop*step`.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let mut seq = count(5, 1, Some(3));
/// assert_eq!(seq.advance().unwrap_yielded(), 5);
/// assert_eq!(seq.advance().unwrap_yielded(), 6);
/// assert_eq!(seq.advance().unwrap_yielded(), 7);
/// assert!(seq.advance().is_complete());
/// ```
pub fn count<T>(start: T, step: T, stop: Option<usize>) -> Count<T>
where
    T: Copy + Add<Output = T>,
{
    Count {
        current: start,
        step,
        emitted: 0,
        stop,
    }
}

/// Count from `start` by one, forever.
pub fn count_from<T>(start: T) -> Count<T>
where
    T: Copy + Add<Output = T> + From<u8>,
{
    count(start, T::from(1), None)
}

/// Count from `start` by `step`, forever.
pub fn count_by<T>(start: T, step: T) -> Count<T>
where
    T: Copy + Add<Output = T>,
{
    count(start, step, None)
}

impl<T> Count<T> {
    /// Number of values produced so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl<T> Seq for Count<T>
where
    T: Copy + Add<Output = T>,
{
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        if self.stop.is_some_and(|stop| self.emitted >= stop) {
            return Step::Complete;
        }
        if self.emitted > 0 {
            self.current = self.current + self.step;
        }
        self.emitted += 1;
        Step::Yielded(self.current)
    }
}

seq_into_iter! {
    impl<T> for Count<T>;
}
