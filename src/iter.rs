//! Bridges between [`Seq`] and the standard [`Iterator`].
//!
//! - [`SeqIter`] drives any sequence as a fused `Iterator`.
//! - [`Pull`] turns any `Iterator` into a sequence.
//!
//! Every sequence type in this crate implements [`IntoIterator`] through
//! [`SeqIter`], so results can be collected, zipped or fed back into another
//! constructor directly.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let evens: Vec<u32> = count(0, 2, Some(4)).into_iter().collect();
//! assert_eq!(evens, vec![0, 2, 4, 6]);
//!
//! let mut letters = pull("ab".chars());
//! assert_eq!(letters.advance().unwrap_yielded(), 'a');
//! ```

use std::iter::FusedIterator;

use crate::{Seq, Step};

/// Iterator adapter for any [`Seq`].
///
/// Once the wrapped sequence completes the adapter drops it and keeps
/// returning `None`.
pub struct SeqIter<S> {
    state: SeqIterState<S>,
}

enum SeqIterState<S> {
    Active(S),
    Complete,
}

impl<S: Seq> SeqIter<S> {
    /// Wrap a sequence.
    pub fn new(seq: S) -> Self {
        Self {
            state: SeqIterState::Active(seq),
        }
    }

    /// Check if the wrapped sequence has signalled completion.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, SeqIterState::Complete)
    }
}

impl<S: Seq> Iterator for SeqIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            SeqIterState::Active(seq) => match seq.advance() {
                Step::Yielded(item) => Some(item),
                Step::Complete => {
                    self.state = SeqIterState::Complete;
                    None
                }
            },
            SeqIterState::Complete => None,
        }
    }
}

impl<S: Seq> FusedIterator for SeqIter<S> {}

/// A [`Seq`] backed by a standard iterator.
///
/// The iterator is dropped the first time it returns `None`, so a `Pull`
/// never resumes even if the underlying iterator would.
pub struct Pull<I> {
    iter: Option<I>,
}

/// Create a sequence from anything that can be iterated.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let mut seq = pull(vec![1, 2]);
/// assert_eq!(seq.advance().unwrap_yielded(), 1);
/// assert_eq!(seq.advance().unwrap_yielded(), 2);
/// assert!(seq.advance().is_complete());
/// ```
pub fn pull<I>(iterable: I) -> Pull<I::IntoIter>
where
    I: IntoIterator,
{
    Pull {
        iter: Some(iterable.into_iter()),
    }
}

impl<I: Iterator> Seq for Pull<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        let Some(iter) = self.iter.as_mut() else {
            return Step::Complete;
        };
        match iter.next() {
            Some(item) => Step::Yielded(item),
            None => {
                self.iter = None;
                Step::Complete
            }
        }
    }
}

/// Implements `IntoIterator` through [`SeqIter`] for sequence types.
macro_rules! seq_into_iter {
    ($(impl $(<$($g:tt),*>)? for $ty:ty;)*) => {$(
        impl $(<$($g),*>)? IntoIterator for $ty
        where
            $ty: $crate::Seq,
        {
            type Item = <$ty as $crate::Seq>::Item;
            type IntoIter = $crate::iter::SeqIter<$ty>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::iter::SeqIter::new(self)
            }
        }
    )*};
}

pub(crate) use seq_into_iter;

seq_into_iter! {
    impl<I> for Pull<I>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Yields once, completes, then (wrongly) yields again.
    struct Flaky(u8);

    impl Seq for Flaky {
        type Item = u8;

        fn advance(&mut self) -> Step<u8> {
            self.0 += 1;
            if self.0 == 2 {
                Step::Complete
            } else {
                Step::Yielded(self.0)
            }
        }
    }

    #[test]
    fn test_seq_iter_never_resumes_after_completion() {
        let mut iter = SeqIter::new(Flaky(0));
        assert_eq!(iter.next(), Some(1));
        assert!(!iter.is_complete());
        assert_eq!(iter.next(), None);
        assert!(iter.is_complete());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_pull_drops_iterator_once_exhausted() {
        // An iterator that resumes after returning None.
        let mut n = 0;
        let resuming = std::iter::from_fn(move || {
            n += 1;
            (n != 2).then_some(n)
        });

        let mut seq = pull(resuming);
        assert_eq!(seq.advance().unwrap_yielded(), 1);
        assert!(seq.advance().is_complete());
        assert!(seq.advance().is_complete());
    }

    #[test]
    fn test_pull_into_iter_round_trip() {
        let collected: Vec<_> = pull("xyz".chars()).into_iter().collect();
        assert_eq!(collected, vec!['x', 'y', 'z']);
    }
}
