//! Core trait for lazy, pull-based sequences.
//!
//! A [`Seq`] is a stateful handle with a single operation, [`advance`](Seq::advance),
//! which computes exactly one step: either the next value or the end of the
//! sequence. Nothing runs until a consumer pulls.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let mut seq = count(1, 1, None).i_filter(|n: &i32| n % 3 == 0);
//! assert_eq!(seq.advance().unwrap_yielded(), 3);
//! assert_eq!(seq.advance().unwrap_yielded(), 6);
//! ```

use crate::{
    build::Cycle,
    compose::{Chain, Compress, DropWhile, Filter, Map2, Slice, SliceBounds},
    error::Result,
    iter::seq_into_iter,
    pair::{Enumerate, Zip},
    step::Step,
    value::Truthy,
};

/// A lazy sequence: each call to [`advance`](Seq::advance) produces one value or
/// signals completion.
///
/// Implementations must never resume: once `advance` has returned
/// `Step::Complete`, every later call returns `Step::Complete` as well.
pub trait Seq {
    /// Type of the values this sequence produces
    type Item;

    /// Compute the next step.
    fn advance(&mut self) -> Step<Self::Item>;

    /// Erase the concrete type of this sequence.
    fn boxed<'a>(self) -> BoxedSeq<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        BoxedSeq(Box::new(self))
    }

    /// Continue with `next` once this sequence is exhausted.
    fn chain<R>(self, next: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Seq<Item = Self::Item>,
    {
        Chain::new(self, next)
    }

    /// Replay this sequence forever, caching the first pass.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Cycle::new(self)
    }

    /// Pair values with `other` in lock-step, stopping at the shorter of the two.
    fn zip<R>(self, other: R) -> Zip<Self, R>
    where
        Self: Sized,
        R: Seq,
    {
        Zip::new(self, other)
    }

    /// Pair each value with its zero-based position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Keep values whose paired selector is truthy.
    fn compress<R>(self, selectors: R) -> Compress<Self, R>
    where
        Self: Sized,
        R: Seq,
        R::Item: Truthy,
    {
        Compress::new(self, selectors)
    }

    /// Skip the prefix for which `predicate` holds.
    fn drop_while<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, predicate)
    }

    /// Keep values for which `predicate` holds.
    fn i_filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate, true)
    }

    /// Keep values for which `predicate` does not hold.
    fn i_filter_false<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate, false)
    }

    /// Select positions `start, start + step, ...`, at most `stop` of them.
    ///
    /// Fails with [`SeqError::InvalidArgument`](crate::SeqError::InvalidArgument)
    /// when `bounds.step` is zero.
    fn i_slice(self, bounds: SliceBounds) -> Result<Slice<Self>>
    where
        Self: Sized,
    {
        Slice::new(self, bounds)
    }

    /// Combine values with `other` pairwise through `f`.
    fn i_map<R, F, T>(self, other: R, f: F) -> Map2<Self, R, F>
    where
        Self: Sized,
        R: Seq,
        F: FnMut(Self::Item, R::Item) -> T,
    {
        Map2::new(self, other, f)
    }
}

/// A type-erased [`Seq`], created with [`Seq::boxed`].
pub struct BoxedSeq<'a, T>(Box<dyn Seq<Item = T> + 'a>);

impl<T> Seq for BoxedSeq<'_, T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        self.0.advance()
    }
}

seq_into_iter! {
    impl<'a, T> for BoxedSeq<'a, T>;
}

impl<S: Seq + ?Sized> Seq for Box<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

impl<S: Seq + ?Sized> Seq for &mut S {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

impl<L, R> Seq for either::Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        match self {
            either::Either::Left(l) => l.advance(),
            either::Either::Right(r) => r.advance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use either::Either;

    use super::*;
    use crate::{build::count, iter::pull};

    #[test]
    fn test_chain_switches_to_second_sequence_after_first_completes() {
        let mut seq = pull([1, 2]).chain(count(10, 10, None));

        assert_eq!(seq.advance().unwrap_yielded(), 1);
        assert_eq!(seq.advance().unwrap_yielded(), 2);
        assert_eq!(seq.advance().unwrap_yielded(), 10);
        assert_eq!(seq.advance().unwrap_yielded(), 20);
    }

    #[test]
    fn test_boxed_sequences_share_one_type() {
        let short = pull(vec![1, 2]).boxed();
        let counted = count(7, 0, Some(1)).boxed();
        let all: Vec<BoxedSeq<'_, i32>> = vec![short, counted];

        let values: Vec<i32> = all.into_iter().flat_map(|s| s.into_iter()).collect();
        assert_eq!(values, vec![1, 2, 7]);
    }

    #[test]
    fn test_either_picks_one_shape() {
        fn digits(bounded: bool) -> Either<crate::build::Count<u8>, crate::iter::Pull<std::vec::IntoIter<u8>>> {
            if bounded {
                Either::Left(count(0, 1, Some(2)))
            } else {
                Either::Right(pull(vec![9]))
            }
        }

        let mut left = digits(true);
        assert_eq!(left.advance().unwrap_yielded(), 0);
        assert_eq!(left.advance().unwrap_yielded(), 1);
        assert!(left.advance().is_complete());

        let mut right = digits(false);
        assert_eq!(right.advance().unwrap_yielded(), 9);
        assert!(right.advance().is_complete());
    }

    #[test]
    fn test_mut_ref_advances_the_borrowed_sequence() {
        let mut seq = count(0u32, 1, None);
        {
            let borrowed = &mut seq;
            assert_eq!(borrowed.advance().unwrap_yielded(), 0);
        }
        assert_eq!(seq.advance().unwrap_yielded(), 1);
    }
}
