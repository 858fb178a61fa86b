use tracing::trace;

use crate::{
    iter::{pull, seq_into_iter, Pull},
    Seq, Step,
};

/// Yield every value of `a`, then every value of `b`.
///
/// If `a` never completes, `b` is never reached.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let values: Vec<_> = chain(vec![1, 2], vec![3]).into_iter().collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn chain<A, B>(a: A, b: B) -> Chain<Pull<A::IntoIter>, Pull<B::IntoIter>>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Chain::new(pull(a), pull(b))
}

/// Chains two sequences.
///
/// Created via [`chain()`] or [`Seq::chain`]. The first sequence is dropped
/// once it completes.
#[derive(Debug, Clone)]
pub struct Chain<S1, S2>(Option<S1>, S2);

impl<S1, S2> Chain<S1, S2> {
    pub(crate) fn new(first: S1, second: S2) -> Self {
        Chain(Some(first), second)
    }
}

impl<L, R> Seq for Chain<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        if let Some(l) = &mut self.0 {
            match l.advance() {
                Step::Yielded(item) => return Step::Yielded(item),
                Step::Complete => self.0 = None,
            }
        }
        self.1.advance()
    }
}

/// Yield the values of every sequence in `sources`, in order.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let words = vec!["ab".chars(), "".chars(), "c".chars()];
/// let joined: String = chain_all(words).into_iter().collect();
/// assert_eq!(joined, "abc");
/// ```
pub fn chain_all<I>(sources: I) -> ChainAll<Pull<<I::Item as IntoIterator>::IntoIter>>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    ChainAll::new(sources.into_iter().map(pull).collect())
}

/// Chains any number of same-typed sequences.
///
/// Each source is dropped as soon as it completes.
#[derive(Debug)]
pub struct ChainAll<S> {
    current: Option<S>,
    pending: std::vec::IntoIter<S>,
    index: usize,
}

impl<S> ChainAll<S> {
    pub(crate) fn new(sources: Vec<S>) -> Self {
        let mut pending = sources.into_iter();
        Self {
            current: pending.next(),
            pending,
            index: 0,
        }
    }
}

impl<S: Seq> Seq for ChainAll<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        while let Some(source) = &mut self.current {
            if let Step::Yielded(item) = source.advance() {
                return Step::Yielded(item);
            }
            self.current = self.pending.next();
            self.index += 1;
            if self.current.is_some() {
                trace!(index = self.index, "chain moving to next source");
            }
        }
        Step::Complete
    }
}

seq_into_iter! {
    impl<S1, S2> for Chain<S1, S2>;
    impl<S> for ChainAll<S>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::count;

    #[test]
    fn test_chain_yields_first_then_second() {
        let mut seq = chain(vec!['a', 'b', 'c'], vec!['1', '2', '3']);
        for expected in "abc123".chars() {
            assert_eq!(seq.advance().unwrap_yielded(), expected);
        }
        assert!(seq.advance().is_complete());
    }

    #[test]
    fn test_chain_with_empty_sides() {
        let values: Vec<u8> = chain(vec![], vec![1]).into_iter().collect();
        assert_eq!(values, vec![1]);
        let values: Vec<u8> = chain(vec![1], vec![]).into_iter().collect();
        assert_eq!(values, vec![1]);
    }

    #[test]
    fn test_infinite_first_source_hides_the_rest() {
        let mut seq = count(0, 1, None).chain(count(100, 1, None));
        for expected in 0..50 {
            assert_eq!(seq.advance().unwrap_yielded(), expected);
        }
    }

    #[test]
    fn test_chain_all_skips_empty_sources() {
        let values: Vec<_> = chain_all(vec![vec![], vec![1, 2], vec![], vec![3]])
            .into_iter()
            .collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_chain_all_of_nothing_is_empty() {
        let mut seq = chain_all(Vec::<Vec<i32>>::new());
        assert!(seq.advance().is_complete());
        assert!(seq.advance().is_complete());
    }
}
