use crate::{
    iter::{pull, seq_into_iter, Pull},
    pair::Zip,
    value::Truthy,
    Seq, Step,
};

/// Keeps data values whose paired selector is truthy.
#[derive(Debug, Clone)]
pub struct Compress<D, S> {
    pairs: Zip<D, S>,
}

/// Yield the values of `data` at positions where `selectors` is truthy.
///
/// Pairing is shortest-wins: extra data or extra selectors are ignored.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let kept: String = compress("abcd".chars(), [1, 0, 1, 0]).into_iter().collect();
/// assert_eq!(kept, "ac");
/// ```
pub fn compress<D, S>(data: D, selectors: S) -> Compress<Pull<D::IntoIter>, Pull<S::IntoIter>>
where
    D: IntoIterator,
    S: IntoIterator,
    S::Item: Truthy,
{
    Compress::new(pull(data), pull(selectors))
}

impl<D, S> Compress<D, S> {
    pub(crate) fn new(data: D, selectors: S) -> Self {
        Self {
            pairs: Zip::new(data, selectors),
        }
    }
}

impl<D, S> Seq for Compress<D, S>
where
    D: Seq,
    S: Seq,
    S::Item: Truthy,
{
    type Item = D::Item;

    fn advance(&mut self) -> Step<D::Item> {
        loop {
            match self.pairs.advance() {
                Step::Yielded((item, selector)) if selector.is_truthy() => {
                    return Step::Yielded(item);
                }
                Step::Yielded(_) => {}
                Step::Complete => return Step::Complete,
            }
        }
    }
}

/// Skips a leading run of values matching a predicate, then passes everything through.
///
/// The predicate is dropped after the first value that fails it, so it is never
/// consulted again.
pub struct DropWhile<S, P> {
    source: S,
    predicate: Option<P>,
}

/// Drop values of `source` while `predicate` holds; yield the rest unconditionally.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let rest: Vec<_> = drop_while([1, 4, 6, 4, 1], |x| *x < 5).into_iter().collect();
/// assert_eq!(rest, vec![6, 4, 1]);
/// ```
pub fn drop_while<I, P>(source: I, predicate: P) -> DropWhile<Pull<I::IntoIter>, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    DropWhile::new(pull(source), predicate)
}

impl<S, P> DropWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate: Some(predicate),
        }
    }
}

impl<S, P> Seq for DropWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        let Some(predicate) = &mut self.predicate else {
            return self.source.advance();
        };
        loop {
            match self.source.advance() {
                Step::Yielded(item) if predicate(&item) => {}
                Step::Yielded(item) => {
                    self.predicate = None;
                    return Step::Yielded(item);
                }
                Step::Complete => return Step::Complete,
            }
        }
    }
}

/// Keeps values whose predicate result matches a fixed polarity.
///
/// Created by [`i_filter`] (keep matches) and [`i_filter_false`] (keep
/// non-matches).
pub struct Filter<S, P> {
    source: S,
    predicate: P,
    keep: bool,
}

/// Yield the values of `source` for which `predicate` returns `true`.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let even: Vec<_> = i_filter(1..=6, |x| x % 2 == 0).into_iter().collect();
/// assert_eq!(even, vec![2, 4, 6]);
/// ```
pub fn i_filter<I, P>(source: I, predicate: P) -> Filter<Pull<I::IntoIter>, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter::new(pull(source), predicate, true)
}

/// Yield the values of `source` for which `predicate` returns `false`.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let odd: Vec<_> = i_filter_false(1..=6, |x| x % 2 == 0).into_iter().collect();
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn i_filter_false<I, P>(source: I, predicate: P) -> Filter<Pull<I::IntoIter>, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter::new(pull(source), predicate, false)
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P, keep: bool) -> Self {
        Self {
            source,
            predicate,
            keep,
        }
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        loop {
            match self.source.advance() {
                Step::Yielded(item) if (self.predicate)(&item) == self.keep => {
                    return Step::Yielded(item);
                }
                Step::Yielded(_) => {}
                Step::Complete => return Step::Complete,
            }
        }
    }
}

seq_into_iter! {
    impl<D, S> for Compress<D, S>;
    impl<S, P> for DropWhile<S, P>;
    impl<S, P> for Filter<S, P>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{count_from, cycle};

    #[test]
    fn test_compress_selects_by_truthiness() {
        let mut seq = compress("abcd".chars(), [1, 0, 1, 0]);
        assert_eq!(seq.advance().unwrap_yielded(), 'a');
        assert_eq!(seq.advance().unwrap_yielded(), 'c');
        assert!(seq.advance().is_complete());
    }

    #[test]
    fn test_compress_truncates_to_shorter_selectors() {
        let kept: Vec<_> = compress(1..=10, [true, true, false]).into_iter().collect();
        assert_eq!(kept, vec![1, 2]);
    }

    #[test]
    fn test_compress_with_infinite_data() {
        let kept: Vec<u32> = count_from(0u32)
            .compress(cycle([false, true]))
            .into_iter()
            .take(3)
            .collect();
        assert_eq!(kept, vec![1, 3, 5]);
    }

    #[test]
    fn test_drop_while_stops_checking_after_first_failure() {
        let mut calls = 0;
        let rest: Vec<_> = drop_while([1, 4, 6, 4, 1], |x| {
            calls += 1;
            *x < 5
        })
        .into_iter()
        .collect();
        assert_eq!(rest, vec![6, 4, 1]);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_drop_while_everything_matches() {
        let mut seq = drop_while(vec![1, 2], |_| true);
        assert!(seq.advance().is_complete());
        assert!(seq.advance().is_complete());
    }

    #[test]
    fn test_filters_partition_the_source() {
        let words = ["a", "bb", "", "ccc"];
        let long: Vec<_> = i_filter(words, |w| w.len() > 1).into_iter().collect();
        let short: Vec<_> = i_filter_false(words, |w| w.len() > 1).into_iter().collect();
        assert_eq!(long, vec!["bb", "ccc"]);
        assert_eq!(short, vec!["a", ""]);
    }

    #[test]
    fn test_filter_on_infinite_source() {
        let mut seq = count_from(1u64).i_filter(|n| n % 7 == 0);
        assert_eq!(seq.advance().unwrap_yielded(), 7);
        assert_eq!(seq.advance().unwrap_yielded(), 14);
    }
}
