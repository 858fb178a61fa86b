use crate::{
    iter::{pull, seq_into_iter, Pull},
    Seq, Step,
};

/// Pulls two sequences in lock-step, completing as soon as either one does.
///
/// `a` is always pulled first; once `a` is exhausted `b` is left untouched.
/// Neither input is buffered, so infinite sequences pair fine with finite ones.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

/// Pair the values of `a` and `b`, truncating to the shorter input.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let pairs: Vec<_> = zip("ab".chars(), count_from(1)).into_iter().collect();
/// assert_eq!(pairs, vec![('a', 1), ('b', 2)]);
/// ```
pub fn zip<A, B>(a: A, b: B) -> Zip<Pull<A::IntoIter>, Pull<B::IntoIter>>
where
    A: IntoIterator,
    B: IntoIterator,
{
    Zip::new(pull(a), pull(b))
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Self { a, b, done: false }
    }
}

impl<A: Seq, B: Seq> Seq for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Complete;
        }
        let Step::Yielded(x) = self.a.advance() else {
            self.done = true;
            return Step::Complete;
        };
        let Step::Yielded(y) = self.b.advance() else {
            self.done = true;
            return Step::Complete;
        };
        Step::Yielded((x, y))
    }
}

/// Pulls any number of same-typed sequences in lock-step, yielding one `Vec` per position.
#[derive(Debug, Clone)]
pub struct ZipAll<S> {
    sources: Vec<S>,
    done: bool,
}

/// Pair the values of every sequence in `sources` positionally, truncating to the shortest.
///
/// With no sources at all the result is empty.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let rows: Vec<Vec<u8>> = zip_all(vec![vec![1, 2, 3], vec![4, 5]]).into_iter().collect();
/// assert_eq!(rows, vec![vec![1, 4], vec![2, 5]]);
/// ```
pub fn zip_all<I>(sources: I) -> ZipAll<Pull<<I::Item as IntoIterator>::IntoIter>>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    let sources: Vec<_> = sources.into_iter().map(pull).collect();
    ZipAll {
        done: sources.is_empty(),
        sources,
    }
}

impl<S: Seq> Seq for ZipAll<S> {
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Complete;
        }
        let mut row = Vec::with_capacity(self.sources.len());
        for source in &mut self.sources {
            match source.advance() {
                Step::Yielded(item) => row.push(item),
                Step::Complete => {
                    self.done = true;
                    return Step::Complete;
                }
            }
        }
        Step::Yielded(row)
    }
}

seq_into_iter! {
    impl<A, B> for Zip<A, B>;
    impl<S> for ZipAll<S>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{count_from, repeat};

    #[test]
    fn test_zip_truncates_to_shortest() {
        let pairs: Vec<_> = zip(vec![1, 2, 3], "xy".chars()).into_iter().collect();
        assert_eq!(pairs, vec![(1, 'x'), (2, 'y')]);
    }

    #[test]
    fn test_zip_accepts_infinite_inputs() {
        let mut seq = count_from(0u32).zip(repeat('z', None));
        assert_eq!(seq.advance().unwrap_yielded(), (0, 'z'));
        assert_eq!(seq.advance().unwrap_yielded(), (1, 'z'));
    }

    #[test]
    fn test_zip_does_not_pull_second_after_first_ends() {
        let mut pulled = 0;
        let counting = std::iter::from_fn(|| {
            pulled += 1;
            Some(pulled)
        });
        let values: Vec<_> = zip([10], counting).into_iter().collect();
        assert_eq!(values, vec![(10, 1)]);
        assert_eq!(pulled, 1);
    }

    #[test]
    fn test_zip_all_empty_input_list() {
        let mut seq = zip_all(Vec::<Vec<u8>>::new());
        assert!(seq.advance().is_complete());
    }

    #[test]
    fn test_zip_all_three_way() {
        let rows: Vec<_> = zip_all(["ab".chars(), "cde".chars(), "fg".chars()])
            .into_iter()
            .collect();
        assert_eq!(rows, vec![vec!['a', 'c', 'f'], vec!['b', 'd', 'g']]);
    }
}
