use crate::{
    iter::{pull, seq_into_iter, Pull},
    pair::Zip,
    Seq, Step,
};

/// Applies a two-argument function to values paired from two sequences.
pub struct Map2<A, B, F> {
    pairs: Zip<A, B>,
    f: F,
}

/// Yield `f(x, y)` for every pair `(x, y)` of `zip(a, b)`.
///
/// Stops with the shorter input.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let sums: Vec<_> = i_map(|x, y| x + y, [1, 2, 3], [10, 20]).into_iter().collect();
/// assert_eq!(sums, vec![11, 22]);
/// ```
pub fn i_map<F, A, B, T>(f: F, a: A, b: B) -> Map2<Pull<A::IntoIter>, Pull<B::IntoIter>, F>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> T,
{
    Map2::new(pull(a), pull(b), f)
}

impl<A, B, F> Map2<A, B, F> {
    pub(crate) fn new(a: A, b: B, f: F) -> Self {
        Self {
            pairs: Zip::new(a, b),
            f,
        }
    }
}

impl<A, B, F, T> Seq for Map2<A, B, F>
where
    A: Seq,
    B: Seq,
    F: FnMut(A::Item, B::Item) -> T,
{
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        let f = &mut self.f;
        self.pairs.advance().map(|(x, y)| f(x, y))
    }
}

seq_into_iter! {
    impl<A, B, F> for Map2<A, B, F>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{count_from, repeat};

    #[test]
    fn test_i_map_applies_function_pairwise() {
        let products: Vec<_> = i_map(|x: i32, y: i32| x * y, [2, 3, 4], [5, 6, 7])
            .into_iter()
            .collect();
        assert_eq!(products, vec![10, 18, 28]);
    }

    #[test]
    fn test_i_map_mixed_types() {
        let labels: Vec<String> = i_map(|c: char, n: usize| c.to_string().repeat(n), "ab".chars(), [3, 1])
            .into_iter()
            .collect();
        assert_eq!(labels, vec!["aaa", "b"]);
    }

    #[test]
    fn test_i_map_over_infinite_sequences() {
        let mut seq = count_from(1u32).i_map(repeat(2u32, None), |x, y| x.pow(y));
        assert_eq!(seq.advance().unwrap_yielded(), 1);
        assert_eq!(seq.advance().unwrap_yielded(), 4);
        assert_eq!(seq.advance().unwrap_yielded(), 9);
    }
}
