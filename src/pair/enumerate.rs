use crate::{
    iter::{pull, seq_into_iter, Pull},
    Seq, Step,
};

/// Pairs each value with its zero-based position.
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    source: S,
    index: usize,
}

/// Pair each value of `source` with its position, starting at zero.
pub fn enumerate<I: IntoIterator>(source: I) -> Enumerate<Pull<I::IntoIter>> {
    Enumerate::new(pull(source))
}

impl<S> Enumerate<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source, index: 0 }
    }
}

impl<S: Seq> Seq for Enumerate<S> {
    type Item = (usize, S::Item);

    fn advance(&mut self) -> Step<Self::Item> {
        self.source.advance().map(|item| {
            let index = self.index;
            self.index += 1;
            (index, item)
        })
    }
}

seq_into_iter! {
    impl<S> for Enumerate<S>;
}
