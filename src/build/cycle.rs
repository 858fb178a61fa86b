use tracing::trace;

use crate::{
    iter::{pull, Pull, SeqIter},
    Seq, Step,
};

/// Replays a finite source forever.
///
/// The first pass yields source values while caching them; after the source is
/// exhausted every further value comes from the cache. An empty source completes
/// immediately instead of spinning over an empty cache.
pub struct Cycle<S: Seq> {
    state: CycleState<S>,
    cache: Vec<S::Item>,
}

enum CycleState<S> {
    FirstPass(S),
    Replay { index: usize },
    Exhausted,
}

/// Cycle through the values of `source` forever.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let letters: String = cycle("abc".chars()).into_iter().take(7).collect();
/// assert_eq!(letters, "abcabca");
/// ```
pub fn cycle<I>(source: I) -> Cycle<Pull<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Cycle::new(pull(source))
}

impl<S: Seq> Cycle<S>
where
    S::Item: Clone,
{
    pub(crate) fn new(source: S) -> Self {
        Self {
            state: CycleState::FirstPass(source),
            cache: Vec::new(),
        }
    }

    /// Values cached so far.
    pub fn cached(&self) -> &[S::Item] {
        &self.cache
    }
}

impl<S: Seq> Seq for Cycle<S>
where
    S::Item: Clone,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        if let CycleState::FirstPass(source) = &mut self.state {
            match source.advance() {
                Step::Yielded(item) => {
                    self.cache.push(item.clone());
                    return Step::Yielded(item);
                }
                Step::Complete if self.cache.is_empty() => {
                    trace!("cycle source was empty");
                    self.state = CycleState::Exhausted;
                }
                Step::Complete => {
                    trace!(cached = self.cache.len(), "cycle replaying cache");
                    self.state = CycleState::Replay { index: 0 };
                }
            }
        }

        match &mut self.state {
            CycleState::Replay { index } => {
                let item = self.cache[*index].clone();
                *index = (*index + 1) % self.cache.len();
                Step::Yielded(item)
            }
            _ => Step::Complete,
        }
    }
}

impl<S: Seq> IntoIterator for Cycle<S>
where
    S::Item: Clone,
{
    type Item = S::Item;
    type IntoIter = SeqIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        SeqIter::new(self)
    }
}
