use tracing::{debug, trace};

use crate::{
    error::{Result, SeqError},
    iter::{pull, seq_into_iter, Pull},
    pair::Enumerate,
    Seq, Step,
};

/// Which positions [`i_slice`] selects.
///
/// The default selects every position: `start = 0`, `step = 1`, no `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceBounds {
    /// First selected position
    pub start: usize,
    /// Distance between selected positions; must be non-zero
    pub step: usize,
    /// Maximum number of positions selected; unbounded if `None`
    pub stop: Option<usize>,
}

impl Default for SliceBounds {
    fn default() -> Self {
        Self {
            start: 0,
            step: 1,
            stop: None,
        }
    }
}

impl SliceBounds {
    /// Select every `step`-th position from `start` onward.
    pub fn new(start: usize, step: usize, stop: Option<usize>) -> Self {
        Self { start, step, stop }
    }
}

/// Yields the values at selected positions of a source sequence.
///
/// `next` is the position still wanted, or `None` once no further position can
/// be selected (the `stop` count is used up or the next index would overflow).
pub struct Slice<S> {
    next: Option<usize>,
    step: usize,
    remaining: Option<usize>,
    source: Enumerate<S>,
}

/// Yield `source[start]`, `source[start + step]`, ..., at most `stop` values.
///
/// Fails with [`SeqError::InvalidArgument`] if `bounds.step` is zero. The
/// source is never pulled past the last selected position.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let picked: String = i_slice("abcdefg".chars(), SliceBounds::new(1, 2, None))?
///     .into_iter()
///     .collect();
/// assert_eq!(picked, "bdf");
/// # Ok::<(), seqtools::SeqError>(())
/// ```
pub fn i_slice<I>(source: I, bounds: SliceBounds) -> Result<Slice<Pull<I::IntoIter>>>
where
    I: IntoIterator,
{
    Slice::new(pull(source), bounds)
}

impl<S> Slice<S> {
    pub(crate) fn new(source: S, bounds: SliceBounds) -> Result<Self> {
        if bounds.step == 0 {
            debug!(?bounds, "rejected slice bounds");
            return Err(SeqError::InvalidArgument {
                name: "step",
                reason: "must be greater than zero",
            });
        }
        Ok(Self {
            next: (bounds.stop != Some(0)).then_some(bounds.start),
            step: bounds.step,
            remaining: bounds.stop,
            source: Enumerate::new(source),
        })
    }
}

impl<S: Seq> Seq for Slice<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        let Some(wanted) = self.next else {
            return Step::Complete;
        };
        loop {
            match self.source.advance() {
                Step::Yielded((index, item)) if index == wanted => {
                    self.remaining = self.remaining.map(|n| n - 1);
                    self.next = match self.remaining {
                        Some(0) => None,
                        _ => wanted.checked_add(self.step),
                    };
                    if self.next.is_none() {
                        trace!(last = wanted, "slice selected its last position");
                    }
                    return Step::Yielded(item);
                }
                Step::Yielded(_) => {}
                Step::Complete => {
                    self.next = None;
                    return Step::Complete;
                }
            }
        }
    }
}

seq_into_iter! {
    impl<S> for Slice<S>;
}
