//! Validated entry points for arguments whose iterability is only known at runtime.
//!
//! Every function here checks its arguments before building anything, so a
//! failure is reported from the call itself and no value is ever produced.
//! Arguments are any [`Iterable`]: a [`Value`] is checked at runtime, while
//! ordinary collections always pass.
//!
//! ```rust
//! use seqtools::{dynamic, SeqError, Value};
//!
//! let err = dynamic::chain(vec![Value::from("abc"), Value::from(123)]).err();
//! assert_eq!(err, Some(SeqError::NotIterable { position: Some(2) }));
//! ```

use tracing::debug;

use crate::{
    build::{self, Cycle, Repeat},
    check::Iterable,
    compose::{ChainAll, Compress, DropWhile, Filter, Map2, Slice, SliceBounds},
    error::{Result, SeqError},
    value::{Truthy, Value},
    Seq,
};

fn checked<S: Iterable>(op: &'static str, source: S) -> Result<S::IntoSeq> {
    source.into_seq().inspect_err(|_| {
        debug!(op, "argument is not iterable");
    })
}

fn checked_at<S: Iterable>(op: &'static str, position: usize, source: S) -> Result<S::IntoSeq> {
    source.into_seq().map_err(|err| {
        debug!(op, position, "argument is not iterable");
        err.at_position(position)
    })
}

/// Cycle through `source` forever; fails if `source` is not iterable.
///
/// ```rust
/// use seqtools::{dynamic, Seq, Value};
///
/// assert!(dynamic::cycle(Value::from(123)).is_err());
///
/// let mut seq = dynamic::cycle(Value::from("ab")).unwrap();
/// assert_eq!(seq.advance().unwrap_yielded(), Value::from("a"));
/// ```
pub fn cycle<S>(source: S) -> Result<Cycle<S::IntoSeq>>
where
    S: Iterable,
    S::Item: Clone,
{
    Ok(checked("cycle", source)?.cycle())
}

/// Repeat `value` forever or `times` times; fails if `value` is [`Value::Null`].
pub fn repeat(value: Value, times: Option<usize>) -> Result<Repeat<Value>> {
    if value.is_null() {
        debug!(op = "repeat", "value is null");
        return Err(SeqError::InvalidArgument {
            name: "value",
            reason: "must not be null",
        });
    }
    Ok(build::repeat(value, times))
}

/// Concatenate `sources`; the error names the 1-based position of the first non-iterable.
pub fn chain<S, I>(sources: I) -> Result<ChainAll<S::IntoSeq>>
where
    I: IntoIterator<Item = S>,
    S: Iterable,
{
    let seqs = sources
        .into_iter()
        .enumerate()
        .map(|(i, source)| checked_at("chain", i + 1, source))
        .collect::<Result<Vec<_>>>()?;
    Ok(ChainAll::new(seqs))
}

/// Keep values of `data` whose paired selector is truthy.
pub fn compress<D, S>(data: D, selectors: S) -> Result<Compress<D::IntoSeq, S::IntoSeq>>
where
    D: Iterable,
    S: Iterable,
    S::Item: Truthy,
{
    let data = checked_at("compress", 1, data)?;
    let selectors = checked_at("compress", 2, selectors)?;
    Ok(data.compress(selectors))
}

/// Drop values while `predicate` holds, then yield the rest.
pub fn drop_while<S, P>(source: S, predicate: P) -> Result<DropWhile<S::IntoSeq, P>>
where
    S: Iterable,
    P: FnMut(&S::Item) -> bool,
{
    Ok(checked("drop_while", source)?.drop_while(predicate))
}

/// Keep values for which `predicate` holds.
pub fn i_filter<S, P>(source: S, predicate: P) -> Result<Filter<S::IntoSeq, P>>
where
    S: Iterable,
    P: FnMut(&S::Item) -> bool,
{
    Ok(checked("i_filter", source)?.i_filter(predicate))
}

/// Keep values for which `predicate` does not hold.
pub fn i_filter_false<S, P>(source: S, predicate: P) -> Result<Filter<S::IntoSeq, P>>
where
    S: Iterable,
    P: FnMut(&S::Item) -> bool,
{
    Ok(checked("i_filter_false", source)?.i_filter_false(predicate))
}

/// Select positions of `source` according to `bounds`.
pub fn i_slice<S: Iterable>(source: S, bounds: SliceBounds) -> Result<Slice<S::IntoSeq>> {
    checked("i_slice", source)?.i_slice(bounds)
}

/// Yield `f(x, y)` for values paired from `a` and `b`.
pub fn i_map<F, A, B, T>(f: F, a: A, b: B) -> Result<Map2<A::IntoSeq, B::IntoSeq, F>>
where
    A: Iterable,
    B: Iterable,
    F: FnMut(A::Item, B::Item) -> T,
{
    let a = checked_at("i_map", 1, a)?;
    let b = checked_at("i_map", 2, b)?;
    Ok(a.i_map(b, f))
}
