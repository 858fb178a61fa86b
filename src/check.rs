//! The iterability check.
//!
//! [`Iterable`] is the capability every sequence argument must have. For anything
//! implementing [`IntoIterator`] the compiler already proves it, so the check
//! always passes. A [`Value`] is only known at runtime: `Str` and `List` pass,
//! every other variant fails with [`SeqError::NotIterable`].

use either::Either;
use tracing::debug;

use crate::{
    error::{Result, SeqError},
    iter::{pull, seq_into_iter, Pull},
    value::Value,
    Seq, Step,
};

/// Something that can be turned into a [`Seq`], possibly after a runtime check.
pub trait Iterable: Sized {
    /// Type of the values the resulting sequence produces
    type Item;
    /// The sequence this value turns into
    type IntoSeq: Seq<Item = Self::Item>;

    /// Returns `true` if [`into_seq`](Iterable::into_seq) would succeed.
    fn is_iterable(&self) -> bool;

    /// Start iterating, or fail with [`SeqError::NotIterable`].
    fn into_seq(self) -> Result<Self::IntoSeq>;
}

impl<I: IntoIterator> Iterable for I {
    type Item = I::Item;
    type IntoSeq = Pull<I::IntoIter>;

    fn is_iterable(&self) -> bool {
        true
    }

    fn into_seq(self) -> Result<Self::IntoSeq> {
        Ok(pull(self))
    }
}

impl Iterable for Value {
    type Item = Value;
    type IntoSeq = ValueSeq;

    fn is_iterable(&self) -> bool {
        matches!(self, Value::Str(_) | Value::List(_))
    }

    fn into_seq(self) -> Result<ValueSeq> {
        let inner = match self {
            Value::Str(text) => Either::Left(Chars { text, offset: 0 }),
            Value::List(items) => Either::Right(items.into_iter()),
            other => {
                debug!(kind = other.kind(), "value is not iterable");
                return Err(SeqError::not_iterable());
            }
        };
        Ok(ValueSeq(pull(inner)))
    }
}

/// Returns `true` if `value` can be iterated.
///
/// ```rust
/// use seqtools::{is_iterable, Value};
///
/// assert!(is_iterable(&vec![1, 2]));
/// assert!(is_iterable(&Value::from("abc")));
/// assert!(!is_iterable(&Value::from(123)));
/// assert!(!is_iterable(&Value::Null));
/// ```
pub fn is_iterable<T: Iterable>(value: &T) -> bool {
    value.is_iterable()
}

/// Sequence over the contents of a [`Value::Str`] or [`Value::List`].
pub struct ValueSeq(Pull<Either<Chars, std::vec::IntoIter<Value>>>);

impl Seq for ValueSeq {
    type Item = Value;

    fn advance(&mut self) -> Step<Value> {
        self.0.advance()
    }
}

seq_into_iter! {
    impl for ValueSeq;
}

/// Owning iterator over the characters of a string, each as a one-character `Value::Str`.
struct Chars {
    text: String,
    offset: usize,
}

impl Iterator for Chars {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let c = self.text[self.offset..].chars().next()?;
        self.offset += c.len_utf8();
        Some(Value::from(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_iterables_always_pass() {
        assert!(is_iterable(&"abc".chars()));
        assert!(is_iterable(&Vec::<u8>::new()));
        assert!(is_iterable(&Some(1)));
    }

    #[test]
    fn test_scalar_values_fail() {
        for v in [Value::Null, Value::from(true), Value::from(123), Value::from(1.5)] {
            assert!(!is_iterable(&v));
            assert_eq!(v.into_seq().err(), Some(SeqError::NotIterable { position: None }));
        }
    }

    #[test]
    fn test_rejected_kinds() {
        let kinds: Vec<_> = [Value::Null, Value::from(false), Value::from(7), Value::from(0.5)]
            .into_iter()
            .filter(|v| !v.is_iterable())
            .map(|v| v.kind())
            .collect();
        assert_eq!(kinds, vec!["null", "bool", "int", "float"]);
    }

    #[test]
    fn test_str_iterates_by_character() {
        let chars: Vec<Value> = Value::from("héy").into_seq().unwrap().into_iter().collect();
        assert_eq!(chars, vec![Value::from("h"), Value::from("é"), Value::from("y")]);
    }

    #[test]
    fn test_list_iterates_by_element() {
        let mut seq = Value::from(vec![1, 2]).into_seq().unwrap();
        assert_eq!(seq.advance().unwrap_yielded(), Value::Int(1));
        assert_eq!(seq.advance().unwrap_yielded(), Value::Int(2));
        assert!(seq.advance().is_complete());
    }
}
