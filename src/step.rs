/// Result of pulling once from a [`Seq`](crate::Seq).
///
/// ```rust
/// use seqtools::Step;
///
/// let pulled = Step::Yielded(5);
/// assert_eq!(pulled.map(|x| x * 2), Step::Yielded(10));
/// assert!(Step::<i32>::Complete.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step<T> {
    /// The sequence produced a value and may produce more.
    Yielded(T),
    /// The sequence is exhausted and stays exhausted.
    Complete,
}

impl<T> Step<T> {
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete)
    }

    /// The yielded value, or `None` at the end of the sequence.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Yielded(value) => Some(value),
            Step::Complete => None,
        }
    }

    /// Transform the yielded value, leaving completion untouched.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Step<U> {
        match self {
            Step::Yielded(value) => Step::Yielded(f(value)),
            Step::Complete => Step::Complete,
        }
    }

    /// The yielded value.
    ///
    /// # Panics
    ///
    /// Panics if the sequence had completed.
    #[inline]
    #[track_caller]
    pub fn unwrap_yielded(self) -> T {
        match self {
            Step::Yielded(value) => value,
            Step::Complete => panic!("pulled from a completed sequence"),
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Step::Complete, Step::Yielded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Step::Yielded('a').is_yielded());
        assert!(!Step::Yielded('a').is_complete());
        assert!(Step::<char>::Complete.is_complete());
    }

    #[test]
    fn test_map_skips_completion() {
        assert_eq!(Step::<i32>::Complete.map(|x| x + 1), Step::Complete);
        assert_eq!(Step::Yielded(4).map(|x| x + 1), Step::Yielded(5));
    }

    #[test]
    fn test_option_round_trip() {
        assert_eq!(Step::from(Some(3)), Step::Yielded(3));
        assert_eq!(Step::<u8>::from(None), Step::Complete);
        assert_eq!(Step::Yielded(3).into_option(), Some(3));
        assert_eq!(Step::<u8>::Complete.into_option(), None);
    }

    #[test]
    #[should_panic(expected = "pulled from a completed sequence")]
    fn test_unwrap_yielded_on_completion_panics() {
        Step::<()>::Complete.unwrap_yielded();
    }
}
