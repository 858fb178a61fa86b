use thiserror::Error;

/// Errors raised while validating the arguments of a sequence constructor.
///
/// Validation always happens when the sequence is built, never while it is being
/// pulled, so an `Err` means no value was produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// An argument that must be iterable was absent or cannot be iterated.
    ///
    /// `position` is the 1-based argument position when the operation takes
    /// several iterables.
    #[error("{}", not_iterable_message(.position))]
    NotIterable {
        /// 1-based position of the offending argument, if there is more than one
        position: Option<usize>,
    },

    /// A required scalar argument was absent or out of range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Parameter name
        name: &'static str,
        /// What was wrong with it
        reason: &'static str,
    },
}

fn not_iterable_message(position: &Option<usize>) -> String {
    match position {
        Some(n) => format!("argument {n} is not an iterable"),
        None => "the argument passed is not an iterable".to_string(),
    }
}

impl SeqError {
    pub(crate) fn not_iterable() -> Self {
        SeqError::NotIterable { position: None }
    }

    pub(crate) fn not_iterable_at(position: usize) -> Self {
        SeqError::NotIterable {
            position: Some(position),
        }
    }

    /// Attach a 1-based argument position to a `NotIterable` error.
    pub fn at_position(self, position: usize) -> Self {
        match self {
            SeqError::NotIterable { .. } => SeqError::not_iterable_at(position),
            other => other,
        }
    }

    /// Returns `true` for [`SeqError::NotIterable`].
    pub fn is_not_iterable(&self) -> bool {
        matches!(self, SeqError::NotIterable { .. })
    }

    /// Returns `true` for [`SeqError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SeqError::InvalidArgument { .. })
    }
}

/// Result alias used by every fallible constructor in this crate.
pub type Result<T> = std::result::Result<T, SeqError>;
