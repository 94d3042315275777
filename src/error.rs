//! Error taxonomy for [`BoundedDeque`](crate::BoundedDeque).
//!
//! Every fallible operation returns a [`DequeError`].  Failures are atomic: an
//! operation that returns `Err` leaves the deque exactly as it found it.

/// Coarse classification of a [`DequeError`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Capacity was not supplied or was negative.
    InvalidCapacity,
    /// The seed source was rejected by [`SeedPolicy::EmptyOnly`](crate::SeedPolicy::EmptyOnly).
    InvalidArgument,
    /// Append against a full deque under [`OverflowPolicy::Strict`](crate::OverflowPolicy::Strict).
    Overflow,
    /// Removal from an empty deque.
    Empty,
    /// Positional read outside `[-len, len)`.
    IndexOutOfRange,
    /// Slicing or a unary numeric operator.
    UnsupportedOperation,
}

/// Errors returned by deque construction, mutation and lookup.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DequeError {
    #[error("invalid capacity: {}", describe_capacity(.maxlen))]
    InvalidCapacity { maxlen: Option<isize> },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("full (maxlen={maxlen})")]
    Overflow { maxlen: usize },

    #[error("empty")]
    Empty,

    #[error("index {index} out of range for deque of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("{0}")]
    UnsupportedOperation(&'static str),
}

impl DequeError {
    /// Returns the payload-free kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DequeError::InvalidCapacity { .. } => ErrorKind::InvalidCapacity,
            DequeError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            DequeError::Overflow { .. } => ErrorKind::Overflow,
            DequeError::Empty => ErrorKind::Empty,
            DequeError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            DequeError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
        }
    }

    /// Capacity named by the error, if any.
    pub fn maxlen(&self) -> Option<usize> {
        match self {
            DequeError::Overflow { maxlen } => Some(*maxlen),
            _ => None,
        }
    }
}

fn describe_capacity(maxlen: &Option<isize>) -> String {
    match maxlen {
        Some(n) => format!("maxlen must be >= 0, got {n}"),
        None => "maxlen is required".to_string(),
    }
}

/// Crate-wide result alias.
pub type Result<T, E = DequeError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            DequeError::InvalidCapacity { maxlen: Some(-1) }.kind(),
            ErrorKind::InvalidCapacity
        );
        assert_eq!(DequeError::InvalidArgument("x").kind(), ErrorKind::InvalidArgument);
        assert_eq!(DequeError::Overflow { maxlen: 2 }.kind(), ErrorKind::Overflow);
        assert_eq!(DequeError::Empty.kind(), ErrorKind::Empty);
        assert_eq!(
            DequeError::IndexOutOfRange { index: 3, len: 3 }.kind(),
            ErrorKind::IndexOutOfRange
        );
        assert_eq!(
            DequeError::UnsupportedOperation("nope").kind(),
            ErrorKind::UnsupportedOperation
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DequeError::Empty.to_string(), "empty");
        assert_eq!(DequeError::Overflow { maxlen: 2 }.to_string(), "full (maxlen=2)");
        assert_eq!(
            DequeError::InvalidCapacity { maxlen: Some(-1) }.to_string(),
            "invalid capacity: maxlen must be >= 0, got -1"
        );
        assert_eq!(
            DequeError::InvalidCapacity { maxlen: None }.to_string(),
            "invalid capacity: maxlen is required"
        );
        assert_eq!(
            DequeError::IndexOutOfRange { index: -4, len: 3 }.to_string(),
            "index -4 out of range for deque of length 3"
        );
    }

    #[test]
    fn test_error_maxlen_payload() {
        assert_eq!(DequeError::Overflow { maxlen: 7 }.maxlen(), Some(7));
        assert_eq!(DequeError::Empty.maxlen(), None);
    }
}
