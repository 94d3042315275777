//! Generic subscript and unary-operator dispatch for [`BoundedDeque`].
//!
//! Callers that forward arbitrary host-level operations (an interpreter binding, a
//! query layer) go through [`BoundedDeque::get_item`] and [`BoundedDeque::unary_op`].
//! Single-element lookups, positive or negative, are served.  Slices of any step
//! and numeric operators are refused with [`DequeError::UnsupportedOperation`].

use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::deque::BoundedDeque;
use crate::error::{DequeError, Result};

/// A subscript expression: either one position or a slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subscript {
    /// Single element; negative values count back from the tail.
    Index(isize),
    /// `start:stop:step` with any part omitted.
    Slice {
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    },
}

impl Subscript {
    pub fn slice(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Subscript::Slice { start, stop, step }
    }
}

impl From<isize> for Subscript {
    fn from(index: isize) -> Self {
        Subscript::Index(index)
    }
}

impl From<Range<isize>> for Subscript {
    fn from(r: Range<isize>) -> Self {
        Subscript::slice(Some(r.start), Some(r.end), None)
    }
}

impl From<RangeFrom<isize>> for Subscript {
    fn from(r: RangeFrom<isize>) -> Self {
        Subscript::slice(Some(r.start), None, None)
    }
}

impl From<RangeTo<isize>> for Subscript {
    fn from(r: RangeTo<isize>) -> Self {
        Subscript::slice(None, Some(r.end), None)
    }
}

impl From<RangeFull> for Subscript {
    fn from(_: RangeFull) -> Self {
        Subscript::slice(None, None, None)
    }
}

impl From<RangeInclusive<isize>> for Subscript {
    fn from(r: RangeInclusive<isize>) -> Self {
        let (start, end) = r.into_inner();
        Subscript::slice(Some(start), end.checked_add(1), None)
    }
}

impl From<RangeToInclusive<isize>> for Subscript {
    fn from(r: RangeToInclusive<isize>) -> Self {
        Subscript::slice(None, r.end.checked_add(1), None)
    }
}

/// Unary operators a dynamic caller may apply to a deque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Truthiness: non-empty.
    Bool,
    /// Element count.
    Len,
    /// Bitwise NOT (`~d`).
    Invert,
    /// Arithmetic negation (`-d`).
    Negate,
    /// Unary plus (`+d`).
    Positive,
}

/// Result of a supported [`UnaryOp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryValue {
    Bool(bool),
    Len(usize),
}

impl<T> BoundedDeque<T> {
    /// Resolves a [`Subscript`] to an element.
    ///
    /// ```rust
    /// use bounded_deque::{BoundedDeque, ErrorKind};
    ///
    /// let d = BoundedDeque::new([3, 5, 7], 5, true).unwrap();
    /// assert_eq!(d.get_item(-1isize), Ok(&7));
    /// assert_eq!(d.get_item(1isize..).unwrap_err().kind(), ErrorKind::UnsupportedOperation);
    /// ```
    pub fn get_item<S: Into<Subscript>>(&self, subscript: S) -> Result<&T> {
        match subscript.into() {
            Subscript::Index(index) => self.get(index),
            Subscript::Slice { .. } => Err(DequeError::UnsupportedOperation(
                "deque doesn't support slices",
            )),
        }
    }

    /// Applies a unary operator.  Only [`UnaryOp::Bool`] and [`UnaryOp::Len`] are defined.
    pub fn unary_op(&self, op: UnaryOp) -> Result<UnaryValue> {
        match op {
            UnaryOp::Bool => Ok(UnaryValue::Bool(self.is_nonempty())),
            UnaryOp::Len => Ok(UnaryValue::Len(self.len())),
            UnaryOp::Invert | UnaryOp::Negate | UnaryOp::Positive => Err(
                DequeError::UnsupportedOperation("unsupported unary operation on deque"),
            ),
        }
    }
}
