//! # Bounded Deque
//!
//! A fixed-capacity double-ended queue built on a ring buffer.  Appends go to the
//! tail, removals come from the head, and reads by position are O(1) in either
//! direction.  The capacity (`maxlen`) is chosen at construction and never changes.
//!
//! ## Key Features
//!
//! * **Two overflow policies:** [`OverflowPolicy::Overwrite`] drops the oldest element
//!   when a full deque receives a new one; [`OverflowPolicy::Strict`] rejects the
//!   append with [`DequeError::Overflow`] and leaves the deque untouched.
//! * **Any finite seed:** construction drains any `IntoIterator` (vectors, sets, map
//!   keys, other deques, lazy iterators) and keeps only the resulting elements.
//! * **Negative indexing:** `get(-1)` is the tail, `get(-len)` the head.
//! * **Typed failures:** every error is a [`DequeError`] with a matching [`ErrorKind`].
//!
//! ## Capacity Constraints
//!
//! * `maxlen` must be `>= 0`; a negative value fails with [`DequeError::InvalidCapacity`].
//! * `maxlen == 0` is allowed.  Such a deque is permanently empty and permanently full:
//!   overwrite mode discards every append, strict mode rejects it.
//!
//! ## Examples
//!
//! ### Overwrite (default)
//!
//! ```rust
//! use bounded_deque::BoundedDeque;
//!
//! let mut d = BoundedDeque::new([], 5, false).unwrap();
//! d.append(3).unwrap();
//! d.append(5).unwrap();
//! d.append(7).unwrap();
//!
//! assert_eq!(d.get(0), Ok(&3));
//! assert_eq!(d.get(-1), Ok(&7));
//! assert_eq!(d.to_string(), "deque([3, 5, 7], maxlen=5)");
//! ```
//!
//! ### Strict
//!
//! ```rust
//! use bounded_deque::{BoundedDeque, ErrorKind};
//!
//! let mut d = BoundedDeque::new([], 2, true).unwrap();
//! d.append(1).unwrap();
//! d.append(2).unwrap();
//!
//! let err = d.append(3).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Overflow);
//! assert_eq!(d.len(), 2);
//! ```
//!
//! ## Logging
//!
//! Evictions and strict rejections are reported through [`tracing`] at `trace` and
//! `debug` level.  The crate installs no subscriber.

// --- Module Declarations ---

pub mod deque;
pub mod error;
pub mod ops;
pub mod policy;

// --- Re-exports ---

pub use deque::{BoundedDeque, IntoIter, Iter};
pub use error::{DequeError, ErrorKind, Result};
pub use ops::{Subscript, UnaryOp, UnaryValue};
pub use policy::{DequeConfig, OverflowPolicy, SeedPolicy};
