//! Construction-time configuration: overflow and seed policies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::deque::BoundedDeque;
use crate::error::{DequeError, Result};

/// What `append` does when the deque is already holding `maxlen` elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowPolicy {
    /// Drop the oldest element to make room for the new one.
    #[default]
    Overwrite,
    /// Reject the append with [`DequeError::Overflow`].
    Strict,
}

impl OverflowPolicy {
    /// Returns `true` for [`OverflowPolicy::Strict`].
    #[inline(always)]
    pub fn is_strict(self) -> bool {
        self == OverflowPolicy::Strict
    }
}

impl From<bool> for OverflowPolicy {
    fn from(strict_overflow: bool) -> Self {
        if strict_overflow {
            OverflowPolicy::Strict
        } else {
            OverflowPolicy::Overwrite
        }
    }
}

/// Which seed sources construction accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeedPolicy {
    /// Any finite source; over-long input is trimmed or rejected per [`OverflowPolicy`].
    #[default]
    Any,
    /// Only a source that yields nothing. A non-empty seed fails with
    /// [`DequeError::InvalidArgument`].
    EmptyOnly,
}

/// Everything needed to build a [`BoundedDeque`].
///
/// A missing or negative `maxlen` is reported as [`DequeError::InvalidCapacity`]
/// by [`build`](DequeConfig::build), not when the config is parsed.
///
/// ```rust
/// use bounded_deque::{DequeConfig, OverflowPolicy};
///
/// let d = DequeConfig::new()
///     .maxlen(3)
///     .overflow(OverflowPolicy::Strict)
///     .build([1, 2, 3])
///     .unwrap();
/// assert_eq!(d.len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DequeConfig {
    pub maxlen: Option<isize>,
    pub overflow: OverflowPolicy,
    pub seed: SeedPolicy,
}

impl DequeConfig {
    /// Config with no capacity and default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capacity.  Validated by [`build`](DequeConfig::build).
    pub fn maxlen(mut self, maxlen: isize) -> Self {
        self.maxlen = Some(maxlen);
        self
    }

    /// Sets the overflow policy.
    pub fn overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Shorthand for `overflow(OverflowPolicy::from(strict_overflow))`.
    pub fn strict(self, strict_overflow: bool) -> Self {
        self.overflow(strict_overflow.into())
    }

    /// Sets the seed policy.
    pub fn seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    /// Checks `maxlen` and returns it as a slot count.
    pub fn validated_maxlen(&self) -> Result<usize> {
        match self.maxlen {
            Some(n) if n >= 0 => Ok(n as usize),
            other => Err(DequeError::InvalidCapacity { maxlen: other }),
        }
    }

    /// Builds a deque, draining `source` eagerly.
    pub fn build<T, I>(&self, source: I) -> Result<BoundedDeque<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let maxlen = self.validated_maxlen()?;
        let mut source = source.into_iter().peekable();
        if self.seed == SeedPolicy::EmptyOnly && source.peek().is_some() {
            tracing::debug!(maxlen, "rejecting non-empty seed");
            return Err(DequeError::InvalidArgument(
                "only an empty seed is accepted",
            ));
        }

        let mut deque = BoundedDeque::with_capacity(maxlen, self.overflow);
        if let Err(err) = deque.extend_from(source) {
            tracing::debug!(maxlen, "seed exceeds strict capacity");
            return Err(err);
        }
        tracing::trace!(maxlen, len = deque.len(), "built bounded deque");
        Ok(deque)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_policy_from_bool() {
        assert_eq!(OverflowPolicy::from(true), OverflowPolicy::Strict);
        assert_eq!(OverflowPolicy::from(false), OverflowPolicy::Overwrite);
        assert_eq!(OverflowPolicy::default(), OverflowPolicy::Overwrite);
        assert!(OverflowPolicy::Strict.is_strict());
    }

    #[test]
    fn test_config_missing_maxlen() {
        let err = DequeConfig::new().build(Vec::<i32>::new()).unwrap_err();
        assert_eq!(err, DequeError::InvalidCapacity { maxlen: None });
    }

    #[test]
    fn test_config_negative_maxlen() {
        let err = DequeConfig::new().maxlen(-1).build([1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCapacity);
    }

    #[test]
    fn test_config_empty_only_seed() {
        let cfg = DequeConfig::new().maxlen(10).seed(SeedPolicy::EmptyOnly);
        let err = cfg.build([1, 2, 3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let d = cfg.build(core::iter::empty::<i32>()).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.maxlen(), 10);
    }

    #[test]
    fn test_config_strict_seed_overflow() {
        let err = DequeConfig::new()
            .maxlen(4)
            .strict(true)
            .build([1, 2, 3, 4, 5])
            .unwrap_err();
        assert_eq!(err, DequeError::Overflow { maxlen: 4 });
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_deserialize() {
        let cfg: DequeConfig =
            serde_json::from_str(r#"{"maxlen": 8, "overflow": "strict"}"#).unwrap();
        assert_eq!(cfg.maxlen, Some(8));
        assert_eq!(cfg.overflow, OverflowPolicy::Strict);
        assert_eq!(cfg.seed, SeedPolicy::Any);

        let cfg: DequeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(
            cfg.build(Vec::<u8>::new()).unwrap_err().kind(),
            ErrorKind::InvalidCapacity
        );
    }
}
