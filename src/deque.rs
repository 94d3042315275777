//! Fixed-capacity double-ended queue backed by a ring buffer.
//!
//! # Storage
//! Elements live in a boxed slice of `maxlen` slots.  A `head` cursor marks the
//! logically-first slot and `len` counts the occupied slots, so the logical
//! sequence is `slots[(head + i) % maxlen]` for `i` in `0..len`.  Unlike
//! [`VecDeque`](std::collections::VecDeque) the buffer never grows: once `len`
//! reaches `maxlen` the [`OverflowPolicy`] decides what `append` does.
//!
//! ```text
//! maxlen = 4, head = 2, len = 3
//!
//!   slots:  [ d ][ _ ][ b ][ c ]
//!                       ^head
//!   logical order: b, c, d
//! ```
//!
//! Slots are `Option<T>` so a popped element is moved out and its slot is left
//! empty; nothing is kept alive by the buffer after it leaves the deque.

use core::fmt;
use core::iter::FusedIterator;

use crate::error::{DequeError, Result};
use crate::policy::{DequeConfig, OverflowPolicy};

/// A bounded deque supporting O(1) tail-append, head-pop and positional reads.
///
/// # Overflow
/// | Policy | `append` on a full deque |
/// |--------|--------------------------|
/// | [`Overwrite`](OverflowPolicy::Overwrite) | oldest element is dropped, new one is stored |
/// | [`Strict`](OverflowPolicy::Strict) | `Err(DequeError::Overflow)`, deque unchanged |
///
/// A deque with `maxlen == 0` is both empty and full at all times.
///
/// ```rust
/// use bounded_deque::BoundedDeque;
///
/// let mut d = BoundedDeque::new([], 2, false).unwrap();
/// for i in 1..=5 {
///     d.append(i).unwrap();
/// }
/// assert_eq!(d.popleft(), Ok(4));
/// assert_eq!(d.popleft(), Ok(5));
/// ```
#[derive(Clone)]
pub struct BoundedDeque<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
    policy: OverflowPolicy,
}

impl<T> BoundedDeque<T> {
    /// Builds a deque of capacity `maxlen`, draining `source` into it.
    ///
    /// In overwrite mode only the last `maxlen` elements of `source` are kept.
    /// In strict mode a source longer than `maxlen` fails with
    /// [`DequeError::Overflow`] as soon as the extra element is reached.
    ///
    /// # Errors
    /// [`DequeError::InvalidCapacity`] if `maxlen < 0`.
    pub fn new<I>(source: I, maxlen: isize, strict_overflow: bool) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        DequeConfig::new()
            .maxlen(maxlen)
            .strict(strict_overflow)
            .build(source)
    }

    /// Creates an empty deque with room for exactly `maxlen` elements.
    pub fn with_capacity(maxlen: usize, policy: OverflowPolicy) -> Self {
        Self {
            slots: (0..maxlen).map(|_| None).collect(),
            head: 0,
            len: 0,
            policy,
        }
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the deque holds at least one element.
    #[inline(always)]
    pub fn is_nonempty(&self) -> bool {
        self.len > 0
    }

    /// Returns `true` when `len() == maxlen()`, which includes every zero-capacity deque.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Capacity fixed at construction.
    #[inline(always)]
    pub fn maxlen(&self) -> usize {
        self.slots.len()
    }

    /// Overflow policy fixed at construction.
    #[inline(always)]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Maps a logical offset from `idx` to a physical slot.
    /// Only valid while `maxlen > 0`.
    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        (idx + add) % self.slots.len()
    }

    /// Appends `value` at the tail.
    ///
    /// # Errors
    /// [`DequeError::Overflow`] if the deque is full and the policy is strict.
    #[inline]
    pub fn append(&mut self, value: T) -> Result<()> {
        self.append_evicting(value).map(drop)
    }

    /// Appends `value` at the tail and returns whatever overflow pushed out.
    ///
    /// Under [`OverflowPolicy::Overwrite`] a full deque hands back its previous
    /// head; a zero-capacity deque hands back `value` itself.
    pub fn append_evicting(&mut self, value: T) -> Result<Option<T>> {
        if !self.is_full() {
            self.push_tail(value);
            return Ok(None);
        }

        if self.policy.is_strict() {
            tracing::debug!(maxlen = self.maxlen(), "append rejected: deque full");
            return Err(DequeError::Overflow {
                maxlen: self.maxlen(),
            });
        }

        if self.slots.is_empty() {
            return Ok(Some(value));
        }

        // Full: the head slot is the oldest element and the next tail.
        let evicted = self.slots[self.head].replace(value);
        self.head = self.wrap_add(self.head, 1);
        tracing::trace!(maxlen = self.maxlen(), "overwrote oldest element");
        Ok(evicted)
    }

    /// Writes `value` into the free slot after the tail.  Caller checks `!is_full()`.
    #[inline(always)]
    fn push_tail(&mut self, value: T) {
        let tail = self.wrap_add(self.head, self.len);
        self.slots[tail] = Some(value);
        self.len += 1;
    }

    /// Appends every element of `iter` in order.
    ///
    /// In strict mode at most `maxlen - len + 1` elements are pulled from `iter`.
    /// If they do not all fit the call fails with [`DequeError::Overflow`] and the
    /// deque is left unchanged.
    pub fn extend_from<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        if !self.policy.is_strict() {
            for value in iter {
                self.append(value)?;
            }
            return Ok(());
        }

        let room = self.maxlen() - self.len;
        let staged: Vec<T> = iter.into_iter().take(room + 1).collect();
        if staged.len() > room {
            tracing::debug!(maxlen = self.maxlen(), "extend rejected: deque full");
            return Err(DequeError::Overflow {
                maxlen: self.maxlen(),
            });
        }
        for value in staged {
            self.push_tail(value);
        }
        Ok(())
    }

    /// Removes and returns the head element.
    ///
    /// # Errors
    /// [`DequeError::Empty`] if there is nothing to remove.
    pub fn popleft(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(DequeError::Empty);
        }
        let Some(value) = self.slots[self.head].take() else {
            unreachable!("Logic Error: head slot {} vacant with len {}", self.head, self.len)
        };
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        Ok(value)
    }

    /// Resolves a possibly-negative index to a logical offset in `0..len`.
    #[inline]
    fn resolve_index(&self, index: isize) -> Option<usize> {
        let len = self.len as isize;
        let logical = if index < 0 { index + len } else { index };
        (0..len).contains(&logical).then_some(logical as usize)
    }

    /// Returns the element at `index`; `-1` is the tail, `-len` the head.
    ///
    /// # Errors
    /// [`DequeError::IndexOutOfRange`] unless `-len <= index < len`.
    pub fn get(&self, index: isize) -> Result<&T> {
        let logical = self
            .resolve_index(index)
            .ok_or(DequeError::IndexOutOfRange {
                index,
                len: self.len,
            })?;
        Ok(self.occupied(self.wrap_add(self.head, logical)))
    }

    /// Returns the element in a slot known to lie inside `head..head + len`.
    #[inline(always)]
    fn occupied(&self, slot: usize) -> &T {
        match &self.slots[slot] {
            Some(value) => value,
            None => unreachable!("Logic Error: slot {slot} vacant inside len {}", self.len),
        }
    }

    /// Head element, if any.
    pub fn front(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Tail element, if any.
    pub fn back(&self) -> Option<&T> {
        self.get(-1).ok()
    }

    /// Returns a head-to-tail iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            pos: 0,
            end: self.len,
        }
    }
}

// ─── Iteration ────────────────────────────────────────────────────────────────

/// Borrowing iterator returned by [`BoundedDeque::iter`].
pub struct Iter<'a, T> {
    deque: &'a BoundedDeque<T>,
    pos: usize,
    end: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.pos >= self.end {
            return None;
        }
        let deque = self.deque;
        let slot = deque.wrap_add(deque.head, self.pos);
        self.pos += 1;
        Some(deque.occupied(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            pos: self.pos,
            end: self.end,
        }
    }
}

impl<'a, T> IntoIterator for &'a BoundedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator that drains the deque from the head.
pub struct IntoIter<T> {
    deque: BoundedDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.popleft().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for BoundedDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

// ─── Traits ───────────────────────────────────────────────────────────────────

impl<T: fmt::Debug> fmt::Debug for BoundedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `deque([a, b, c], maxlen=N)`.
impl<T: fmt::Debug> fmt::Display for BoundedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("deque([")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, "], maxlen={})", self.maxlen())
    }
}

/// Two deques are equal when they share capacity, policy and logical contents;
/// the physical `head` position is irrelevant.
impl<T: PartialEq> PartialEq for BoundedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.maxlen() == other.maxlen()
            && self.policy == other.policy
            && self.len == other.len
            && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for BoundedDeque<T> {}
