use core::cmp::Ordering;
use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;

use crate::error::DynArrayError;
use crate::iter::{DynArrayIter, DynArrayIterMut, DynArrayRevIter};
use crate::raw::RawSlots;

/// Capacity used by [`DynArray::with_default_capacity`].
pub const DEFAULT_CAPACITY: usize = 20;

/// Multiplier applied to the capacity whenever a `DynArray` runs out of slots.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// A growable array that exclusively owns a contiguous buffer of `T`.
///
/// Only the first [`len`](DynArray::len) slots hold live values. The remaining
/// slots up to [`capacity`](DynArray::capacity) are uninitialized and are never
/// exposed through slices, iterators or indexing.
pub struct DynArray<T> {
    slots: RawSlots<T>,
    len: usize,
    growth_factor: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty `DynArray` with no capacity. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: RawSlots::empty(),
            len: 0,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Creates an empty `DynArray` with room for `capacity` elements.
    ///
    /// A capacity of 0 is allowed; the first push then grows the buffer.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, DynArrayError> {
        Self::with_growth_factor(capacity, DEFAULT_GROWTH_FACTOR)
    }

    /// Creates an empty `DynArray` with the default capacity (20).
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot be allocated.
    pub fn with_default_capacity() -> Result<Self, DynArrayError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `DynArray` with a custom growth factor.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::InvalidConfiguration` if `growth_factor` is less than 2.
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot be allocated.
    pub fn with_growth_factor(
        capacity: usize,
        growth_factor: usize,
    ) -> Result<Self, DynArrayError> {
        if growth_factor < 2 {
            return Err(DynArrayError::InvalidConfiguration {
                parameter: "growth_factor",
                value: growth_factor,
            });
        }

        Ok(Self {
            slots: RawSlots::allocate(capacity)?,
            len: 0,
            growth_factor,
        })
    }

    /// Builds an array by pushing every item of `iter` in order onto a
    /// default-capacity array.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if growing the buffer fails.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, DynArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::with_default_capacity()?;
        for item in iter {
            array.push(item)?;
        }
        Ok(array)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[must_use]
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    fn check_bounds(&self, index: usize) -> Result<(), DynArrayError> {
        if index >= self.len {
            Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        } else {
            Ok(())
        }
    }

    fn ensure_capacity(&mut self, additional: usize) -> Result<(), DynArrayError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(DynArrayError::AllocationFailed {
                requested: usize::MAX,
            })?;

        if required > self.slots.capacity() {
            self.slots.grow(self.len, required, self.growth_factor)?;
        }
        Ok(())
    }

    /// Makes room for at least `additional` more elements using the growth policy.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot grow.
    /// The array is left unchanged in that case.
    pub fn reserve(&mut self, additional: usize) -> Result<(), DynArrayError> {
        self.ensure_capacity(additional)
    }

    /// Appends a value to the end of the array.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer is full and cannot grow.
    /// The array is left unchanged in that case.
    pub fn push(&mut self, value: T) -> Result<(), DynArrayError> {
        self.ensure_capacity(1)?;

        // SAFETY: `ensure_capacity` guarantees slot `len` exists and it is not live.
        unsafe {
            ptr::write(self.slots.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;

        Ok(())
    }

    /// Inserts a value at `index`, shifting everything after it one slot right.
    ///
    /// An `index` at or past the end appends instead.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer is full and cannot grow.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DynArrayError> {
        if index >= self.len {
            return self.push(value);
        }

        self.ensure_capacity(1)?;

        // SAFETY: `index < len < capacity`, so both the source range `[index, len)`
        // and the destination range `[index + 1, len + 1)` are inside the buffer.
        // The duplicated value at `index` is overwritten without being dropped.
        unsafe {
            let slot = self.slots.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, value);
        }
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting everything after it one slot left.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, DynArrayError> {
        self.check_bounds(index)?;

        // SAFETY: `index < len`, so the slot is live. After the read the slot is
        // treated as vacant and immediately overwritten by the shifted tail.
        let removed = unsafe {
            let slot = self.slots.as_mut_ptr().add(index);
            let removed = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            removed
        };
        self.len -= 1;

        Ok(removed)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::EmptyArray` if the array is empty.
    pub fn try_pop(&mut self) -> Result<T, DynArrayError> {
        self.pop().ok_or(DynArrayError::EmptyArray)
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the array is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: slot `len` was live before the decrement and is now outside the live prefix.
        Some(unsafe { ptr::read(self.slots.as_ptr().add(self.len)) })
    }

    /// Drops every element from `len` onward. Capacity is kept.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let tail_len = self.len - len;
        // The length shrinks first so a panicking destructor cannot cause a double drop.
        self.len = len;
        // SAFETY: `[len, len + tail_len)` was the live tail and is no longer reachable.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.slots.as_mut_ptr().add(len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Gets a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, DynArrayError> {
        self.check_bounds(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DynArrayError> {
        self.check_bounds(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, DynArrayError> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are live and the pointer is non-null and aligned.
        unsafe { slice::from_raw_parts(self.slots.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr(), self.len) }
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> DynArrayIter<'_, T> {
        DynArrayIter::new(self.as_slice())
    }

    /// Returns an iterator that allows modifying each element.
    #[must_use]
    pub fn iter_mut(&mut self) -> DynArrayIterMut<'_, T> {
        DynArrayIterMut::new(self.as_mut_slice())
    }

    /// Returns an iterator over the elements, last to first.
    #[must_use]
    pub fn iter_rev(&self) -> DynArrayRevIter<'_, T> {
        DynArrayRevIter::new(self.as_slice())
    }

    /// Moves the contents out, leaving `self` empty with no capacity.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Sorts the elements in place from largest to smallest.
    ///
    /// The sort is stable: elements that compare equal (including incomparable
    /// pairs such as `NaN`) keep their relative order.
    ///
    /// Element types without an ordering are rejected at compile time:
    ///
    /// ```compile_fail
    /// # use dynarray::DynArray;
    /// struct Opaque;
    /// let mut array = DynArray::new();
    /// array.push(Opaque).unwrap();
    /// array.sort_descending();
    /// ```
    pub fn sort_descending(&mut self) -> &mut Self
    where
        T: PartialOrd,
    {
        self.as_mut_slice()
            .sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        self
    }

    /// Copies the elements into a new array sized to fit them.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the new buffer cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, DynArrayError>
    where
        T: Clone,
    {
        let mut copy = Self {
            slots: RawSlots::allocate(self.len)?,
            len: 0,
            growth_factor: self.growth_factor,
        };
        copy.clone_tail_from(self);
        Ok(copy)
    }

    /// Replaces the contents with copies of `other`'s elements.
    ///
    /// The buffer is reallocated only when `other` holds more elements than the
    /// current capacity; capacity never shrinks.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if a larger buffer is needed and
    /// cannot be allocated. The array is left unchanged in that case.
    pub fn assign(&mut self, other: &Self) -> Result<(), DynArrayError>
    where
        T: Clone,
    {
        if other.len > self.slots.capacity() {
            let replacement = RawSlots::allocate(other.len)?;
            self.clear();
            self.slots = replacement;
        } else {
            self.clear();
        }

        self.growth_factor = other.growth_factor;
        self.clone_tail_from(other);
        Ok(())
    }

    // Caller guarantees `self.len + other.len <= capacity`.
    fn clone_tail_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        debug_assert!(self.len + other.len <= self.slots.capacity());
        for item in other.as_slice() {
            // SAFETY: the caller reserved room for every element of `other`; the
            // length grows after each write so a panicking `clone` leaks nothing.
            unsafe {
                ptr::write(self.slots.as_mut_ptr().add(self.len), item.clone());
            }
            self.len += 1;
        }
    }

    /// Writes each element as `Index: i = value`, the way a debugger dump reads.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the writer.
    pub fn write_indexed<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        T: fmt::Display,
    {
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                out.write_char('\n')?;
            }
            write!(out, "Index: {index} = {item}")?;
        }
        Ok(())
    }

    /// Writes the elements separated by single spaces.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the writer.
    pub fn write_spaced<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        T: fmt::Display,
    {
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{item}")?;
        }
        Ok(())
    }

    pub(crate) fn into_raw_parts(mut self) -> (RawSlots<T>, usize) {
        let len = mem::replace(&mut self.len, 0);
        let slots = mem::replace(&mut self.slots, RawSlots::empty());
        (slots, len)
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: the live prefix is dropped exactly once; `RawSlots` then frees the memory.
        unsafe {
            ptr::drop_in_place(self.as_mut_slice());
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    #[allow(clippy::expect_used)]
    fn clone(&self) -> Self {
        self.try_clone()
            .expect("DynArray: allocation failed while cloning")
    }

    #[allow(clippy::expect_used)]
    fn clone_from(&mut self, source: &Self) {
        self.assign(source)
            .expect("DynArray: allocation failed while assigning");
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("}")
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < self.len,
            "Index {} out of bounds for array of length {}",
            index,
            self.len
        );
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(
            index < self.len,
            "Index {} out of bounds for array of length {}",
            index,
            self.len
        );
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    #[allow(clippy::expect_used)]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::try_from_iter(iter).expect("DynArray: allocation failed while collecting")
    }
}

impl<T> Extend<T> for DynArray<T> {
    #[allow(clippy::expect_used)]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item)
                .expect("DynArray: allocation failed while extending");
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}
