use core::iter::FusedIterator;
use core::mem;
use core::ptr;
use core::slice;

use crate::core::DynArray;
use crate::raw::RawSlots;

/// Iterator over the elements of a `DynArray`
///
/// This iterator implements `Clone`.
pub struct DynArrayIter<'a, T> {
    items: &'a [T],
    current: usize,
}

impl<'a, T> DynArrayIter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items, current: 0 }
    }
}

impl<T> Clone for DynArrayIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for DynArrayIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.current)?;
        self.current += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for DynArrayIter<'_, T> {}

impl<T> FusedIterator for DynArrayIter<'_, T> {}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = DynArrayIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reverse iterator over the elements of a `DynArray`
///
/// This iterator implements `Clone`.
pub struct DynArrayRevIter<'a, T> {
    items: &'a [T],
    current: usize,
}

impl<'a, T> DynArrayRevIter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            items,
            current: items.len(),
        }
    }
}

impl<T> Clone for DynArrayRevIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for DynArrayRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        self.items.get(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.current, Some(self.current))
    }
}

impl<T> ExactSizeIterator for DynArrayRevIter<'_, T> {}

impl<T> FusedIterator for DynArrayRevIter<'_, T> {}

/// Mutable iterator over the elements of a `DynArray`
pub struct DynArrayIterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> DynArrayIterMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T]) -> Self {
        Self {
            inner: items.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for DynArrayIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for DynArrayIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for DynArrayIterMut<'_, T> {}

impl<T> FusedIterator for DynArrayIterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = DynArrayIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Owning iterator over the elements of a `DynArray`
///
/// Elements not yielded are dropped together with the iterator.
pub struct DynArrayIntoIter<T> {
    slots: RawSlots<T>,
    front: usize,
    back: usize,
}

impl<T> Iterator for DynArrayIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: slots `[front, back)` are live and `front` leaves that range here.
        let item = unsafe { ptr::read(self.slots.as_ptr().add(self.front)) };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for DynArrayIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: slot `back` was live and has just left the live range.
        Some(unsafe { ptr::read(self.slots.as_ptr().add(self.back)) })
    }
}

impl<T> ExactSizeIterator for DynArrayIntoIter<T> {}

impl<T> FusedIterator for DynArrayIntoIter<T> {}

impl<T> Drop for DynArrayIntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;
        let front = mem::replace(&mut self.front, self.back);
        // SAFETY: `[front, front + remaining)` holds the values never yielded.
        unsafe {
            let rest = ptr::slice_from_raw_parts_mut(self.slots.as_mut_ptr().add(front), remaining);
            ptr::drop_in_place(rest);
        }
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = DynArrayIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (slots, len) = self.into_raw_parts();
        DynArrayIntoIter {
            slots,
            front: 0,
            back: len,
        }
    }
}
