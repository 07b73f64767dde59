use alloc::alloc::{alloc, dealloc, Layout};
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use crate::error::DynArrayError;

/// Owned, uninitialized storage for `cap` elements of `T`.
///
/// `RawSlots` never reads or drops the values placed in it. The owner tracks
/// which prefix of the slots is live and drops it before the slots go away.
pub(crate) struct RawSlots<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawSlots` uniquely owns its allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for RawSlots<T> {}
// SAFETY: shared access only hands out `*const T`.
unsafe impl<T: Sync> Sync for RawSlots<T> {}

impl<T> RawSlots<T> {
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for exactly `cap` elements.
    ///
    /// Zero capacities and zero-sized element types never touch the allocator.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the layout overflows or the
    /// allocator refuses the request.
    pub(crate) fn allocate(cap: usize) -> Result<Self, DynArrayError> {
        if cap == 0 || mem::size_of::<T>() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            });
        }

        let layout = Layout::array::<T>(cap)
            .map_err(|_| DynArrayError::AllocationFailed { requested: cap })?;

        // SAFETY: `layout` has a non-zero size, `cap > 0` and `T` is not zero-sized.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>())
            .ok_or(DynArrayError::AllocationFailed { requested: cap })?;

        Ok(Self {
            ptr,
            cap,
            _marker: PhantomData,
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Smallest capacity of the form `max(1, cap) * factor^k` that holds `required` slots.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the capacity overflows `usize`.
    pub(crate) fn grown_capacity(
        &self,
        required: usize,
        factor: usize,
    ) -> Result<usize, DynArrayError> {
        let mut new_cap = self.cap.max(1);
        while new_cap < required {
            new_cap = new_cap
                .checked_mul(factor)
                .ok_or(DynArrayError::AllocationFailed {
                    requested: required,
                })?;
        }
        Ok(new_cap)
    }

    /// Moves the first `len` values into a fresh allocation of at least `required` slots.
    ///
    /// The new allocation is acquired before anything moves, so on failure
    /// `self` still owns the original slots and values.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the new slots cannot be allocated.
    pub(crate) fn grow(
        &mut self,
        len: usize,
        required: usize,
        factor: usize,
    ) -> Result<(), DynArrayError> {
        debug_assert!(len <= self.cap);
        if required <= self.cap {
            return Ok(());
        }

        let new_cap = self.grown_capacity(required, factor)?;
        let mut replacement = Self::allocate(new_cap)?;

        // SAFETY: the first `len` slots of `self` are live, `replacement` has room
        // for at least `len` values and the two allocations are distinct.
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), replacement.as_mut_ptr(), len);
        }
        mem::swap(self, &mut replacement);

        // `replacement` now owns the old allocation with its values moved out;
        // dropping it only releases memory.
        Ok(())
    }
}

impl<T> Drop for RawSlots<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            // SAFETY: `ptr` was returned by `alloc` with this same layout.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}
