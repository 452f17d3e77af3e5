use crate::AllocError;
use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// Capacity of the first buffer a list allocates, unless configured otherwise.
pub const DEFAULT_INITIAL_CAPACITY: usize = 20;

/// Computes the capacity a buffer of `capacity` slots must grow to so that `required`
/// elements fit. The first growth starts from `initial`, every following one doubles.
pub(crate) fn grown_capacity(capacity: usize, initial: usize, required: usize) -> Result<usize, AllocError> {
    let mut new_capacity = if capacity == 0 { initial.max(1) } else { capacity };
    while new_capacity < required {
        new_capacity = new_capacity.checked_mul(2).ok_or(AllocError::CapacityOverflow)?;
    }
    Ok(new_capacity)
}

/// Exclusively owned heap storage for up to `capacity` values of `T`.
///
/// `RawBuf` only tracks memory; it never reads, writes or drops elements. No memory
/// is held while the capacity is zero, and none is ever requested for zero-sized `T`.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawBuf<T> {}

unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    pub const fn new() -> RawBuf<T> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    fn is_zero_sized() -> bool {
        mem::size_of::<T>() == 0
    }

    /// Makes room for at least `required` elements, keeping the first `capacity` slots intact.
    ///
    /// On failure the buffer, its contents and its capacity are untouched.
    pub fn grow_to(&mut self, required: usize, initial: usize) -> Result<(), AllocError> {
        if required <= self.cap {
            return Ok(());
        }

        let new_cap = grown_capacity(self.cap, initial, required)?;
        if Self::is_zero_sized() {
            self.cap = new_cap;
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap).map_err(|_| AllocError::CapacityOverflow)?;
        let new_ptr = unsafe {
            if self.cap == 0 {
                alloc::alloc(new_layout)
            } else {
                // the current layout was valid when it was allocated
                let old_layout = Layout::array::<T>(self.cap).map_err(|_| AllocError::CapacityOverflow)?;
                alloc::realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size())
            }
        };

        match NonNull::new(new_ptr as *mut T) {
            None => {
                debug!("growth to {} slots of {} failed", new_cap, std::any::type_name::<T>());
                Err(AllocError::Allocator { size: new_layout.size(), align: new_layout.align() })
            },
            Some(ptr) => {
                trace!("grow {} buffer {} -> {}", std::any::type_name::<T>(), self.cap, new_cap);
                self.ptr = ptr;
                self.cap = new_cap;
                Ok(())
            },
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || Self::is_zero_sized() {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            trace!("release {} buffer of {} slots", std::any::type_name::<T>(), self.cap);
            unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
    }
}
