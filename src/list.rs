use crate::raw::{RawBuf, DEFAULT_INITIAL_CAPACITY};
use crate::{AllocError, ListError};
use std::alloc::{self, Layout};
use std::ops::{Index, IndexMut};
use std::{mem, ptr, slice};

/// Growable list of `T` stored in one contiguous heap buffer.
///
/// Elements `[0, len)` are live; the rest of the buffer is uninitialized. The buffer
/// grows geometrically and is never shrunk, so appends cost amortized O(1).
///
/// Every fallible operation either succeeds or leaves the list exactly as it was.
/// Any mutation invalidates references previously obtained from the list, which the
/// borrow checker enforces.
pub struct List<T> {
    buf: RawBuf<T>,
    len: usize,
    initial_capacity: usize,
}

impl<T> List<T> {
    /// Creates an empty list without allocating.
    pub const fn new() -> List<T> {
        List::with_initial_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    pub(crate) const fn with_initial_capacity(initial_capacity: usize) -> List<T> {
        List {
            buf: RawBuf::new(),
            len: 0,
            initial_capacity,
        }
    }

    /// Creates an empty list behind a heap-allocated handle.
    ///
    /// Unlike `Box::new`, running out of memory is reported instead of aborting.
    pub fn new_heap() -> Result<Box<List<T>>, ListError> {
        List::new().into_heap()
    }

    pub(crate) fn into_heap(self) -> Result<Box<List<T>>, ListError> {
        // never zero-sized, it always carries two usize fields
        let layout = Layout::new::<List<T>>();
        unsafe {
            let handle = alloc::alloc(layout) as *mut List<T>;
            if handle.is_null() {
                return Err(AllocError::Allocator { size: layout.size(), align: layout.align() }.into());
            }
            ptr::write(handle, self);
            Ok(Box::from_raw(handle))
        }
    }

    /// Creates a list holding clones of `source`.
    pub fn from_slice(source: &[T]) -> Result<List<T>, ListError> where T: Clone {
        let mut list = List::new();
        list.assign_from_slice(source)?;
        Ok(list)
    }

    /// Replaces the contents of the list with clones of `source`, growing if needed.
    pub fn assign_from_slice(&mut self, source: &[T]) -> Result<(), ListError> where T: Clone {
        self.buf.grow_to(source.len(), self.initial_capacity)?;
        self.clear();
        for (index, item) in source.iter().enumerate() {
            unsafe { ptr::write(self.buf.ptr().add(index), item.clone()) };
            self.len = index + 1;
        }
        Ok(())
    }

    /// Clones the list into a new buffer with the same growth configuration.
    pub fn try_clone(&self) -> Result<List<T>, ListError> where T: Clone {
        let mut list = List::with_initial_capacity(self.initial_capacity);
        list.assign_from_slice(self.as_slice())?;
        Ok(list)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots; zero while the list owns no buffer.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let len = self.len;
        self.as_slice().get(index).ok_or(ListError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Returns the index of the `nth` (zero-based) occurrence of `item`.
    pub fn find(&self, item: &T, nth: usize) -> Result<usize, ListError> where T: PartialEq {
        self.iter()
            .enumerate()
            .filter(|(_, candidate)| *candidate == item)
            .nth(nth)
            .map(|(index, _)| index)
            .ok_or(ListError::NotFound { nth })
    }

    /// True if both lists hold equal elements in the same order.
    pub fn equal(&self, other: &List<T>) -> bool where T: PartialEq {
        self.as_slice() == other.as_slice()
    }

    /// Overwrites the element at `index`, returning the previous one.
    pub fn set(&mut self, item: T, index: usize) -> Result<T, ListError> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, item))
    }

    /// Makes room for at least `additional` more elements using the list's growth policy.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ListError> {
        let required = self.len.checked_add(additional).ok_or(AllocError::CapacityOverflow)?;
        self.buf.grow_to(required, self.initial_capacity)?;
        Ok(())
    }

    /// Inserts `item` at `index`, shifting `[index, len)` one slot up. `index == len` appends.
    pub fn insert(&mut self, item: T, index: usize) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfRange { index, len: self.len });
        }
        self.reserve(1)?;

        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, item);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `(index, len)` one slot down.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange { index, len: self.len });
        }

        let item = unsafe {
            let slot = self.buf.ptr().add(index);
            let item = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            item
        };
        self.len -= 1;
        Ok(item)
    }

    /// Drops the element at `index` and closes the gap. Capacity is kept.
    pub fn erase(&mut self, index: usize) -> Result<(), ListError> {
        self.remove(index).map(mem::drop)
    }

    #[inline]
    pub fn append(&mut self, item: T) -> Result<(), ListError> {
        self.insert(item, self.len)
    }

    #[inline]
    pub fn prepend(&mut self, item: T) -> Result<(), ListError> {
        self.insert(item, 0)
    }

    pub fn pop_back(&mut self) -> Result<T, ListError> {
        match self.len {
            0 => Err(ListError::Empty),
            len => self.remove(len - 1),
        }
    }

    pub fn pop_front(&mut self) -> Result<T, ListError> {
        match self.len {
            0 => Err(ListError::Empty),
            _ => self.remove(0),
        }
    }

    /// Drops every element, keeping the buffer.
    pub fn clear(&mut self) {
        let live = self.as_mut_slice() as *mut [T];
        // length goes first, a panicking element drop must not cause a second drop
        self.len = 0;
        unsafe { ptr::drop_in_place(live) };
    }

    /// Drops the elements and frees the buffer.
    pub fn release(self) {
        mem::drop(self)
    }

    /// Drops the elements, frees the buffer and then the handle itself.
    pub fn release_boxed(self: Box<Self>) {
        mem::drop(self)
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialEq> PartialEq<[T]> for List<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for List<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<T> std::fmt::Debug for List<T> where T: std::fmt::Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
