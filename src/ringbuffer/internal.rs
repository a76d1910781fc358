use alloc::alloc::Layout;
use std::mem::{self, MaybeUninit};
use std::ptr;
use std::slice;

use super::RingBuffer;
use crate::allocator::Allocator;
use crate::utils::*;

impl<T, A: Allocator> RingBuffer<T, A> {
    #[inline]
    pub(crate) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.cap)
    }

    #[inline]
    pub(crate) fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.cap)
    }

    /// Physical slot of the logical `index`.
    #[inline]
    pub(crate) fn slot(&self, index: usize) -> usize {
        self.wrap_add(self.tail, index)
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn ptr_mut(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn is_contiguous(&self) -> bool {
        self.tail + self.len <= self.cap
    }

    #[inline]
    pub(crate) fn layout_for(capacity: usize) -> Option<Layout> {
        Layout::array::<T>(capacity).ok()
    }

    /// Layout of the storage region; only valid once construction succeeded.
    #[inline]
    pub(crate) fn layout(&self) -> Layout {
        unsafe { Layout::from_size_align_unchecked(mem::size_of::<T>() * self.cap, mem::align_of::<T>()) }
    }

    #[inline]
    pub(crate) fn buffer_as_slice(&self) -> &[MaybeUninit<T>] {
        unsafe { slice::from_raw_parts(self.ptr() as *const MaybeUninit<T>, self.cap) }
    }

    #[inline]
    pub(crate) fn buffer_as_mut_slice(&mut self) -> &mut [MaybeUninit<T>] {
        unsafe { slice::from_raw_parts_mut(self.ptr_mut() as *mut MaybeUninit<T>, self.cap) }
    }

    #[inline]
    pub(crate) unsafe fn buffer_read(&mut self, offset: usize) -> T {
        debug_assert!(offset < self.cap);
        ptr::read(self.ptr().add(offset))
    }

    #[inline]
    pub(crate) unsafe fn buffer_replace(&mut self, offset: usize, element: T) -> T {
        debug_assert!(offset < self.cap);
        ptr::replace(self.ptr_mut().add(offset), element)
    }

    #[inline]
    pub(crate) unsafe fn buffer_write(&mut self, offset: usize, element: T) {
        debug_assert!(offset < self.cap);
        ptr::write(self.ptr_mut().add(offset), element);
    }

    #[inline]
    pub(crate) unsafe fn buffer_drop(&mut self, offset: usize) {
        debug_assert!(offset < self.cap);
        ptr::drop_in_place(self.ptr_mut().add(offset));
    }
}
