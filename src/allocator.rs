//! Storage providers for `RingBuffer`.

use alloc::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;

/// Trait for the strategy that hands out the buffer's storage region.
///
/// A `RingBuffer` asks for exactly one block at construction and gives it
/// back exactly once when dropped. There is no way to grow or shrink a block.
///
/// # Safety
///
/// A block returned by `allocate` must be valid for reads and writes of
/// `layout.size()` bytes, aligned to `layout.align()`, and must stay valid
/// until it is passed to `deallocate` with the same layout.
pub unsafe trait Allocator {
    /// Allocates a block described by `layout`, or returns `None` if the
    /// request cannot be satisfied.
    ///
    /// `layout.size()` is never zero when called by `RingBuffer`.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Releases a block previously returned by `allocate`.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate` on this allocator (or a clone of it)
    /// and `layout` must be the layout it was allocated with.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global memory allocator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Global;

unsafe impl Allocator for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(layout.size() != 0);
        NonNull::new(unsafe { alloc(layout) })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        dealloc(ptr.as_ptr(), layout)
    }
}

unsafe impl<'a, A: Allocator + ?Sized> Allocator for &'a A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).deallocate(ptr, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_round_trip() {
        let layout = Layout::array::<u64>(16).unwrap();
        let ptr = Global.allocate(layout).expect("allocation failed");
        assert_eq!(ptr.as_ptr() as usize % layout.align(), 0);
        unsafe {
            let slots = ptr.as_ptr() as *mut u64;
            for i in 0..16 {
                slots.add(i).write(i as u64);
            }
            assert_eq!(slots.add(15).read(), 15);
            Global.deallocate(ptr, layout);
        }
    }

    #[test]
    fn by_reference() {
        let global = Global;
        let by_ref = &global;
        let layout = Layout::new::<u32>();
        let ptr = by_ref.allocate(layout).unwrap();
        unsafe { by_ref.deallocate(ptr, layout) }
    }
}
