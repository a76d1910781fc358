use alloc::alloc::handle_alloc_error;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::ops::IndexMut;

use super::*;

/// Deep copy into a separate storage region of the same capacity.
///
/// Allocation failure aborts through `handle_alloc_error`; use
/// `RingBuffer::try_clone` to handle it.
impl<T: Clone, A: Allocator + Clone> Clone for RingBuffer<T, A> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(_) => handle_alloc_error(self.layout()),
        }
    }
}

impl<T, A: Allocator> Drop for RingBuffer<T, A> {
    fn drop(&mut self) {
        /// Releases the storage region even if an element destructor panics.
        struct Release<'a, T: 'a, A: Allocator + 'a>(&'a mut RingBuffer<T, A>);

        impl<'a, T, A: Allocator> Drop for Release<'a, T, A> {
            fn drop(&mut self) {
                let buf = &mut *self.0;
                let layout = buf.layout();
                unsafe { buf.alloc.deallocate(buf.ptr.cast(), layout) }
                trace!("released {} slots ({} bytes) at {:p}",
                       buf.cap,
                       layout.size(),
                       buf.ptr.as_ptr());
            }
        }

        let mut guard = Release(self);
        guard.0.clear();
    }
}

impl<T, A, B> PartialEq<RingBuffer<T, B>> for RingBuffer<T, A>
    where T: PartialEq,
          A: Allocator,
          B: Allocator
{
    fn eq(&self, other: &RingBuffer<T, B>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        if sa.len() == oa.len() {
            sa == oa && sb == ob
        } else if sa.len() < oa.len() {
            // Always divisible in three sections, for example:
            // self:  [a b c|d e f]
            // other: [0 1 2 3|4 5]
            // front = 3, mid = 1,
            // [a b c] == [0 1 2] && [d] == [3] && [e f] == [4 5]
            let front = sa.len();
            let mid = oa.len() - front;

            let (oa_front, oa_mid) = oa.split_at(front);
            let (sb_mid, sb_back) = sb.split_at(mid);
            debug_assert_eq!(sa.len(), oa_front.len());
            debug_assert_eq!(sb_mid.len(), oa_mid.len());
            debug_assert_eq!(sb_back.len(), ob.len());
            sa == oa_front && sb_mid == oa_mid && sb_back == ob
        } else {
            let front = oa.len();
            let mid = sa.len() - front;

            let (sa_front, sa_mid) = sa.split_at(front);
            let (ob_mid, ob_back) = ob.split_at(mid);
            debug_assert_eq!(sa_front.len(), oa.len());
            debug_assert_eq!(sa_mid.len(), ob_mid.len());
            debug_assert_eq!(sb.len(), ob_back.len());
            sa_front == oa && sa_mid == ob_mid && sb == ob_back
        }
    }
}

#[cfg(test)]
impl<'a, T: PartialEq, A: Allocator> PartialEq<&'a [T]> for RingBuffer<T, A> {
    fn eq(&self, other: &&'a [T]) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}

#[cfg(test)]
impl<T: PartialEq, A: Allocator> PartialEq<Vec<T>> for RingBuffer<T, A> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == &other[..]
    }
}

impl<T: Eq, A: Allocator> Eq for RingBuffer<T, A> {}

impl<T: PartialOrd, A: Allocator> PartialOrd for RingBuffer<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, A: Allocator> Ord for RingBuffer<T, A> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, A: Allocator> Hash for RingBuffer<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        // One element at a time: the split point of `as_slices` depends on
        // the physical layout, which equality ignores.
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T, A: Allocator> Index<usize> for RingBuffer<T, A> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, A: Allocator> IndexMut<usize> for RingBuffer<T, A> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, A: Allocator> IntoIterator for RingBuffer<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a RingBuffer<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut RingBuffer<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Extend the back of the `RingBuffer` with an iterator.
///
/// Once the buffer is full every further element evicts the current front.
impl<T, A: Allocator> Extend<T> for RingBuffer<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_back(iter);
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for RingBuffer<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend_back(iter.into_iter().cloned());
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for RingBuffer<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
