use std::any;
use std::marker::PhantomData;
use std::mem;
use std::ptr;
use std::ptr::NonNull;
use std::slice;

use odds::IndexRange;

use crate::allocator::{Allocator, Global};
use crate::cursor::{Cursor, CursorMut};
use crate::error::{CreateError, IndexError};

mod internal;
mod iterator_impls;
mod trait_impls;

/// A fixed capacity, double-ended ring buffer.
///
/// The storage region is allocated once, when the buffer is created, and is
/// never resized. Pushing onto a full buffer overwrites the element at the
/// opposite end: `push_back` evicts the front, `push_front` evicts the back.
///
/// The "default" usage of this type as a queue is to use `push_back` to add
/// to the queue, and `pop_front` to remove from the queue. `extend` pushes
/// onto the back in this manner, and iterating over `RingBuffer` goes front
/// to back.
pub struct RingBuffer<T, A: Allocator = Global> {
    ptr: NonNull<T>,
    cap: usize,
    // physical slot of the front element
    tail: usize,
    len: usize,
    alloc: A,
    marker: PhantomData<T>,
}

unsafe impl<T: Send, A: Allocator + Send> Send for RingBuffer<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RingBuffer<T, A> {}

/// `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: &'a [mem::MaybeUninit<T>],
    tail: usize,
    len: usize,
}

/// `RingBuffer` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    ring: &'a mut [mem::MaybeUninit<T>],
    tail: usize,
    len: usize,
}

/// A by-value `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T, A: Allocator = Global> {
    inner: RingBuffer<T, A>,
}

impl<T> RingBuffer<T> {
    /// Creates an empty `RingBuffer` holding at most `capacity` elements,
    /// backed by the global allocator.
    ///
    /// No element is constructed; the slots stay uninitialized until they
    /// are pushed into.
    ///
    /// # Errors
    ///
    /// Fails if `capacity` is zero, if it is not below `usize::MAX / 2`, if
    /// `T` is a zero-sized type, or if the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::{CreateError, RingBuffer};
    ///
    /// let buf: RingBuffer<u32> = RingBuffer::new(3).unwrap();
    /// assert_eq!(buf.capacity(), 3);
    /// assert_eq!(buf.len(), 0);
    ///
    /// assert_eq!(RingBuffer::<u32>::new(0).unwrap_err(), CreateError::ZeroCapacity);
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Result<Self, CreateError> {
        RingBuffer::new_in(capacity, Global)
    }
}

impl<T, A: Allocator> RingBuffer<T, A> {
    /// Creates an empty `RingBuffer` holding at most `capacity` elements,
    /// with its storage obtained from `alloc`.
    ///
    /// # Errors
    ///
    /// Same as [`RingBuffer::new`]; `AllocationFailed` is returned when
    /// `alloc` cannot provide the region.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::{Global, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new_in(2, Global).unwrap();
    /// buf.push_back('a');
    /// assert_eq!(buf.front(), Ok(&'a'));
    /// ```
    pub fn new_in(capacity: usize, alloc: A) -> Result<Self, CreateError> {
        if capacity == 0 {
            return Err(Self::rejected(CreateError::ZeroCapacity));
        }
        // Relative slot arithmetic adds two values below the capacity.
        if capacity >= usize::MAX / 2 {
            return Err(Self::rejected(CreateError::CapacityTooLarge { capacity: capacity }));
        }
        if mem::size_of::<T>() == 0 {
            return Err(Self::rejected(CreateError::ZeroSizedElement));
        }
        let layout = match Self::layout_for(capacity) {
            Some(layout) => layout,
            None => return Err(Self::rejected(CreateError::CapacityTooLarge { capacity: capacity })),
        };
        let ptr = match alloc.allocate(layout) {
            Some(ptr) => ptr,
            None => return Err(Self::rejected(CreateError::AllocationFailed { capacity: capacity })),
        };
        trace!("allocated {} slots ({} bytes) at {:p}",
               capacity,
               layout.size(),
               ptr.as_ptr());

        Ok(RingBuffer {
            ptr: ptr.cast(),
            cap: capacity,
            tail: 0,
            len: 0,
            alloc: alloc,
            marker: PhantomData,
        })
    }

    /// Returns a reference to the underlying allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns a copy of the buffer with its own storage region, or an
    /// error if the allocator cannot provide one.
    ///
    /// Elements are cloned front to back. The copy always starts at the base
    /// of its storage, whatever the physical layout of `self` is.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// buf.extend(0..5);
    /// let copy = buf.try_clone().unwrap();
    /// assert_eq!(copy, buf);
    /// ```
    pub fn try_clone(&self) -> Result<Self, CreateError>
        where T: Clone,
              A: Clone
    {
        let mut copy = RingBuffer::new_in(self.cap, self.alloc.clone())?;
        for element in self.iter() {
            copy.push_back(element.clone());
        }
        Ok(copy)
    }

    /// Retrieves an element in the `RingBuffer` by index.
    ///
    /// Element at index 0 is the front of the buffer.
    ///
    /// # Errors
    ///
    /// Returns an `IndexError` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// assert_eq!(buf.at(1), Ok(&4));
    /// assert!(buf.at(2).is_err());
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, IndexError> {
        self.check_index(index)?;
        let idx = self.slot(index);
        unsafe { Ok(&*self.ptr().add(idx)) }
    }

    /// Retrieves an element in the `RingBuffer` mutably by index.
    ///
    /// # Errors
    ///
    /// Returns an `IndexError` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// buf.push_back(3);
    /// *buf.at_mut(0).unwrap() = 7;
    /// assert_eq!(buf[0], 7);
    /// ```
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        self.check_index(index)?;
        let idx = self.slot(index);
        unsafe { Ok(&mut *self.ptr_mut().add(idx)) }
    }

    /// Retrieves an element by index, or `None` if it is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// buf.push_back(5);
    /// assert_eq!(buf.get(1), Some(&4));
    /// assert_eq!(buf.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.at(index).ok()
    }

    /// Retrieves an element mutably by index, or `None` if it is out of
    /// bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.at_mut(index).ok()
    }

    /// Provides a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns an `IndexError` for index 0 if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// assert!(buf.front().is_err());
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(buf.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, IndexError> {
        self.at(0)
    }

    /// Provides a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, IndexError> {
        self.at_mut(0)
    }

    /// Provides a reference to the back element.
    ///
    /// # Errors
    ///
    /// An empty buffer is checked at index 0, so the error is the same one
    /// `front()` reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// assert_eq!(buf.back().unwrap_err().index, 0);
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(buf.back(), Ok(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, IndexError> {
        self.at(self.len.saturating_sub(1))
    }

    /// Provides a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, IndexError> {
        let index = self.len.saturating_sub(1);
        self.at_mut(index)
    }

    /// Swaps elements at indices `i` and `j`.
    ///
    /// `i` and `j` may be equal.
    ///
    /// # Panics
    ///
    /// Panics if there is no element with either index.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// buf.extend(vec![3, 4, 5]);
    /// buf.swap(0, 2);
    /// assert_eq!(buf[0], 5);
    /// assert_eq!(buf[2], 3);
    /// ```
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        assert!(i < self.len());
        assert!(j < self.len());
        let ri = self.slot(i);
        let rj = self.slot(j);
        unsafe { ptr::swap(self.ptr_mut().add(ri), self.ptr_mut().add(rj)) }
    }

    /// Returns the number of elements the buffer holds before it starts
    /// overwriting.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let buf: RingBuffer<u8> = RingBuffer::new(10).unwrap();
    /// assert_eq!(buf.capacity(), 10);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the number of elements in the `RingBuffer`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the buffer is full; the next push will evict.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(1).unwrap();
    /// assert!(!buf.is_full());
    /// buf.push_back(1);
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.cap
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// buf.push_back(5);
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// let c: Vec<&i32> = buf.iter().collect();
    /// assert_eq!(c, [&5, &3, &4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            ring: self.buffer_as_slice(),
            tail: self.tail,
            len: self.len,
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// buf.extend(vec![5, 3, 4]);
    /// for num in buf.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// assert_eq!(buf.iter().cloned().collect::<Vec<_>>(), [3, 1, 2]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let tail = self.tail;
        let len = self.len;
        IterMut {
            ring: self.buffer_as_mut_slice(),
            tail: tail,
            len: len,
        }
    }

    /// Returns a front-to-back iterator over the logical sub-range `range`.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if the
    /// end point is greater than the length of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// buf.extend(0..6);
    /// assert_eq!(buf.range(1..3).cloned().collect::<Vec<_>>(), [3, 4]);
    /// assert_eq!(buf.range(..).count(), 4);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<T>
        where R: IndexRange
    {
        let len = self.len();
        let start = IndexRange::start(&range).unwrap_or(0);
        let end = IndexRange::end(&range).unwrap_or(len);
        assert!(start <= end, "range start {} is after end {}", start, end);
        assert!(end <= len, "range end {} is out of bounds for len {}", end, len);

        Iter {
            ring: self.buffer_as_slice(),
            tail: self.slot(start),
            len: end - start,
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// buf.push_back(0);
    /// buf.push_back(1);
    /// buf.push_front(10);
    /// buf.push_front(9);
    ///
    /// assert_eq!(buf.as_slices(), (&[9, 10][..], &[0, 1][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (front, back) = self.slice_bounds();
        unsafe {
            let ptr = self.ptr();
            (slice::from_raw_parts(ptr.add(self.tail), front),
             slice::from_raw_parts(ptr, back))
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `RingBuffer`, mutably.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (front, back) = self.slice_bounds();
        unsafe {
            let ptr = self.ptr_mut();
            (slice::from_raw_parts_mut(ptr.add(self.tail), front),
             slice::from_raw_parts_mut(ptr, back))
        }
    }

    /// Returns `true` if the `RingBuffer` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// buf.push_back(0);
    /// buf.push_back(1);
    ///
    /// assert_eq!(buf.contains(&1), true);
    /// assert_eq!(buf.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq<T>
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Appends an element to the back of the buffer.
    ///
    /// Returns `None` if the buffer still had room, or `Some(evicted)` if it
    /// was full, where `evicted` is the former front element. Dropping the
    /// returned value destroys it.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [1, _, _] -> None
    /// [1, _, _] <-(+)- 2 => [1, 2, _] -> None
    /// [1, 2, _] <-(+)- 3 => [1, 2, 3] -> None
    /// [1, 2, 3] <-(+)- 4 => [2, 3, 4] -> Some(1)
    /// ```
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(2).unwrap();
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// let evicted = buf.push_back(3);
    ///
    /// assert_eq!(buf.back(), Ok(&3));
    /// assert_eq!(evicted, Some(1));
    /// ```
    pub fn push_back(&mut self, element: T) -> Option<T> {
        if self.is_full() {
            // The slot after the back is the front slot.
            let tail = self.tail;
            let evicted = unsafe { self.buffer_replace(tail, element) };
            self.tail = self.wrap_add(tail, 1);
            Some(evicted)
        } else {
            let head = self.slot(self.len);
            unsafe { self.buffer_write(head, element) };
            self.len += 1;
            None
        }
    }

    /// Appends the value produced by `f` to the back of the buffer.
    ///
    /// `f` runs before anything is evicted, so a panic inside it leaves the
    /// buffer unchanged. Returns the evicted element like `push_back`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(2).unwrap();
    /// buf.emplace_back(|| String::from("a"));
    /// assert_eq!(buf.back().map(|s| s.as_str()), Ok("a"));
    /// ```
    #[inline]
    pub fn emplace_back<F>(&mut self, f: F) -> Option<T>
        where F: FnOnce() -> T
    {
        let element = f();
        self.push_back(element)
    }

    /// Prepends an element to the front of the buffer.
    ///
    /// Returns `None` if the buffer still had room, or `Some(evicted)` if it
    /// was full, where `evicted` is the former back element.
    ///
    /// # Examples
    ///
    /// ```text
    /// 1 -(+)-> [_, _, _] => [1, _, _] -> None
    /// 2 -(+)-> [1, _, _] => [2, 1, _] -> None
    /// 3 -(+)-> [2, 1, _] => [3, 2, 1] -> None
    /// 4 -(+)-> [3, 2, 1] => [4, 3, 2] -> Some(1)
    /// ```
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(2).unwrap();
    /// buf.push_front(1);
    /// buf.push_front(2);
    /// let evicted = buf.push_front(3);
    ///
    /// assert_eq!(buf.front(), Ok(&3));
    /// assert_eq!(evicted, Some(1));
    /// ```
    pub fn push_front(&mut self, element: T) -> Option<T> {
        if self.is_full() {
            // The slot before the front is the back slot.
            let back = self.wrap_sub(self.tail, 1);
            let evicted = unsafe { self.buffer_replace(back, element) };
            self.tail = back;
            Some(evicted)
        } else {
            if !self.is_empty() {
                self.tail = self.wrap_sub(self.tail, 1);
            }
            let tail = self.tail;
            unsafe { self.buffer_write(tail, element) };
            self.len += 1;
            None
        }
    }

    /// Prepends the value produced by `f` to the front of the buffer.
    ///
    /// `f` runs before anything is evicted. Returns the evicted element like
    /// `push_front`.
    #[inline]
    pub fn emplace_front<F>(&mut self, f: F) -> Option<T>
        where F: FnOnce() -> T
    {
        let element = f();
        self.push_front(element)
    }

    /// Removes the first element and returns it, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// buf.push_back(1);
    /// buf.push_back(2);
    ///
    /// assert_eq!(buf.pop_front(), Some(1));
    /// assert_eq!(buf.pop_front(), Some(2));
    /// assert_eq!(buf.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let tail = self.tail;
        self.tail = self.wrap_add(tail, 1);
        self.len -= 1;
        unsafe { Some(self.buffer_read(tail)) }
    }

    /// Removes the last element and returns it, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// assert_eq!(buf.pop_back(), None);
    /// buf.push_back(1);
    /// buf.push_back(3);
    /// assert_eq!(buf.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        let head = self.slot(self.len);
        unsafe { Some(self.buffer_read(head)) }
    }

    /// Clears the buffer, dropping all values front to back.
    ///
    /// Both cursors return to the base of the storage region, so pushes
    /// after a `clear` lay elements out exactly as in a new buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// buf.push_back(1);
    /// buf.clear();
    /// assert!(buf.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        let tail = mem::replace(&mut self.tail, 0);
        // len is already zero: a panicking destructor leaks the rest instead
        // of dropping anything twice.
        if mem::needs_drop::<T>() {
            for i in 0..len {
                let idx = self.wrap_add(tail, i);
                unsafe { self.buffer_drop(idx) };
            }
        }
    }

    /// Extends the back of the buffer, evicting from the front once full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// buf.extend_back(vec![1, 2, 3, 4]);
    /// assert_eq!(buf.iter().cloned().collect::<Vec<_>>(), [2, 3, 4]);
    /// ```
    pub fn extend_back<I>(&mut self, iter: I)
        where I: IntoIterator<Item = T>
    {
        for element in iter {
            self.push_back(element);
        }
    }

    /// Extends the front of the buffer, evicting from the back once full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// buf.extend_front(vec![1, 2, 3, 4]);
    /// assert_eq!(buf.iter().cloned().collect::<Vec<_>>(), [4, 3, 2]);
    /// ```
    pub fn extend_front<I>(&mut self, iter: I)
        where I: IntoIterator<Item = T>
    {
        for element in iter {
            self.push_front(element);
        }
    }

    /// Returns an immutable cursor at the front (logical index 0).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(10).unwrap();
    /// buf.push_back(1);
    ///
    /// assert_eq!(buf.cbegin().get(), Ok(&1));
    /// assert!(buf.cend().get().is_err());
    /// assert_eq!(buf.cbegin().successor(), buf.cend());
    /// ```
    #[inline]
    pub fn cbegin(&self) -> Cursor<T, A> {
        Cursor::new(self, 0)
    }

    /// Returns an immutable cursor at the one-past-the-back sentinel
    /// (logical index `len()`). It cannot be dereferenced.
    #[inline]
    pub fn cend(&self) -> Cursor<T, A> {
        Cursor::new(self, self.len)
    }

    /// Returns a mutable cursor at the front (logical index 0).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// buf.extend(vec![1, 2]);
    ///
    /// let mut cursor = buf.begin();
    /// cursor.move_next();
    /// *cursor.get_mut().unwrap() += 10;
    /// assert_eq!(buf[1], 12);
    /// ```
    #[inline]
    pub fn begin(&mut self) -> CursorMut<T, A> {
        CursorMut::new(self, 0)
    }

    /// Returns a mutable cursor at the one-past-the-back sentinel.
    #[inline]
    pub fn end(&mut self) -> CursorMut<T, A> {
        let len = self.len;
        CursorMut::new(self, len)
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexError {
                index: index,
                len: self.len,
            })
        }
    }

    /// Lengths of the run starting at the front slot and of the wrapped run
    /// starting at slot 0.
    #[inline]
    fn slice_bounds(&self) -> (usize, usize) {
        if self.is_contiguous() {
            (self.len, 0)
        } else {
            let front = self.cap - self.tail;
            (front, self.len - front)
        }
    }

    #[inline]
    fn rejected(err: CreateError) -> CreateError {
        debug!("rejected ring buffer of {}: {}", any::type_name::<T>(), err);
        err
    }
}
