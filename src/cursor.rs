//! Bidirectional cursors over the logical positions of a `RingBuffer`.
//!
//! A cursor holds a logical index in `[0, len]`, where `len` is the
//! one-past-the-back sentinel. Moving clamps at both ends, and every
//! dereference goes back through the buffer's checked `at`, so reading the
//! sentinel fails with an `IndexError` instead of touching storage.

use std::cmp;
use std::fmt;

use crate::allocator::{Allocator, Global};
use crate::error::IndexError;
use crate::ringbuffer::RingBuffer;

/// An immutable cursor, created by `RingBuffer::cbegin` and
/// `RingBuffer::cend`.
pub struct Cursor<'a, T: 'a, A: Allocator + 'a = Global> {
    buf: &'a RingBuffer<T, A>,
    index: usize,
}

/// A mutable cursor, created by `RingBuffer::begin` and `RingBuffer::end`.
pub struct CursorMut<'a, T: 'a, A: Allocator + 'a = Global> {
    buf: &'a mut RingBuffer<T, A>,
    index: usize,
}

impl<'a, T, A: Allocator> Cursor<'a, T, A> {
    #[inline]
    pub(crate) fn new(buf: &'a RingBuffer<T, A>, index: usize) -> Self {
        Cursor {
            buf: buf,
            index: index,
        }
    }

    /// Returns the logical index the cursor points at.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns true if the cursor is at (or past) the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index >= self.buf.len()
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns an `IndexError` at the end sentinel, exactly like
    /// `RingBuffer::at`.
    #[inline]
    pub fn get(&self) -> Result<&'a T, IndexError> {
        self.buf.at(self.index)
    }

    /// Moves one position towards the back. Does nothing at the end
    /// sentinel.
    #[inline]
    pub fn move_next(&mut self) {
        self.index = cmp::min(self.buf.len(), self.index + 1);
    }

    /// Moves one position towards the front. Does nothing at index 0.
    #[inline]
    pub fn move_prev(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Returns a copy of the cursor moved one position towards the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// buf.extend(vec![1, 2]);
    ///
    /// let second = buf.cbegin().successor();
    /// assert_eq!(second.get(), Ok(&2));
    /// assert_eq!(second.successor(), buf.cend());
    /// assert_eq!(buf.cend().successor(), buf.cend());
    /// ```
    #[inline]
    pub fn successor(mut self) -> Self {
        self.move_next();
        self
    }

    /// Returns a copy of the cursor moved one position towards the front.
    #[inline]
    pub fn predecessor(mut self) -> Self {
        self.move_prev();
        self
    }
}

impl<'a, T, A: Allocator> Clone for Cursor<'a, T, A> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, A: Allocator> Copy for Cursor<'a, T, A> {}

impl<'a, T, A: Allocator> PartialEq for Cursor<'a, T, A> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<'a, T, A: Allocator> Eq for Cursor<'a, T, A> {}

impl<'a, T, A: Allocator> fmt::Debug for Cursor<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.buf.len())
            .finish()
    }
}

impl<'a, T, A: Allocator> CursorMut<'a, T, A> {
    #[inline]
    pub(crate) fn new(buf: &'a mut RingBuffer<T, A>, index: usize) -> Self {
        CursorMut {
            buf: buf,
            index: index,
        }
    }

    /// Returns the logical index the cursor points at.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns true if the cursor is at (or past) the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index >= self.buf.len()
    }

    /// Returns the element under the cursor.
    #[inline]
    pub fn get(&self) -> Result<&T, IndexError> {
        self.buf.at(self.index)
    }

    /// Returns the element under the cursor mutably.
    ///
    /// # Errors
    ///
    /// Returns an `IndexError` at the end sentinel.
    #[inline]
    pub fn get_mut(&mut self) -> Result<&mut T, IndexError> {
        self.buf.at_mut(self.index)
    }

    /// Moves one position towards the back. Does nothing at the end
    /// sentinel.
    #[inline]
    pub fn move_next(&mut self) {
        self.index = cmp::min(self.buf.len(), self.index + 1);
    }

    /// Moves one position towards the front. Does nothing at index 0.
    #[inline]
    pub fn move_prev(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Reborrows as an immutable cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<T, A> {
        Cursor::new(&*self.buf, self.index)
    }
}

impl<'a, T, A: Allocator> fmt::Debug for CursorMut<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.buf.len())
            .finish()
    }
}
