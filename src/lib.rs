//! A double-ended ring buffer with a fixed, heap-allocated capacity.
//!
//! The storage region is allocated once when the buffer is created and is
//! never resized. Inserting and removing at either end is `O(1)`, indexing is
//! `O(1)`, and the contained elements are not required to be copyable.
//!
//! A full buffer overwrites: `push_back` evicts the front element and
//! `push_front` evicts the back element, handing the evicted value back to
//! the caller.
//!
//! This crate is inspired by [**bluss/arrayvec**]
//! [**bluss/arrayvec**]: https://github.com/bluss/arrayvec
//!
//! # Feature Flags
//! The **ringbuf-deque** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate is `no_std` and only needs `alloc`
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringbuf-deque = "0.1"
//! ```
//!
//! # Capacity
//!
//! The capacity is chosen at runtime and must be at least 1 and below
//! `usize::MAX / 2`. Zero-sized element types are rejected.
//!
//! # Examples
//! ```
//! use ringbuf_deque::RingBuffer;
//!
//! let mut buf = RingBuffer::new(3).unwrap();
//! assert_eq!(buf.capacity(), 3);
//! assert_eq!(buf.len(), 0);
//!
//! buf.push_back(1);
//! buf.push_back(2);
//! buf.push_back(3);
//! assert_eq!(buf.push_back(4), Some(1));
//! assert_eq!(buf.len(), 3);
//!
//! assert_eq!(buf.pop_front(), Some(2));
//! assert_eq!(buf.pop_front(), Some(3));
//! assert_eq!(buf.pop_front(), Some(4));
//! assert_eq!(buf.pop_front(), None);
//! ```
//!
//! # Checked access
//! ```
//! use ringbuf_deque::RingBuffer;
//!
//! let mut buf = RingBuffer::new(4).unwrap();
//! assert!(buf.front().is_err());
//!
//! buf.push_back(11);
//! buf.push_front(10);
//!
//! assert_eq!(buf.at(0), Ok(&10));
//! assert_eq!(buf[1], 11);
//! assert_eq!(buf.at(2).unwrap_err().len, 2);
//! ```
//!
//! # Cursors
//! ```
//! use ringbuf_deque::RingBuffer;
//!
//! let mut buf = RingBuffer::new(4).unwrap();
//! buf.extend(0..3);
//!
//! let mut cursor = buf.cbegin();
//! let mut seen = Vec::new();
//! while cursor != buf.cend() {
//!     seen.push(*cursor.get().unwrap());
//!     cursor.move_next();
//! }
//! assert_eq!(seen, vec![0, 1, 2]);
//! ```
//!
//! # Iterator
//! ```
//! use ringbuf_deque::RingBuffer;
//!
//! let mut buf = RingBuffer::new(4).unwrap();
//! buf.extend(0..6);
//!
//! let items: Vec<_> = buf.into_iter().collect();
//! assert_eq!(items, vec![2, 3, 4, 5]);
//! ```

#![cfg_attr(not(any(feature="std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;
#[cfg(not(any(feature="std", test)))]
extern crate core as std;
#[macro_use]
extern crate log;
extern crate odds;

pub use odds::IndexRange as RangeArgument;

mod allocator;
mod cursor;
pub mod error;
mod ringbuffer;
mod utils;

pub use allocator::{Allocator, Global};
pub use cursor::{Cursor, CursorMut};
pub use error::{CreateError, IndexError};
pub use ringbuffer::{IntoIter, Iter, IterMut, RingBuffer};
