//! Modular slot arithmetic shared by the buffer and its iterators.
//!
//! Capacities are kept below `usize::MAX / 2`, so `index + addend` and
//! `index + capacity` can never overflow here.

#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_around_both_ends() {
        assert_eq!(wrap_add(0, 1, 4), 1);
        assert_eq!(wrap_add(3, 1, 4), 0);
        assert_eq!(wrap_add(2, 4, 4), 2);
        assert_eq!(wrap_sub(0, 1, 4), 3);
        assert_eq!(wrap_sub(3, 3, 4), 0);
        assert_eq!(wrap_sub(0, 1, 1), 0);
    }
}
