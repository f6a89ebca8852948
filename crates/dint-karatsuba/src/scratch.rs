//! Per-thread scratch buffers for the multiplication engine.
//!
//! Karatsuba needs a 4n-word work area per top-level call. Buffers are
//! cached per thread and handed back after use, so repeated multiplies
//! amortize the allocation. Nothing here is process-wide: each thread owns
//! its own pool and a buffer is exclusively held between acquire and
//! release.

use std::cell::RefCell;

use crate::word::Word;

/// Cached buffers kept per thread.
const MAX_POOLED: usize = 4;

thread_local! {
    static POOL: RefCell<Vec<Vec<Word>>> = const { RefCell::new(Vec::new()) };
}

/// Take a zeroed scratch buffer of `len` words, reusing a pooled one when
/// available.
#[must_use]
pub fn acquire(len: usize) -> Vec<Word> {
    POOL.with(|pool| match pool.borrow_mut().pop() {
        Some(mut buf) => {
            if buf.capacity() < len {
                tracing::debug!(len, capacity = buf.capacity(), "growing scratch buffer");
            }
            buf.clear();
            buf.resize(len, 0);
            buf
        }
        None => vec![0; len],
    })
}

/// Hand a scratch buffer back for reuse. Dropped when the pool is full.
pub fn release(buf: Vec<Word>) {
    POOL.with(|pool| {
        let mut pool = pool.borrow_mut();
        if pool.len() < MAX_POOLED {
            pool.push(buf);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_is_zeroed() {
        let buf = acquire(8);
        assert_eq!(buf, vec![0; 8]);
        release(buf);
    }

    #[test]
    fn release_then_acquire_reuses_capacity() {
        let mut buf = acquire(16);
        buf[15] = 0xdead;
        release(buf);

        let again = acquire(16);
        assert_eq!(again, vec![0; 16]);
        assert!(again.capacity() >= 16);
        release(again);
    }

    #[test]
    fn pool_is_bounded() {
        let bufs: Vec<_> = (0..MAX_POOLED + 3).map(|_| acquire(4)).collect();
        for buf in bufs {
            release(buf);
        }
        // Further releases past the cap are simply dropped; acquiring
        // still works.
        let buf = acquire(4);
        assert_eq!(buf.len(), 4);
        release(buf);
    }
}
