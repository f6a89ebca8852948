//! Top-level multiplication entry point.

use crate::karatsuba::karatsuba;
use crate::scratch;
use crate::word::Word;

/// Multiply two word ranges, returning the untrimmed `2 * max(len)`-word
/// product.
///
/// The shorter operand is padded up to the longer one's length in an
/// explicit copy, so padding never leaks into a caller's value. Scratch
/// comes from the per-thread pool and goes back when the engine returns.
#[must_use]
pub fn mul_to(a: &[Word], b: &[Word]) -> Vec<Word> {
    debug_assert!(!a.is_empty() && !b.is_empty());

    let n = a.len().max(b.len());
    tracing::trace!(a_len = a.len(), b_len = b.len(), "karatsuba multiply");

    let mut dest = vec![0; 2 * n];
    let mut buf = scratch::acquire(4 * n);

    let padded: Vec<Word>;
    let (a_eq, b_eq): (&[Word], &[Word]) = if a.len() == b.len() {
        (a, b)
    } else if a.len() < b.len() {
        let mut copy = a.to_vec();
        copy.resize(n, 0);
        padded = copy;
        (&padded, b)
    } else {
        let mut copy = b.to_vec();
        copy.resize(n, 0);
        padded = copy;
        (a, &padded)
    };

    karatsuba(a_eq, b_eq, &mut dest, &mut buf);
    scratch::release(buf);
    dest
}
