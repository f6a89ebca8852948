//! Error type for the checked arithmetic surface.

/// Error type for magnitude arithmetic.
///
/// Well-formed signed arithmetic is total; the only fallible public
/// operation is unsigned magnitude subtraction, whose result would
/// otherwise not be representable as a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// The subtrahend's magnitude exceeds the minuend's.
    #[error("magnitude underflow: subtrahend exceeds minuend")]
    MagnitudeUnderflow,
}
