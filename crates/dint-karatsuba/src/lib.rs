//! # dint-karatsuba
//!
//! Word-level arithmetic kernels for the dint arbitrary-precision integer:
//! carry-propagating addition and subtraction over aliasable word ranges,
//! overflow-safe scalar multiplication built from half-word pieces, and a
//! recursive Karatsuba multiplier with fixed-offset scratch reuse.

pub mod addsub;
pub mod karatsuba;
pub mod mul;
pub mod scalar;
pub mod schoolbook;
pub mod scratch;
pub mod word;

// Re-exports
pub use mul::mul_to;
pub use schoolbook::schoolbook_mul;
pub use word::{Word, HALF_BITS, NIL_WORDS, WORD_BITS};
