//! # dint-core
//!
//! Sign-and-magnitude arbitrary-precision integers backed by the
//! `dint-karatsuba` word kernels.
//!
//! [`Dint`] is the public value type: canonical little-endian magnitude
//! plus a sign, with the usual operator surface (`+ - * ++ --`,
//! comparisons) and hex diagnostics. [`Magnitude`] is the underlying
//! unsigned store for callers that only need absolute values.
//!
//! # Example
//! ```
//! use dint_core::Dint;
//!
//! let a = Dint::from(u64::MAX);
//! let mut sum = &a + &a;
//! sum.increment();
//! assert_eq!(&sum - &a, {
//!     let mut one_more = a.clone();
//!     one_more.increment();
//!     one_more
//! });
//! ```

pub mod dint;
pub mod error;
pub mod magnitude;

// Re-exports
pub use dint::Dint;
pub use dint_karatsuba::word::Word;
pub use error::ArithError;
pub use magnitude::Magnitude;
