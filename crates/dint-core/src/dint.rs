//! The signed arbitrary-precision integer and its operator surface.

use std::cmp::Ordering;
use std::fmt::Write as _;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use dint_karatsuba::mul_to;
use dint_karatsuba::word::{Word, NIL_WORDS, WORD_BITS};
use num_traits::{One, Zero};

use crate::magnitude::{cmp_words, Magnitude};

const HEX_DIGITS: usize = (WORD_BITS / 4) as usize;

/// A dynamically sized signed integer.
///
/// Sign and magnitude: a negative flag plus a canonical little-endian word
/// sequence. Zero is always non-negative; every mutation re-establishes
/// that together with the no-leading-zero invariant, so structural
/// equality coincides with numeric equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dint {
    negative: bool,
    mag: Magnitude,
}

impl Dint {
    /// Build a non-negative value from little-endian words, trimmed on
    /// entry. The empty sequence normalizes to zero.
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        Self {
            negative: false,
            mag: Magnitude::from_words(words),
        }
    }

    /// Build from little-endian words and a sign. A zero magnitude forces
    /// the sign off.
    #[must_use]
    pub fn from_signed_words(negative: bool, words: Vec<Word>) -> Self {
        let mut value = Self {
            negative,
            mag: Magnitude::from_words(words),
        };
        value.normalize_sign();
        value
    }

    /// Magnitude words, least significant first.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        self.mag.words()
    }

    /// Number of magnitude words, always at least one.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.mag.word_len()
    }

    /// Least significant magnitude word.
    #[must_use]
    pub fn front(&self) -> Word {
        self.mag.front()
    }

    /// Most significant magnitude word.
    #[must_use]
    pub fn back(&self) -> Word {
        self.mag.back()
    }

    /// Whether the value is negative; zero never is.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Borrow the magnitude.
    #[must_use]
    pub fn magnitude(&self) -> &Magnitude {
        &self.mag
    }

    /// Flip the sign in place; zero stays non-negative.
    pub fn negate(&mut self) {
        if !self.mag.is_zero() {
            self.negative = !self.negative;
        }
    }

    /// Add one unit: the zero magnitude with an initial carry propagates
    /// exactly one through the words.
    pub fn increment(&mut self) -> &mut Self {
        if self.negative {
            self.mag.sub_abs(NIL_WORDS, true);
        } else {
            self.mag.add_abs(NIL_WORDS, true);
        }
        self.normalize_sign();
        self
    }

    /// Subtract one unit.
    pub fn decrement(&mut self) -> &mut Self {
        if self.negative {
            self.mag.add_abs(NIL_WORDS, true);
        } else if self.mag.is_zero() {
            // 0 - 1: the borrow trick has no word to take from.
            self.negative = true;
            self.mag = Magnitude::from_words(vec![1]);
        } else {
            self.mag.sub_abs(NIL_WORDS, true);
        }
        self.normalize_sign();
        self
    }

    /// Diagnostic rendering: a sign marker, then each word as fixed-width
    /// hex, most significant first. Not a stability contract.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut out = String::new();
        out.push(if self.negative { '-' } else { ' ' });
        for &word in self.words().iter().rev() {
            let _ = write!(out, "{word:0width$x} ", width = HEX_DIGITS);
        }
        out
    }

    fn normalize_sign(&mut self) {
        if self.mag.is_zero() {
            self.negative = false;
        }
    }

    /// Shared signed add/subtract core, combining `self` with a magnitude
    /// carrying an explicit effective sign: `AddAssign` passes the
    /// right-hand sign through, `SubAssign` its inverse. Same signs add
    /// magnitudes; differing signs subtract the smaller from the larger
    /// and the result takes the larger operand's sign.
    fn combine(&mut self, rhs: &[Word], rhs_negative: bool) {
        if self.negative == rhs_negative {
            self.mag.add_abs(rhs, false);
        } else if cmp_words(self.words(), rhs) == Ordering::Less {
            self.mag.rsub_abs(rhs, false);
            self.negative = rhs_negative;
        } else {
            self.mag.sub_abs(rhs, false);
        }
        self.normalize_sign();
    }

    /// Fresh-destination combine backing the binary operators: the result
    /// buffer is sized to the larger operand, with one extra word when the
    /// adder reports a carry escape.
    fn combined(&self, rhs: &[Word], rhs_negative: bool) -> Dint {
        use dint_karatsuba::addsub::{add_into, sub_into};

        let lhs = self.words();
        if self.negative == rhs_negative {
            let (big, small) = if lhs.len() >= rhs.len() {
                (lhs, rhs)
            } else {
                (rhs, lhs)
            };
            let mut dest = vec![0; big.len()];
            if add_into(big, small, &mut dest, false) {
                dest.push(1);
            }
            Dint::from_signed_words(self.negative, dest)
        } else {
            let (big, small, negative) = match cmp_words(lhs, rhs) {
                Ordering::Less => (rhs, lhs, rhs_negative),
                _ => (lhs, rhs, self.negative),
            };
            let mut dest = vec![0; big.len()];
            let result = sub_into(big, small, &mut dest, false);
            debug_assert!(!result.borrow_out, "subtrahend exceeded minuend");
            if let Some(from) = result.trailing_zeros_from {
                dest.truncate(from.max(1));
            }
            Dint::from_signed_words(negative, dest)
        }
    }
}

impl Default for Dint {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Dint {
    fn zero() -> Self {
        Self {
            negative: false,
            mag: Magnitude::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }
}

impl One for Dint {
    fn one() -> Self {
        Self::from_words(vec![1])
    }
}

// --- conversions ---

impl From<u64> for Dint {
    #[allow(clippy::cast_possible_truncation)]
    fn from(mut value: u64) -> Self {
        let mut words = Vec::new();
        while value != 0 {
            words.push(value as Word);
            value >>= WORD_BITS;
        }
        Self::from_words(words)
    }
}

impl From<u32> for Dint {
    fn from(value: u32) -> Self {
        Self::from_words(vec![value])
    }
}

impl From<i64> for Dint {
    fn from(value: i64) -> Self {
        let mut out = Self::from(value.unsigned_abs());
        out.negative = value < 0 && !out.is_zero();
        out
    }
}

impl From<i32> for Dint {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

// --- comparisons ---

impl PartialOrd for Dint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dint {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, true) => other.mag.cmp_abs(&self.mag),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.mag.cmp_abs(&other.mag),
        }
    }
}

// --- negation ---

impl Neg for &Dint {
    type Output = Dint;

    fn neg(self) -> Dint {
        let mut out = self.clone();
        out.negate();
        out
    }
}

impl Neg for Dint {
    type Output = Dint;

    fn neg(mut self) -> Dint {
        self.negate();
        self
    }
}

// --- addition / subtraction ---

impl AddAssign<&Dint> for Dint {
    fn add_assign(&mut self, rhs: &Dint) {
        self.combine(rhs.words(), rhs.negative);
    }
}

impl AddAssign for Dint {
    fn add_assign(&mut self, rhs: Dint) {
        *self += &rhs;
    }
}

impl AddAssign<Word> for Dint {
    fn add_assign(&mut self, rhs: Word) {
        self.combine(&[rhs], false);
    }
}

impl Add for &Dint {
    type Output = Dint;

    fn add(self, rhs: &Dint) -> Dint {
        self.combined(rhs.words(), rhs.negative)
    }
}

impl Add<&Dint> for Dint {
    type Output = Dint;

    fn add(mut self, rhs: &Dint) -> Dint {
        self += rhs;
        self
    }
}

impl Add for Dint {
    type Output = Dint;

    fn add(mut self, rhs: Dint) -> Dint {
        self += &rhs;
        self
    }
}

impl SubAssign<&Dint> for Dint {
    fn sub_assign(&mut self, rhs: &Dint) {
        self.combine(rhs.words(), !rhs.negative);
    }
}

impl SubAssign for Dint {
    fn sub_assign(&mut self, rhs: Dint) {
        *self -= &rhs;
    }
}

impl SubAssign<Word> for Dint {
    fn sub_assign(&mut self, rhs: Word) {
        self.combine(&[rhs], true);
    }
}

impl Sub for &Dint {
    type Output = Dint;

    fn sub(self, rhs: &Dint) -> Dint {
        self.combined(rhs.words(), !rhs.negative)
    }
}

impl Sub<&Dint> for Dint {
    type Output = Dint;

    fn sub(mut self, rhs: &Dint) -> Dint {
        self -= rhs;
        self
    }
}

impl Sub for Dint {
    type Output = Dint;

    fn sub(mut self, rhs: Dint) -> Dint {
        self -= &rhs;
        self
    }
}

// --- multiplication ---

impl Mul for &Dint {
    type Output = Dint;

    fn mul(self, rhs: &Dint) -> Dint {
        let product = mul_to(self.words(), rhs.words());
        Dint::from_signed_words(self.negative != rhs.negative, product)
    }
}

impl Mul for Dint {
    type Output = Dint;

    fn mul(self, rhs: Dint) -> Dint {
        &self * &rhs
    }
}

impl MulAssign<&Dint> for Dint {
    fn mul_assign(&mut self, rhs: &Dint) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Dint {
    fn mul_assign(&mut self, rhs: Dint) {
        *self *= &rhs;
    }
}

impl MulAssign<Word> for Dint {
    fn mul_assign(&mut self, rhs: Word) {
        self.mag.mul_word(rhs);
        self.normalize_sign();
    }
}

impl Mul<Word> for &Dint {
    type Output = Dint;

    fn mul(self, rhs: Word) -> Dint {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}

impl Mul<Word> for Dint {
    type Output = Dint;

    fn mul(mut self, rhs: Word) -> Dint {
        self *= rhs;
        self
    }
}

impl Mul<Dint> for Word {
    type Output = Dint;

    fn mul(self, rhs: Dint) -> Dint {
        rhs * self
    }
}
