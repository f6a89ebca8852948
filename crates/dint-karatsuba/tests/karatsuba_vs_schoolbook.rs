//! Differential tests: the Karatsuba engine against the schoolbook
//! reference and against `num-bigint`.

use num_bigint::BigUint;
use proptest::collection::vec;
use proptest::prelude::*;

use dint_karatsuba::{mul_to, schoolbook_mul, Word};

fn to_biguint(words: &[Word]) -> BigUint {
    BigUint::from_slice(words)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Karatsuba and schoolbook agree bit for bit across every length
    /// mix from 1 to 8 words, odd and even.
    #[test]
    fn karatsuba_equals_schoolbook(
        a in vec(any::<Word>(), 1..=8),
        b in vec(any::<Word>(), 1..=8),
    ) {
        let n = a.len().max(b.len());
        let mut expected = schoolbook_mul(&a, &b);
        expected.resize(2 * n, 0);
        prop_assert_eq!(mul_to(&a, &b), expected);
    }

    /// The untrimmed product converts to the same integer num-bigint
    /// computes.
    #[test]
    fn karatsuba_matches_bigint(
        a in vec(any::<Word>(), 1..=12),
        b in vec(any::<Word>(), 1..=12),
    ) {
        let product = mul_to(&a, &b);
        prop_assert_eq!(to_biguint(&product), to_biguint(&a) * to_biguint(&b));
    }

    /// Multiplication distributes over addition at the magnitude level:
    /// a * (b + c) == a * b + a * c.
    #[test]
    fn karatsuba_distributes(
        a in vec(any::<Word>(), 1..=6),
        b in vec(any::<Word>(), 1..=6),
        c in vec(any::<Word>(), 1..=6),
    ) {
        let mut sum = (to_biguint(&b) + to_biguint(&c)).to_u32_digits();
        if sum.is_empty() {
            sum.push(0);
        }
        let lhs = to_biguint(&mul_to(&a, &sum));
        let rhs = to_biguint(&mul_to(&a, &b)) + to_biguint(&mul_to(&a, &c));
        prop_assert_eq!(lhs, rhs);
    }
}

/// Saturated operands at every length drive each carry-fold branch.
#[test]
fn all_max_lengths_one_through_eight() {
    for n in 1..=8 {
        let a = vec![Word::MAX; n];
        let product = mul_to(&a, &a);
        let expected = to_biguint(&a) * to_biguint(&a);
        assert_eq!(to_biguint(&product), expected, "length {n}");
    }
}

/// The 3-word odd split composes the carry-fold identity with the scalar
/// cross terms; check it against the 3x3 schoolbook product exactly.
#[test]
fn odd_three_word_split_exact() {
    let a = vec![0xffff_fffe, 0x8000_0001, 0xffff_ffff];
    let b = vec![0x0000_0003, 0xffff_fff0, 0x7fff_ffff];
    assert_eq!(mul_to(&a, &b), schoolbook_mul(&a, &b));
}
