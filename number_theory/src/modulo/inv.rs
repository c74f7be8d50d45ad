use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

use crate::arith::{abs, gcdinv};

/// Calculates the multiplicative inverse of `n` modulo `modulus`, the reduced
/// residue `k` in `[0, |modulus|)` with `n * k ≡ 1 (mod modulus)`.
///
/// Returns [`None`] when `n` and `modulus` are not coprime, in which case no
/// inverse exists. `modulus` must be nonzero but may be negative; negative `n`
/// and `|n| > |modulus|` are both handled.
///
/// ```
/// use num_bigint::BigInt;
/// use number_theory::mult_inverse;
///
/// let inv = mult_inverse(&BigInt::from(4), &BigInt::from(15));
/// assert_eq!(inv, Some(BigInt::from(4)));
///
/// assert!(mult_inverse(&BigInt::from(4), &BigInt::from(6)).is_none());
/// ```
pub fn mult_inverse(n: &BigInt, modulus: &BigInt) -> Option<BigInt> {
    let (cofactor, gcd) = gcdinv(n, modulus);
    let magnitude = abs(modulus);

    if gcd.is_one() {
        Some(cofactor.mod_floor(&magnitude))
    } else if (-gcd).is_one() {
        // Coprime, but the cofactor carries the wrong sign. Flip it back into
        // a reduced residue class.
        Some((&magnitude - cofactor).mod_floor(&magnitude))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inverse(n: i64, modulus: i64) -> Option<BigInt> {
        mult_inverse(&BigInt::from(n), &BigInt::from(modulus))
    }

    #[test]
    fn test_no_inverse() {
        // Same integer.
        assert_eq!(inverse(5, 5), None);

        // Common factor.
        assert_eq!(inverse(4, 6), None);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(inverse(4, 15), Some(BigInt::from(4)));

        // Negative n reduces into the residue class.
        assert_eq!(inverse(-4, 15), Some(BigInt::from(11)));

        // Negative modulus.
        assert_eq!(inverse(4, -15), Some(BigInt::from(4)));

        // Both negative.
        assert_eq!(inverse(-4, -15), Some(BigInt::from(11)));
    }

    #[test]
    fn test_inverse_large_magnitude() {
        // |n| > |modulus| in every sign combination.
        assert_eq!(inverse(19, 15), Some(BigInt::from(4)));
        assert_eq!(inverse(-19, 15), Some(BigInt::from(11)));
        assert_eq!(inverse(19, -15), Some(BigInt::from(4)));
        assert_eq!(inverse(-19, -15), Some(BigInt::from(11)));
    }
}
