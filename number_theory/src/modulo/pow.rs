use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::arith::abs;

/// Calculates `n^k (mod modulus)` as a reduced residue in `[0, |modulus|)`.
///
/// Returns [`None`] when the exponent `k` is negative. `modulus` must be
/// nonzero. The exponent `0` yields `1 mod |modulus|`, which is `0` for a
/// modulus of magnitude one.
///
/// ```
/// use num_bigint::BigInt;
/// use number_theory::pow;
///
/// let r = pow(&BigInt::from(15), &BigInt::from(4), &BigInt::from(12));
/// assert_eq!(r, Some(BigInt::from(9)));
/// ```
pub fn pow(n: &BigInt, k: &BigInt, modulus: &BigInt) -> Option<BigInt> {
    if k.is_negative() {
        return None;
    }

    let magnitude = abs(modulus);
    Some(pow_reduced(&n.mod_floor(&magnitude), k, &magnitude))
}

/// Exponentiation by repeated squaring for a base already reduced into
/// `[0, modulus)` with a positive modulus and a non-negative exponent.
///
/// `k` is decomposed into a sum of distinct powers of two, scanned from the
/// largest (`k.bits() - 1`) downward; each contributing `n^(2^i)` factor is
/// folded into the running product. Every multiplication is reduced
/// immediately so intermediate magnitudes stay below `modulus^2`.
pub(crate) fn pow_reduced(base: &BigInt, k: &BigInt, modulus: &BigInt) -> BigInt {
    let mut result = BigInt::one().mod_floor(modulus);
    if k.is_zero() {
        return result;
    }

    let mut remaining = k.clone();
    for i in (0..k.bits()).rev() {
        let power = BigInt::one() << i;
        if power <= remaining {
            result = (result * repeated_square(base, i, modulus)).mod_floor(modulus);
            remaining -= power;
        }
    }
    result
}

/// Calculates `n^(2^k) (mod modulus)` by squaring `k` times, reducing after
/// every squaring.
fn repeated_square(n: &BigInt, k: u64, modulus: &BigInt) -> BigInt {
    let mut result = n.clone();
    for _ in 0..k {
        result = (&result * &result).mod_floor(modulus);
    }
    result
}
