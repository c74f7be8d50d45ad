use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Runs the extended Euclidean algorithm on `(modulus, n)`, tracking only the
/// Bézout cofactor of `n`.
///
/// Returns `(cofactor, gcd)` where `cofactor * n ≡ gcd (mod modulus)`. The
/// full Bézout pair is never needed here, so the cofactor of `modulus` is not
/// maintained.
///
/// `BigInt` division truncates toward zero with the remainder sign following
/// the dividend, so with negative inputs the terminal remainder may be `-1`
/// rather than `1` for coprime pairs. Callers are expected to handle both.
pub(crate) fn gcdinv(n: &BigInt, modulus: &BigInt) -> (BigInt, BigInt) {
    let mut a = modulus.clone();
    let mut b = n.clone();

    let mut prev = BigInt::zero();
    let mut coeff = BigInt::one();

    while !b.is_zero() {
        let quotient = &a / &b;
        let remainder = &a % &b;
        a = std::mem::replace(&mut b, remainder);

        let next = &prev - &quotient * &coeff;
        prev = std::mem::replace(&mut coeff, next);
    }

    // `a` is now the gcd and `prev` the cofactor of `n`.
    (prev, a)
}
