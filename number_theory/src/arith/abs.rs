use num_bigint::BigInt;
use num_traits::Signed;

/// Returns a non-negative integer with the same magnitude as `n`.
#[inline]
pub fn abs(n: &BigInt) -> BigInt {
    if n.is_negative() {
        -n
    } else {
        n.clone()
    }
}
