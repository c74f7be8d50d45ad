use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use rand::Rng;

/// Samples a reduced residue in `[0, bound)` from enough random 64-bit words
/// to cover the bound's width.
pub fn random_below(rng: &mut impl Rng, bound: &BigInt) -> BigInt {
    let mut value = BigInt::zero();
    for _ in 0..(bound.bits() / 64 + 1) {
        value = (value << 64u32) + BigInt::from(rng.gen::<u64>());
    }
    value.mod_floor(bound)
}
