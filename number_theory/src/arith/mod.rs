//! Sign-level helpers for arbitrary-precision integers.

mod abs;
mod gcd;

pub use abs::abs;
pub(crate) use gcd::gcdinv;
