#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Arbitrary-precision modular arithmetic primitives.
//!
//! Everything here operates on [`num_bigint::BigInt`] values, so no
//! intermediate result can overflow. The operations are the building blocks
//! of modular-field cryptography: multiplicative inverses, fast modular
//! exponentiation, quadratic-residue testing and modular square roots
//! (including Tonelli–Shanks for primes where no closed form applies).

pub mod arith;
pub mod modulo;

pub mod error;

pub use arith::abs;
pub use error::NumberTheoryError;
pub use modulo::{is_square, mult_inverse, pow, unsquare, RootSet};
