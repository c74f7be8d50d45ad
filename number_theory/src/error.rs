//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberTheoryError {
    /// Error that occurs when the Tonelli–Shanks order search runs out of
    /// exponents, which means the input was not a genuine quadratic residue.
    ///
    /// [`unsquare`](crate::unsquare) rejects non-residues before the search
    /// ever starts, so this error signals a broken internal invariant rather
    /// than an ordinary "no root exists" outcome.
    #[error("Value {value} is not a quadratic residue modulo {modulus}; the residue check should have rejected it!")]
    NonResidue {
        /// The value whose square root was requested.
        value: String,
        /// The prime modulus.
        modulus: String,
    },
}
