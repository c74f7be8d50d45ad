//! Modular operations, one file per operation family.

mod inv;
mod pow;
mod sqrt;

pub use inv::mult_inverse;
pub use pow::pow;
pub use sqrt::{is_square, unsquare, RootSet};

pub(crate) use pow::pow_reduced;
