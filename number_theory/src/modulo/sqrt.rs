use std::slice;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::NumberTheoryError;
use crate::modulo::pow_reduced;

/// The set of square roots returned by [`unsquare`]: zero, one, or two
/// distinct reduced residues, compared without regard to order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootSet {
    // Kept sorted and deduplicated so the derived equality is set equality.
    roots: Vec<BigInt>,
}

impl RootSet {
    /// The empty set: no root exists.
    #[inline]
    pub fn empty() -> Self {
        Self { roots: Vec::new() }
    }

    /// A singleton set, used for the root of zero.
    #[inline]
    pub fn single(root: BigInt) -> Self {
        Self { roots: vec![root] }
    }

    /// A two-element set of a root and its additive inverse.
    ///
    /// Duplicates collapse, so this degrades gracefully to a singleton if the
    /// two roots coincide.
    #[inline]
    pub fn pair(first: BigInt, second: BigInt) -> Self {
        let mut roots = vec![first, second];
        roots.sort_unstable();
        roots.dedup();
        Self { roots }
    }

    /// Returns the number of roots in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns `true` if the set contains no roots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns `true` if `root` is in the set.
    #[inline]
    pub fn contains(&self, root: &BigInt) -> bool {
        self.roots.binary_search(root).is_ok()
    }

    /// Iterates over the roots in ascending order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, BigInt> {
        self.roots.iter()
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a BigInt;
    type IntoIter = slice::Iter<'a, BigInt>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

/// Checks whether `n` is congruent to a perfect square modulo the prime `p`,
/// `p > 2`, by Euler's criterion.
///
/// Zero counts as a square, so every multiple of `p` reports `true`.
///
/// ```
/// use num_bigint::BigInt;
/// use number_theory::is_square;
///
/// assert!(is_square(&BigInt::from(3), &BigInt::from(13)));
/// assert!(!is_square(&BigInt::from(5), &BigInt::from(13)));
/// ```
pub fn is_square(n: &BigInt, p: &BigInt) -> bool {
    let residue = n.mod_floor(p);
    if residue.is_zero() {
        return true;
    }

    // Euler: n^((p-1)/2) is 1 for residues and p-1 for non-residues.
    pow_reduced(&residue, &((p - BigInt::one()) >> 1u32), p).is_one()
}

/// Calculates every square root of `n` modulo the prime `p`, `p > 2`.
///
/// The result is the set of reduced residues `a` with `a^2 ≡ n (mod p)`:
/// empty when `n` is not a quadratic residue, the singleton `{0}` when `p`
/// divides `n`, and otherwise a pair of roots that are additive inverses of
/// each other modulo `p`.
///
/// Three strategies are dispatched on the residue class of `p`: Lagrange's
/// closed form for `p ≡ 3 (mod 4)`, Legendre's method for `p ≡ 5 (mod 8)`,
/// and the Tonelli–Shanks algorithm for the remaining primes.
///
/// # Errors
///
/// A [`NumberTheoryError::NonResidue`] is only possible if the internal
/// Tonelli–Shanks invariant breaks, which the up-front residue check rules
/// out for a prime `p`. Behavior for composite `p` is unspecified.
///
/// ```
/// use num_bigint::BigInt;
/// use number_theory::{unsquare, RootSet};
///
/// let roots = unsquare(&BigInt::from(2), &BigInt::from(7)).unwrap();
/// assert_eq!(roots, RootSet::pair(BigInt::from(3), BigInt::from(4)));
/// ```
pub fn unsquare(n: &BigInt, p: &BigInt) -> Result<RootSet, NumberTheoryError> {
    let residue = n.mod_floor(p);
    if residue.is_zero() {
        return Ok(RootSet::single(BigInt::zero()));
    }
    if !is_square(&residue, p) {
        return Ok(RootSet::empty());
    }

    let root = if p.mod_floor(&BigInt::from(4)) == BigInt::from(3) {
        // Lagrange: n^((p+1)/4) is a root whenever one exists.
        pow_reduced(&residue, &((p + BigInt::one()) >> 2u32), p)
    } else if p.mod_floor(&BigInt::from(8)) == BigInt::from(5) {
        legendre_root(&residue, p)
    } else {
        tonelli_shanks(&residue, p)?
    };

    let negated = (p - &root).mod_floor(p);
    Ok(RootSet::pair(root, negated))
}

/// Legendre's closed form for `p ≡ 5 (mod 8)`.
///
/// `n^((p+3)/8)` is a square root of either `n` or `-n`; in the latter case
/// multiplying by `2^((p-1)/4)` (a fourth root of unity) corrects it.
fn legendre_root(residue: &BigInt, p: &BigInt) -> BigInt {
    let quarter = (p - BigInt::one()) >> 2u32;

    let root = pow_reduced(residue, &((p + BigInt::from(3)) >> 3u32), p);
    if pow_reduced(residue, &quarter, p).is_one() {
        root
    } else {
        let correction = pow_reduced(&BigInt::from(2), &quarter, p);
        (root * correction).mod_floor(p)
    }
}

/// The Tonelli–Shanks algorithm for a nonzero quadratic residue modulo an
/// odd prime `p`.
///
/// Maintains the invariants `r^2 ≡ t * n (mod p)`, `c` of order `2^m`, and
/// `t` of order dividing `2^(m-1)`; each round shrinks `m` until `t` reaches
/// one and `r` is a root.
fn tonelli_shanks(n: &BigInt, p: &BigInt) -> Result<BigInt, NumberTheoryError> {
    // Factor p - 1 = q * 2^s with q odd.
    let mut q: BigInt = p - BigInt::one();
    let mut s: u64 = 0;
    while q.is_even() {
        q >>= 1u32;
        s += 1;
    }

    // The smallest non-residue witness. Half of all residue classes qualify,
    // so the scan is short for any prime.
    let mut z = BigInt::from(2);
    while is_square(&z, p) {
        z += 1u32;
    }

    let mut m = s;
    let mut c = pow_reduced(&z, &q, p);
    let mut t = pow_reduced(n, &q, p);
    let mut r = pow_reduced(n, &((&q + BigInt::one()) >> 1u32), p);

    while !t.is_one() {
        // Least i with 0 < i < m and t^(2^i) ≡ 1, by repeated squaring.
        let mut i: u64 = 1;
        let mut square = (&t * &t).mod_floor(p);
        while !square.is_one() && i < m {
            square = (&square * &square).mod_floor(p);
            i += 1;
        }
        if i >= m {
            // The order of t is not the power of two the invariant promises,
            // so n was never a residue. The caller's Euler check makes this
            // unreachable for a prime modulus.
            return Err(NumberTheoryError::NonResidue {
                value: n.to_string(),
                modulus: p.to_string(),
            });
        }

        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = (&b * &b).mod_floor(p);
        }
        m = i;
        c = (&b * &b).mod_floor(p);
        t = (t * &c).mod_floor(p);
        r = (r * b).mod_floor(p);
    }

    Ok(r)
}
