//! The field characteristic `p` and coefficient arithmetic in GF(p).
//!
//! Polynomial coefficients are plain `u64` residues; all of the modular
//! bookkeeping for them lives here so that `Poly` only ever sees values in
//! `[0, p-1]`.

use core::fmt;

use crate::structures::poly::PolyError;
use crate::utils::{is_prime, mod_inverse};

/// Error type for modulus validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModulusError {
    /// The modulus is 0 or 1, which does not describe a field.
    TooSmall(u64),
    /// The modulus is composite.
    NotPrime(u64),
}

impl fmt::Display for ModulusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModulusError::TooSmall(p) => write!(f, "modulus {} is too small (must be at least 2)", p),
            ModulusError::NotPrime(p) => write!(f, "modulus {} is not prime", p),
        }
    }
}

impl std::error::Error for ModulusError {}

/// A prime modulus `p` describing the field GF(p).
///
/// `Modulus` is a plain `Copy` value, so every polynomial carries its own
/// copy and polynomials derived from it by arithmetic share the same `p`.
///
/// # Example
///
/// ```
/// use gfpoly::{Modulus, ModulusError};
///
/// let p = Modulus::new(17).unwrap();
/// assert_eq!(p.value(), 17);
/// assert_eq!(p.mul(5, 7), 1); // 35 = 2 * 17 + 1
///
/// assert_eq!(Modulus::new(15), Err(ModulusError::NotPrime(15)));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u64", into = "u64")
)]
pub struct Modulus(u64);

impl Modulus {
    /// Create a validated modulus.
    ///
    /// # Errors
    ///
    /// Returns `ModulusError::TooSmall` if `p < 2`.
    /// Returns `ModulusError::NotPrime` if `p` is composite.
    pub fn new(p: u64) -> Result<Self, ModulusError> {
        let modulus = Self::new_unchecked(p)?;
        if !is_prime(p) {
            return Err(ModulusError::NotPrime(p));
        }
        Ok(modulus)
    }

    /// Create a modulus, skipping the primality check.
    ///
    /// With a composite `p` the polynomial operations still run, but any
    /// division that meets a zero divisor fails with
    /// [`PolyError::NotInvertible`].
    ///
    /// # Errors
    ///
    /// Returns `ModulusError::TooSmall` if `p < 2`.
    pub fn new_unchecked(p: u64) -> Result<Self, ModulusError> {
        if p < 2 {
            return Err(ModulusError::TooSmall(p));
        }
        Ok(Self(p))
    }

    /// The modulus `p`.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Reduce a signed integer into `[0, p-1]`.
    pub fn reduce(self, value: i64) -> u64 {
        // rem_euclid is non-negative and below p, so the cast back is lossless.
        i128::from(value).rem_euclid(i128::from(self.0)) as u64
    }

    /// Reduce an unsigned integer into `[0, p-1]`.
    #[inline]
    pub fn reduce_u64(self, value: u64) -> u64 {
        value % self.0
    }

    #[inline]
    pub fn add(self, a: u64, b: u64) -> u64 {
        ((u128::from(a) + u128::from(b)) % u128::from(self.0)) as u64
    }

    #[inline]
    pub fn sub(self, a: u64, b: u64) -> u64 {
        // Adding p keeps the intermediate non-negative.
        ((u128::from(a) + u128::from(self.0) - u128::from(b % self.0)) % u128::from(self.0)) as u64
    }

    #[inline]
    pub fn neg(self, a: u64) -> u64 {
        self.sub(0, a)
    }

    #[inline]
    pub fn mul(self, a: u64, b: u64) -> u64 {
        ((u128::from(a) * u128::from(b)) % u128::from(self.0)) as u64
    }

    /// Multiplicative inverse of `a` in GF(p).
    ///
    /// # Errors
    ///
    /// Returns `PolyError::NotInvertible` when `gcd(a, p) != 1`, which means
    /// either `a ≡ 0` or `p` is not prime.
    pub fn inverse(self, a: u64) -> Result<u64, PolyError> {
        mod_inverse(a, self.0).ok_or(PolyError::NotInvertible {
            value: a % self.0,
            modulus: self.0,
        })
    }

    /// Compute `a^exp` in GF(p) using square-and-multiply.
    pub fn pow(self, a: u64, exp: u64) -> u64 {
        let mut base = a % self.0;
        let mut result = 1 % self.0;
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            e >>= 1;
        }
        result
    }
}

/// Same checks as [`Modulus::new`]; composites are rejected.
impl TryFrom<u64> for Modulus {
    type Error = ModulusError;

    fn try_from(p: u64) -> Result<Self, Self::Error> {
        Self::new(p)
    }
}

impl From<Modulus> for u64 {
    fn from(m: Modulus) -> Self {
        m.0
    }
}

impl fmt::Debug for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modulus({})", self.0)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        assert_eq!(Modulus::new(2).unwrap().value(), 2);
        assert_eq!(Modulus::new(17).unwrap().value(), 17);
    }

    #[test]
    fn new_rejects_small() {
        assert_eq!(Modulus::new(0), Err(ModulusError::TooSmall(0)));
        assert_eq!(Modulus::new(1), Err(ModulusError::TooSmall(1)));
        assert_eq!(Modulus::new_unchecked(1), Err(ModulusError::TooSmall(1)));
    }

    #[test]
    fn try_from_checks_primality() {
        assert_eq!(Modulus::try_from(13), Ok(Modulus::new(13).unwrap()));
        assert_eq!(Modulus::try_from(1), Err(ModulusError::TooSmall(1)));
        assert_eq!(Modulus::try_from(15), Err(ModulusError::NotPrime(15)));
    }

    #[test]
    fn new_rejects_composite() {
        assert_eq!(Modulus::new(4), Err(ModulusError::NotPrime(4)));
        assert_eq!(Modulus::new(91), Err(ModulusError::NotPrime(91)));
    }

    #[test]
    fn new_unchecked_accepts_composite() {
        assert_eq!(Modulus::new_unchecked(91).unwrap().value(), 91);
    }

    #[test]
    fn reduce_signed() {
        let m = Modulus::new(5).unwrap();
        assert_eq!(m.reduce(7), 2);
        assert_eq!(m.reduce(-1), 4);
        assert_eq!(m.reduce(-10), 0);
        assert_eq!(m.reduce(i64::MIN), m.reduce(i64::MIN % 5));
    }

    #[test]
    fn field_ops() {
        let m = Modulus::new(7).unwrap();
        assert_eq!(m.add(5, 4), 2);
        assert_eq!(m.sub(2, 5), 4);
        assert_eq!(m.neg(3), 4);
        assert_eq!(m.neg(0), 0);
        assert_eq!(m.mul(3, 5), 1);
        assert_eq!(m.pow(3, 6), 1); // Fermat
        assert_eq!(m.pow(3, 0), 1);
    }

    #[test]
    fn ops_do_not_overflow_large_modulus() {
        let p = (1u64 << 61) - 1; // Mersenne prime
        let m = Modulus::new_unchecked(p).unwrap();
        assert_eq!(m.add(p - 1, p - 1), p - 2);
        assert_eq!(m.mul(p - 1, p - 1), 1);
        assert_eq!(m.sub(0, p - 1), 1);
    }

    #[test]
    fn inverse_and_failure() {
        let m = Modulus::new(11).unwrap();
        assert_eq!(m.mul(4, m.inverse(4).unwrap()), 1);
        assert_eq!(
            m.inverse(0),
            Err(PolyError::NotInvertible { value: 0, modulus: 11 })
        );

        let composite = Modulus::new_unchecked(9).unwrap();
        assert_eq!(
            composite.inverse(3),
            Err(PolyError::NotInvertible { value: 3, modulus: 9 })
        );
    }

    #[test]
    fn display() {
        let m = Modulus::new(13).unwrap();
        assert_eq!(format!("{}", m), "13");
        assert_eq!(format!("{:?}", m), "Modulus(13)");
    }
}
