use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use log::{debug, trace};

use crate::structures::modulus::Modulus;
use crate::utils::{int_pow, prime_divisors};

/// Error type for polynomial arithmetic over GF(p).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    /// A modular inverse was requested for a non-unit.
    ///
    /// Either `value ≡ 0` or the modulus is not prime.
    NotInvertible { value: u64, modulus: u64 },
    /// Division by the zero polynomial.
    DivisionByZeroPolynomial,
    /// The operands live over different fields.
    ModulusMismatch { left: u64, right: u64 },
    /// `base^exponent` does not fit in a `u64`.
    Overflow { base: u64, exponent: u64 },
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::NotInvertible { value, modulus } => {
                write!(f, "{} is not invertible modulo {}", value, modulus)
            }
            PolyError::DivisionByZeroPolynomial => write!(f, "division by zero polynomial"),
            PolyError::ModulusMismatch { left, right } => {
                write!(f, "modulus mismatch: {} vs {}", left, right)
            }
            PolyError::Overflow { base, exponent } => {
                write!(f, "{}^{} does not fit in 64 bits", base, exponent)
            }
        }
    }
}

impl std::error::Error for PolyError {}

/// Polynomial over the prime field GF(p).
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`, reduced into `[0, p-1]`.
///
/// The coefficient vector is never empty and its last entry is non-zero,
/// except for the zero polynomial, which is stored as the single
/// coefficient `0` and has degree 0.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PolyRepr")
)]
pub struct Poly {
    modulus: Modulus,
    coeffs: Vec<u64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PolyRepr {
    modulus: Modulus,
    coeffs: Vec<u64>,
}

#[cfg(feature = "serde")]
impl From<PolyRepr> for Poly {
    fn from(repr: PolyRepr) -> Self {
        Self::from_residues(repr.coeffs, repr.modulus)
    }
}

impl Poly {
    /// Create a polynomial from signed coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`. Coefficients are reduced
    /// modulo `p` (negative values wrap to `p - |c| mod p`) and trailing
    /// zeros are removed.
    ///
    /// # Example
    ///
    /// ```
    /// use gfpoly::{Modulus, Poly};
    ///
    /// let p5 = Modulus::new(5).unwrap();
    ///
    /// // x^2 - x + 7 over GF(5)
    /// let f = Poly::new(&[7, -1, 1, 0, 10], p5);
    /// assert_eq!(f.coefficients(), &[2, 4, 1]);
    /// assert_eq!(f.degree(), 2);
    /// ```
    pub fn new(coeffs: &[i64], modulus: Modulus) -> Self {
        let coeffs = coeffs.iter().map(|&c| modulus.reduce(c)).collect();
        Self::from_residues(coeffs, modulus)
    }

    /// Create a polynomial from unsigned coefficients in ascending order.
    pub fn from_residues(coeffs: Vec<u64>, modulus: Modulus) -> Self {
        Self { modulus, coeffs }.normalized()
    }

    /// Create the zero polynomial.
    pub fn zero(modulus: Modulus) -> Self {
        Self {
            modulus,
            coeffs: vec![0],
        }
    }

    /// Create the constant polynomial `1`.
    pub fn one(modulus: Modulus) -> Self {
        Self {
            modulus,
            coeffs: vec![1],
        }
    }

    /// Create a constant polynomial.
    pub fn constant(c: u64, modulus: Modulus) -> Self {
        Self::from_residues(vec![c], modulus)
    }

    /// Create the polynomial `x`.
    pub fn x(modulus: Modulus) -> Self {
        Self {
            modulus,
            coeffs: vec![0, 1],
        }
    }

    /// Create a monomial `c * x^n`.
    pub fn monomial(c: u64, n: usize, modulus: Modulus) -> Self {
        let mut coeffs = vec![0; n + 1];
        coeffs[n] = c;
        Self::from_residues(coeffs, modulus)
    }

    /// Reduce every coefficient and strip zero high-degree terms.
    fn normalized(mut self) -> Self {
        let modulus = self.modulus;
        for c in self.coeffs.iter_mut() {
            *c = modulus.reduce_u64(*c);
        }
        while self.coeffs.len() > 1 && self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(0);
        }
        self
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == 0
    }

    /// Get the degree of the polynomial.
    ///
    /// The zero polynomial has degree 0, the same as a non-zero constant;
    /// use [`Poly::is_zero`] to tell them apart.
    ///
    /// # Example
    ///
    /// ```
    /// use gfpoly::{Modulus, Poly};
    ///
    /// let p7 = Modulus::new(7).unwrap();
    /// assert_eq!(Poly::new(&[1, 2, 3], p7).degree(), 2);
    /// assert_eq!(Poly::zero(p7).degree(), 0);
    /// ```
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Get the leading coefficient (0 for the zero polynomial).
    pub fn leading_coeff(&self) -> u64 {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> u64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Get a slice of all coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[u64] {
        &self.coeffs
    }

    /// The modulus of the coefficient field.
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Check whether the leading coefficient is 1.
    pub fn is_monic(&self) -> bool {
        self.leading_coeff() == 1
    }

    /// Evaluate the polynomial at a point using Horner's method.
    pub fn eval(&self, x: u64) -> u64 {
        let m = self.modulus;
        let x = m.reduce_u64(x);
        self.coeffs
            .iter()
            .rev()
            .fold(0, |acc, &c| m.add(m.mul(acc, x), c))
    }

    /// Multiply every coefficient by the scalar `c`.
    pub fn scale(&self, c: u64) -> Self {
        let m = self.modulus;
        let coeffs = self.coeffs.iter().map(|&a| m.mul(a, c)).collect();
        Self::from_residues(coeffs, m)
    }

    /// Make the polynomial monic (leading coefficient = 1).
    ///
    /// The zero polynomial is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::NotInvertible` if the leading coefficient has no
    /// inverse, which only happens for a composite modulus.
    pub fn monic(&self) -> Result<Self, PolyError> {
        if self.is_zero() {
            return Ok(self.clone());
        }
        let inv = self.modulus.inverse(self.leading_coeff())?;
        Ok(self.scale(inv))
    }

    /// Returns a view that renders every coefficient position.
    ///
    /// The output lists terms in descending degree as `<c>x^<d>`, including
    /// zero coefficients, with a bare constant term:
    ///
    /// ```
    /// use gfpoly::{Modulus, Poly};
    ///
    /// let f = Poly::new(&[1, 0, 1], Modulus::new(3).unwrap());
    /// assert_eq!(f.dense().to_string(), "1x^2 + 0x^1 + 1");
    /// assert_eq!(f.to_string(), "x^2 + 1");
    /// ```
    pub fn dense(&self) -> Dense<'_> {
        Dense(self)
    }

    fn check_modulus(&self, other: &Self) -> Result<(), PolyError> {
        if self.modulus != other.modulus {
            return Err(PolyError::ModulusMismatch {
                left: self.modulus.value(),
                right: other.modulus.value(),
            });
        }
        Ok(())
    }

    /// Panics if the moduli differ, in both debug and release builds.
    fn assert_same_modulus(&self, other: &Self) {
        assert!(
            self.modulus == other.modulus,
            "polynomials must have the same modulus ({} vs {})",
            self.modulus,
            other.modulus
        );
    }

    /* ---- Arithmetic ---- */

    fn add_coeffs(&self, rhs: &Self) -> Self {
        let m = self.modulus;
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| m.add(self.coeff(i), rhs.coeff(i))).collect();
        Self::from_residues(coeffs, m)
    }

    fn sub_coeffs(&self, rhs: &Self) -> Self {
        let m = self.modulus;
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| m.sub(self.coeff(i), rhs.coeff(i))).collect();
        Self::from_residues(coeffs, m)
    }

    /// Naive O(n*m) convolution.
    fn mul_coeffs(&self, rhs: &Self) -> Self {
        let m = self.modulus;
        if self.is_zero() || rhs.is_zero() {
            return Self::zero(m);
        }

        let mut coeffs = vec![0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = m.add(coeffs[i + j], m.mul(a, b));
            }
        }

        Self::from_residues(coeffs, m)
    }

    /// Addition that reports a modulus mismatch instead of panicking.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, PolyError> {
        self.check_modulus(rhs)?;
        Ok(self.add_coeffs(rhs))
    }

    /// Subtraction that reports a modulus mismatch instead of panicking.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, PolyError> {
        self.check_modulus(rhs)?;
        Ok(self.sub_coeffs(rhs))
    }

    /// Multiplication that reports a modulus mismatch instead of panicking.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, PolyError> {
        self.check_modulus(rhs)?;
        Ok(self.mul_coeffs(rhs))
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` where `r` is zero
    /// or `deg(r) < deg(divisor)`.
    ///
    /// # Errors
    ///
    /// - `PolyError::DivisionByZeroPolynomial` if the divisor is zero.
    /// - `PolyError::ModulusMismatch` if the operands have different moduli.
    /// - `PolyError::NotInvertible` if the divisor's leading coefficient is
    ///   not a unit (composite modulus).
    ///
    /// # Example
    ///
    /// ```
    /// use gfpoly::{Modulus, Poly};
    ///
    /// let p5 = Modulus::new(5).unwrap();
    ///
    /// // x^3 + 1 = (x + 1)(x^2 - x + 1)
    /// let a = Poly::new(&[1, 0, 0, 1], p5);
    /// let d = Poly::new(&[1, 1], p5);
    /// let (q, r) = a.div_rem(&d).unwrap();
    ///
    /// assert_eq!(q.coefficients(), &[1, 4, 1]);
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        if divisor.is_zero() {
            return Err(PolyError::DivisionByZeroPolynomial);
        }
        self.check_modulus(divisor)?;

        let m = self.modulus;
        let divisor_deg = divisor.degree();
        let lc_inv = m.inverse(divisor.leading_coeff())?;

        if self.is_zero() || self.degree() < divisor_deg {
            return Ok((Self::zero(m), self.clone()));
        }

        let mut quotient = vec![0; self.degree() - divisor_deg + 1];
        let mut remainder = self.clone();

        while !remainder.is_zero() && remainder.degree() >= divisor_deg {
            let shift = remainder.degree() - divisor_deg;
            let coef = m.mul(remainder.leading_coeff(), lc_inv);
            quotient[shift] = coef;

            // remainder -= coef * x^shift * divisor
            let mut coeffs = remainder.coeffs;
            for (i, &d) in divisor.coeffs.iter().enumerate() {
                coeffs[i + shift] = m.sub(coeffs[i + shift], m.mul(coef, d));
            }
            remainder = Self { modulus: m, coeffs }.normalized();
        }

        Ok((Self::from_residues(quotient, m), remainder))
    }

    /// Compute the remainder of division.
    pub fn rem(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Greatest common divisor by Euclid's algorithm.
    ///
    /// The result is **not** made monic: its leading coefficient is whatever
    /// the last non-zero remainder had. Call [`Poly::monic`] on the result
    /// when a canonical gcd is needed. `gcd(0, 0)` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use gfpoly::{Modulus, Poly};
    ///
    /// let p7 = Modulus::new(7).unwrap();
    ///
    /// // gcd((x+1)(x+2), (x+2)(x+3)) is a multiple of x + 2
    /// let a = Poly::new(&[2, 3, 1], p7);
    /// let b = Poly::new(&[6, 5, 1], p7);
    /// let g = Poly::gcd(&a, &b).unwrap();
    ///
    /// assert_eq!(g.degree(), 1);
    /// assert_eq!(g.monic().unwrap(), Poly::new(&[2, 1], p7));
    /// ```
    pub fn gcd(a: &Self, b: &Self) -> Result<Self, PolyError> {
        a.check_modulus(b)?;

        let mut a = a.clone();
        let mut b = b.clone();
        while !b.is_zero() {
            let r = a.rem(&b)?;
            a = b;
            b = r;
        }
        Ok(a)
    }

    /// Compute `base^exp mod self` using square-and-multiply.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::DivisionByZeroPolynomial` if `self` is zero, and
    /// propagates the errors of [`Poly::div_rem`].
    pub fn pow_mod(&self, base: &Self, exp: u64) -> Result<Self, PolyError> {
        if self.is_zero() {
            return Err(PolyError::DivisionByZeroPolynomial);
        }
        self.check_modulus(base)?;

        let mut result = Self::one(self.modulus);
        let mut b = base.clone();
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = result.mul_coeffs(&b).rem(self)?;
            }
            b = b.mul_coeffs(&b).rem(self)?;
            e >>= 1;
        }

        Ok(result)
    }

    /// Compute `x^exp mod self` using repeated squaring.
    ///
    /// `self` is expected to have degree at least 1. For `exp == 0` the
    /// result is the constant `1`.
    ///
    /// # Example
    ///
    /// ```
    /// use gfpoly::{Modulus, Poly};
    ///
    /// let p17 = Modulus::new(17).unwrap();
    ///
    /// // x^3 mod (x^2 + 1) = -x
    /// let f = Poly::new(&[1, 0, 1], p17);
    /// assert_eq!(f.pow_x(3).unwrap(), Poly::new(&[0, -1], p17));
    /// ```
    pub fn pow_x(&self, exp: u64) -> Result<Self, PolyError> {
        self.pow_mod(&Self::x(self.modulus), exp)
    }

    /// Compute `x^(p^k) mod self`.
    ///
    /// When `p^k` fits in a `u64` this is [`Poly::pow_x`] with that exponent.
    /// Otherwise `x` is raised to the `p`-th power `k` times, which gives the
    /// same residue without forming `p^k`.
    pub fn pow_x_frobenius(&self, k: u64) -> Result<Self, PolyError> {
        let p = self.modulus.value();
        if let Some(exp) = int_pow(p, k) {
            return self.pow_x(exp);
        }

        debug!("{}^{} overflows u64, iterating the Frobenius map instead", p, k);
        let mut h = Self::x(self.modulus).rem(self)?;
        for _ in 0..k {
            h = self.pow_mod(&h, p)?;
        }
        Ok(h)
    }

    /// Test if this polynomial is irreducible over GF(p) using Rabin's test.
    ///
    /// A polynomial f(x) of degree n ≥ 1 over GF(p) is irreducible if and only if:
    /// 1. `x^{p^n} ≡ x (mod f(x))`
    /// 2. `gcd(x^{p^{n/q}} - x, f(x)) = 1` for each prime divisor q of n
    ///
    /// Returns `false` for constant and zero polynomials. Every polynomial of
    /// degree 1 is irreducible: the difference in step 1 is reduced mod f, so
    /// `x` is compared as a residue. Comparing against an unreduced `x` would
    /// report all linear polynomials as reducible.
    ///
    /// # Example
    ///
    /// ```
    /// use gfpoly::{Modulus, Poly};
    ///
    /// let p2 = Modulus::new(2).unwrap();
    ///
    /// // x + 1 is linear, hence irreducible
    /// assert!(Poly::new(&[1, 1], p2).is_irreducible().unwrap());
    ///
    /// // x^2 + x + 1 is irreducible over GF(2)
    /// assert!(Poly::new(&[1, 1, 1], p2).is_irreducible().unwrap());
    ///
    /// // x^2 + 1 = (x + 1)^2 over GF(2)
    /// assert!(!Poly::new(&[1, 0, 1], p2).is_irreducible().unwrap());
    /// ```
    pub fn is_irreducible(&self) -> Result<bool, PolyError> {
        let n = self.degree();
        if n == 0 {
            trace!("{} has degree 0, not irreducible", self);
            return Ok(false);
        }

        let n = n as u64;
        let x = Self::x(self.modulus);

        // Reduce once more so that x itself is taken mod f when deg f = 1.
        let t = self.pow_x_frobenius(n)?.sub_coeffs(&x).rem(self)?;
        if !t.is_zero() {
            debug!("x^(p^{}) - x = {} (mod {}), reducible", n, t, self);
            return Ok(false);
        }

        for q in prime_divisors(n) {
            let h = self.pow_x_frobenius(n / q)?.sub_coeffs(&x);
            let g = Self::gcd(self, &h)?;
            trace!("q = {}: gcd(f, x^(p^{}) - x) = {}", q, n / q, g);
            if g.degree() > 0 {
                debug!("{} shares a factor of degree {} with x^(p^{}) - x", self, g.degree(), n / q);
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Test if this polynomial is primitive over GF(p).
    ///
    /// A polynomial f(x) of degree n is primitive if it is irreducible and
    /// x has multiplicative order exactly `p^n - 1` modulo f(x).
    ///
    /// # Errors
    ///
    /// Returns `PolyError::Overflow` if `p^n` does not fit in a `u64`.
    ///
    /// # Example
    ///
    /// ```
    /// use gfpoly::{Modulus, Poly};
    ///
    /// let p3 = Modulus::new(3).unwrap();
    ///
    /// // x^2 + 1 is irreducible over GF(3), but x has order 4, not 8
    /// let f = Poly::new(&[1, 0, 1], p3);
    /// assert!(f.is_irreducible().unwrap());
    /// assert!(!f.is_primitive().unwrap());
    ///
    /// // x^2 + 2x + 2 is primitive
    /// assert!(Poly::new(&[2, 2, 1], p3).is_primitive().unwrap());
    /// ```
    pub fn is_primitive(&self) -> Result<bool, PolyError> {
        if !self.is_irreducible()? {
            return Ok(false);
        }

        let p = self.modulus.value();
        let n = self.degree() as u64;
        let field_size = int_pow(p, n).ok_or(PolyError::Overflow { base: p, exponent: n })?;
        let order = field_size - 1;
        let one = Self::one(self.modulus);

        if self.pow_x(order)? != one {
            return Ok(false);
        }

        for q in prime_divisors(order) {
            if self.pow_x(order / q)? == one {
                trace!("x^({}/{}) = 1 (mod {}), not primitive", order, q, self);
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/* ---- Arithmetic operators ---- */

impl Add for Poly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_modulus(&rhs);
        self.add_coeffs(&rhs)
    }
}

impl Add<&Poly> for Poly {
    type Output = Self;

    fn add(self, rhs: &Poly) -> Self::Output {
        self.assert_same_modulus(rhs);
        self.add_coeffs(rhs)
    }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_modulus(rhs);
        self.add_coeffs(rhs)
    }
}

impl Neg for Poly {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let m = self.modulus;
        let coeffs = self.coeffs.into_iter().map(|c| m.neg(c)).collect();
        Self::from_residues(coeffs, m)
    }
}

impl Sub for Poly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.assert_same_modulus(&rhs);
        self.sub_coeffs(&rhs)
    }
}

impl Sub<&Poly> for Poly {
    type Output = Self;

    fn sub(self, rhs: &Poly) -> Self::Output {
        self.assert_same_modulus(rhs);
        self.sub_coeffs(rhs)
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: Self) -> Self::Output {
        self.assert_same_modulus(rhs);
        self.sub_coeffs(rhs)
    }
}

impl Mul for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.assert_same_modulus(&rhs);
        self.mul_coeffs(&rhs)
    }
}

impl Mul<&Poly> for Poly {
    type Output = Self;

    fn mul(self, rhs: &Poly) -> Self::Output {
        self.assert_same_modulus(rhs);
        self.mul_coeffs(rhs)
    }
}

impl Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: Self) -> Self::Output {
        self.assert_same_modulus(rhs);
        self.mul_coeffs(rhs)
    }
}

/// Scalar multiplication: polynomial * field element
impl Mul<u64> for Poly {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self::Output {
        self.scale(rhs)
    }
}

/// Renders terms from the highest degree down, skipping zero terms,
/// e.g. `3x^4 + x^2 + 2x + 1`. The zero polynomial renders as `0`.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate().rev() {
            if coeff == 0 {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{}", coeff)?,
                1 if coeff == 1 => write!(f, "x")?,
                1 => write!(f, "{}x", coeff)?,
                _ if coeff == 1 => write!(f, "x^{}", i)?,
                _ => write!(f, "{}x^{}", coeff, i)?,
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self, self.modulus)
    }
}

/// Dense rendering of a [`Poly`], see [`Poly::dense`].
pub struct Dense<'a>(&'a Poly);

impl fmt::Display for Dense<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &coeff) in self.0.coeffs.iter().enumerate().rev() {
            write!(f, "{}", coeff)?;
            if i > 0 {
                write!(f, "x^{} + ", i)?;
            }
        }
        Ok(())
    }
}
