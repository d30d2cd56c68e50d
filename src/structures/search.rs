//! Searching for irreducible polynomials.
//!
//! The search walks monic candidates of a fixed degree and keeps the ones
//! that pass [`Poly::is_irreducible`].

use log::{debug, trace};

use crate::structures::modulus::Modulus;
use crate::structures::poly::{Poly, PolyError};

/// Iterator over the monic irreducible polynomials of one degree.
///
/// Candidates are visited in lexicographic order of their coefficient
/// vectors with the constant term varying fastest. Created by
/// [`monic_irreducibles`].
#[derive(Clone, Debug)]
pub struct MonicIrreducibles {
    modulus: Modulus,
    /// Coefficients of `x^0 .. x^(n-1)` of the next candidate.
    lower: Option<Vec<u64>>,
}

/// Enumerate all monic irreducible polynomials of `degree` over GF(p).
///
/// Yields nothing for degree 0. With a composite modulus the irreducibility
/// test may fail; the error is yielded once and the iterator then stops.
///
/// # Example
///
/// ```
/// use gfpoly::{monic_irreducibles, Modulus};
///
/// let p2 = Modulus::new(2).unwrap();
/// let quartics: Vec<_> = monic_irreducibles(p2, 4).collect::<Result<_, _>>().unwrap();
///
/// // x^4 + x + 1, x^4 + x^3 + 1, x^4 + x^3 + x^2 + x + 1
/// assert_eq!(quartics.len(), 3);
/// ```
pub fn monic_irreducibles(modulus: Modulus, degree: usize) -> MonicIrreducibles {
    MonicIrreducibles {
        modulus,
        lower: (degree > 0).then(|| vec![0; degree]),
    }
}

/// Step the lower coefficients like an odometer. Returns `false` on wrap-around.
fn advance(lower: &mut [u64], p: u64) -> bool {
    for c in lower.iter_mut() {
        *c += 1;
        if *c < p {
            return true;
        }
        *c = 0;
    }
    false
}

impl Iterator for MonicIrreducibles {
    type Item = Result<Poly, PolyError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let lower = self.lower.as_mut()?;

            let mut coeffs = lower.clone();
            coeffs.push(1);
            let candidate = Poly::from_residues(coeffs, self.modulus);

            if !advance(lower, self.modulus.value()) {
                self.lower = None;
            }

            match candidate.is_irreducible() {
                Ok(true) => return Some(Ok(candidate)),
                Ok(false) => trace!("{} is reducible", candidate),
                Err(e) => {
                    self.lower = None;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Returns the first monic irreducible polynomial of the given degree.
///
/// Returns `Ok(None)` for degree 0. Over a prime field an irreducible
/// polynomial exists for every positive degree.
///
/// # Example
///
/// ```
/// use gfpoly::{find_irreducible, Modulus};
///
/// let p5 = Modulus::new(5).unwrap();
/// let f = find_irreducible(p5, 2).unwrap().unwrap();
///
/// assert_eq!(f.to_string(), "x^2 + 2");
/// assert!(f.is_irreducible().unwrap());
/// ```
pub fn find_irreducible(modulus: Modulus, degree: usize) -> Result<Option<Poly>, PolyError> {
    let found = monic_irreducibles(modulus, degree).next().transpose()?;
    if let Some(f) = &found {
        debug!("first monic irreducible of degree {} over GF({}): {}", degree, modulus, f);
    }
    Ok(found)
}

/// Generate a random monic irreducible polynomial of the given degree.
///
/// Uses rejection sampling: generate random monic polynomials until
/// finding an irreducible one.
///
/// # Panics
///
/// Panics if degree is 0.
#[cfg(feature = "rand")]
pub fn random_irreducible<R: rand::Rng>(
    rng: &mut R,
    modulus: Modulus,
    degree: usize,
) -> Result<Poly, PolyError> {
    assert!(degree > 0, "degree must be positive");

    let p = modulus.value();
    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let mut coeffs: Vec<u64> = (0..degree).map(|_| rng.gen_range(0..p)).collect();
        coeffs.push(1); // monic

        let f = Poly::from_residues(coeffs, modulus);
        if f.is_irreducible()? {
            debug!("found {} after {} attempts", f, attempts);
            return Ok(f);
        }
    }
}
