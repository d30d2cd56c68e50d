//! Exact arithmetic on polynomials over prime fields GF(p) and Rabin's
//! irreducibility test.
//!
//! ```
//! use gfpoly::{Modulus, Poly};
//!
//! let p3 = Modulus::new(3).unwrap();
//! let f = Poly::new(&[1, 0, 1], p3); // x^2 + 1
//!
//! assert_eq!(f.to_string(), "x^2 + 1");
//! assert!(f.is_irreducible().unwrap());
//! ```

pub mod cli;
pub mod structures;
pub mod utils;

pub use structures::modulus::{Modulus, ModulusError};
pub use structures::poly::{Dense, Poly, PolyError};
#[cfg(feature = "rand")]
pub use structures::search::random_irreducible;
pub use structures::search::{find_irreducible, monic_irreducibles, MonicIrreducibles};
pub use utils::{int_pow, is_prime, mod_inverse, prime_divisors};
