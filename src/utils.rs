/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating
/// moduli at startup, not for high-performance primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Multiplicative inverse of `a` modulo `p` by the extended Euclidean algorithm.
///
/// Returns the representative in `[0, p-1]`, or `None` when `gcd(a, p) != 1`
/// (in particular for `a ≡ 0`).
///
/// # Example
///
/// ```
/// use gfpoly::mod_inverse;
///
/// assert_eq!(mod_inverse(3, 7), Some(5)); // 3 * 5 = 15 ≡ 1 (mod 7)
/// assert_eq!(mod_inverse(4, 8), None);
/// ```
pub fn mod_inverse(a: u64, p: u64) -> Option<u64> {
    if p == 0 {
        return None;
    }

    let mut r0 = i128::from(a % p);
    let mut r1 = i128::from(p);
    let mut s0: i128 = 1;
    let mut s1: i128 = 0;

    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (s0, s1) = (s1, s0 - q * s1);
    }

    if r0 != 1 {
        return None;
    }

    let p = i128::from(p);
    // `rem_euclid` lands in [0, p), which fits back into u64.
    Some(s0.rem_euclid(p) as u64)
}

/// Plain integer power `base^exponent` by repeated multiplication.
///
/// Returns `None` instead of wrapping when the result does not fit in a `u64`.
pub fn int_pow(base: u64, exponent: u64) -> Option<u64> {
    let mut result: u64 = 1;
    for _ in 0..exponent {
        result = result.checked_mul(base)?;
    }
    Some(result)
}

/// Distinct prime divisors of `n` in ascending order, by trial division.
///
/// `0` and `1` have no prime divisors.
pub fn prime_divisors(mut n: u64) -> Vec<u64> {
    let mut primes = Vec::new();
    if n < 2 {
        return primes;
    }

    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            primes.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }

    if n > 1 {
        primes.push(n);
    }

    primes
}
