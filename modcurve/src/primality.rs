//! Trial division primality test used to vet curve moduli.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

/// Returns `true` if `n` is prime.
///
/// Divides by every odd candidate up to `⌊√n⌋`, so it is only practical for
/// the small moduli this crate is meant to be used with. Values below 2
/// (including zero and negatives) are not prime.
pub fn is_prime(n: &BigInt) -> bool {
    let two = BigInt::from(2);

    if *n < two {
        return false;
    }

    if *n == two {
        return true;
    }

    if n.is_even() {
        return false;
    }

    let limit = n.sqrt();
    let mut divisor = BigInt::from(3);

    while divisor <= limit {
        if (n % &divisor).is_zero() {
            return false;
        }
        divisor += 2u32;
    }

    true
}
