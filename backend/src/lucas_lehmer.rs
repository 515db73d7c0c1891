use rug::ops::Pow;
use rug::Integer;

/// Lucas-Lehmer test: 2^p - 1 is prime iff s == 0 after iterating
/// s <- (s^2 - 2) mod 2^p - 1 exactly p - 2 times from s = 4.
///
/// Callers must pass a prime p >= 3. The only even prime exponent, 2, is
/// handled as a constant by the aggregator and never reaches this function.
/// Pure and lock-free, so independent workers can call it concurrently.
pub fn is_mersenne_prime(p: u32) -> bool {
    let m = Integer::from(2).pow(p) - 1u32;
    let mut s = Integer::from(4);

    for _ in 2..p {
        s = (s.pow(2) - 2u32) % &m;
    }
    s == 0
}
