/// Returns every odd prime in [3, bound], ascending.
/// The exponent 2 is deliberately excluded; it is injected as a constant
/// at aggregation time so the rest of the pipeline only ever sees odd
/// candidates.
pub fn odd_primes_up_to(bound: u32) -> Vec<u32> {
    (3..=bound).step_by(2).filter(|&n| is_prime(n)).collect()
}

/// Trial division by odd divisors up to ⌊√n⌋. Callers only pass odd n >= 3.
fn is_prime(n: u32) -> bool {
    let max = (n as f64).sqrt().floor() as u32;
    let mut divisor = 3;

    while divisor <= max {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::odd_primes_up_to;

    #[test]
    fn bound_below_first_odd_prime_yields_nothing() {
        assert_eq!(odd_primes_up_to(2), Vec::<u32>::new());
    }

    #[test]
    fn bound_is_inclusive() {
        assert_eq!(odd_primes_up_to(3), vec![3]);
    }

    #[test]
    fn small_bounds() {
        assert_eq!(odd_primes_up_to(10), vec![3, 5, 7]);
        assert_eq!(odd_primes_up_to(20), vec![3, 5, 7, 11, 13, 17, 19]);
    }

    #[test]
    fn odd_primes_up_to_one_hundred() {
        assert_eq!(
            odd_primes_up_to(100),
            vec![
                3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79,
                83, 89, 97
            ]
        );
    }

    #[test]
    fn squares_of_primes_are_rejected() {
        let primes = odd_primes_up_to(50);
        assert!(!primes.contains(&9));
        assert!(!primes.contains(&25));
        assert!(!primes.contains(&49));
    }
}
