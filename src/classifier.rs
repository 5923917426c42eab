//! Number classification for the 1–25 Lotofácil board.
//!
//! All predicates are pure. Inputs outside 1..=25 are rejected by the
//! generator's config validation before they ever reach this module.

/// Primality by trial division up to √n. For the lottery domain this
/// accepts exactly {2, 3, 5, 7, 11, 13, 17, 19, 23}.
pub fn is_prime(n: u8) -> bool {
    if n < 2 {
        return false;
    }
    let mut d: u16 = 2;
    while d * d <= n as u16 {
        if n as u16 % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Fibonacci membership, walking the sequence rather than matching a
/// hardcoded set. Within 1..=25 this accepts {1, 2, 3, 5, 8, 13, 21}.
pub fn is_fibonacci(n: u8) -> bool {
    let n = n as u16;
    let (mut a, mut b) = (1u16, 1u16);
    while b < n {
        let next = a + b;
        a = b;
        b = next;
    }
    n > 0 && b == n
}

/// The "miolo": the center region of the 5×5 board, numbers 7 through 19.
pub fn is_core_zone(n: u8) -> bool {
    (7..=19).contains(&n)
}

/// The "moldura": the border region, everything on the board that is not
/// in the core zone.
pub fn is_frame_zone(n: u8) -> bool {
    (1..=25).contains(&n) && !is_core_zone(n)
}

pub fn is_multiple_of_three(n: u8) -> bool {
    n % 3 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_in_board_range() {
        let primes: Vec<u8> = (1..=25).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23]);
    }

    #[test]
    fn fibonacci_in_board_range() {
        let fibs: Vec<u8> = (1..=25).filter(|&n| is_fibonacci(n)).collect();
        assert_eq!(fibs, vec![1, 2, 3, 5, 8, 13, 21]);
    }

    #[test]
    fn zones_partition_the_board() {
        for n in 1..=25 {
            assert_ne!(is_core_zone(n), is_frame_zone(n), "number {}", n);
        }
        assert_eq!((1..=25).filter(|&n| is_core_zone(n)).count(), 13);
        assert_eq!((1..=25).filter(|&n| is_frame_zone(n)).count(), 12);
    }

    #[test]
    fn multiples_of_three() {
        let multiples: Vec<u8> = (1..=25).filter(|&n| is_multiple_of_three(n)).collect();
        assert_eq!(multiples, vec![3, 6, 9, 12, 15, 18, 21, 24]);
    }

    #[test]
    fn classification_is_stable() {
        for n in 1..=25 {
            assert_eq!(is_prime(n), is_prime(n));
            assert_eq!(is_fibonacci(n), is_fibonacci(n));
            assert_eq!(is_core_zone(n), is_core_zone(n));
            assert_eq!(is_multiple_of_three(n), is_multiple_of_three(n));
        }
    }
}
