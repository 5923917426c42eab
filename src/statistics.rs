//! Single-pass aggregation of a combination's statistics.

use crate::classifier;
use crate::types::CombinationStats;

/// Classifies every number once and accumulates the counts. Pure and
/// deterministic; expects a sorted slice of distinct numbers in 1..=25.
pub fn compute_stats(numbers: &[u8]) -> CombinationStats {
    let mut stats = CombinationStats::default();
    for &n in numbers {
        if n % 2 == 0 {
            stats.even_count += 1;
        } else {
            stats.odd_count += 1;
        }
        if classifier::is_prime(n) {
            stats.prime_count += 1;
        }
        if classifier::is_fibonacci(n) {
            stats.fibonacci_count += 1;
        }
        if classifier::is_core_zone(n) {
            stats.core_count += 1;
        } else {
            stats.frame_count += 1;
        }
        if classifier::is_multiple_of_three(n) {
            stats.multiple_of_three_count += 1;
        }
        stats.sum += n as u16;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_for_first_fifteen_numbers() {
        let numbers: Vec<u8> = (1..=15).collect();
        let stats = compute_stats(&numbers);
        assert_eq!(stats.even_count, 7);
        assert_eq!(stats.odd_count, 8);
        assert_eq!(stats.prime_count, 6); // 2, 3, 5, 7, 11, 13
        assert_eq!(stats.fibonacci_count, 6); // 1, 2, 3, 5, 8, 13
        assert_eq!(stats.core_count, 9); // 7..=15
        assert_eq!(stats.frame_count, 6); // 1..=6
        assert_eq!(stats.multiple_of_three_count, 5); // 3, 6, 9, 12, 15
        assert_eq!(stats.sum, 120);
    }

    #[test]
    fn partitions_cover_the_whole_combination() {
        let numbers = vec![1, 4, 7, 9, 11, 14, 15, 16, 18, 19, 20, 21, 23, 24, 25];
        let stats = compute_stats(&numbers);
        assert_eq!(stats.even_count + stats.odd_count, 15);
        assert_eq!(stats.core_count + stats.frame_count, 15);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        assert_eq!(compute_stats(&[]), CombinationStats::default());
    }
}
