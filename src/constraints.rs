//! Accept/reject evaluation of a candidate against the configured bounds.

use serde::{Deserialize, Serialize};

use crate::statistics::compute_stats;
use crate::types::CombinationStats;

/// An optional inclusive range. A side left as `None` is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bound {
    pub min: Option<u16>,
    pub max: Option<u16>,
}

impl Bound {
    pub fn new(min: Option<u16>, max: Option<u16>) -> Self {
        Bound { min, max }
    }

    pub fn between(min: u16, max: u16) -> Self {
        Bound {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, value: u16) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }
}

/// All filter bounds of a generation request.
///
/// Parity is constrained through the odd count only; the even count is
/// always `size - odd_count`, so a single field keeps the two sides from
/// being specified against each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(default)]
    pub odd: Bound,
    #[serde(default)]
    pub primes: Bound,
    #[serde(default)]
    pub fibonacci: Bound,
    #[serde(default)]
    pub core_zone: Bound,
    #[serde(default)]
    pub multiples_of_three: Bound,
    #[serde(default)]
    pub sum: Bound,
}

/// All bounds are AND-combined; one failing bound rejects the candidate.
pub fn satisfies(stats: &CombinationStats, bounds: &Bounds) -> bool {
    bounds.odd.contains(stats.odd_count as u16)
        && bounds.primes.contains(stats.prime_count as u16)
        && bounds.fibonacci.contains(stats.fibonacci_count as u16)
        && bounds.core_zone.contains(stats.core_count as u16)
        && bounds
            .multiples_of_three
            .contains(stats.multiple_of_three_count as u16)
        && bounds.sum.contains(stats.sum)
}

/// Convenience wrapper computing the statistics first.
pub fn evaluate(numbers: &[u8], bounds: &Bounds) -> bool {
    satisfies(&compute_stats(numbers), bounds)
}
