use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constraints::Bounds;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 25;
pub const MIN_COMBINATION_SIZE: usize = 15;
pub const MAX_COMBINATION_SIZE: usize = 20;
/// Official Lotofácil draws always contain 15 numbers.
pub const DRAW_SIZE: usize = 15;

/// Aggregate counts over one combination, computed once at creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationStats {
    pub even_count: u8,
    pub odd_count: u8,
    pub prime_count: u8,
    pub fibonacci_count: u8,
    pub core_count: u8,
    pub frame_count: u8,
    pub multiple_of_three_count: u8,
    pub sum: u16,
}

/// Outcome of checking a combination against one official draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub match_count: u8,
    pub draw_id: i64,
}

/// One "jogo": a sorted set of distinct numbers in 1..=25 plus its
/// derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub numbers: Vec<u8>,
    pub stats: CombinationStats,
    pub created_at: DateTime<Utc>,
    pub is_favorite: bool,
    pub check_result: Option<CheckResult>,
}

impl Combination {
    /// Sorts the numbers ascending and derives the statistics. The caller
    /// is responsible for distinctness and range.
    pub fn new(mut numbers: Vec<u8>) -> Self {
        numbers.sort_unstable();
        let stats = crate::statistics::compute_stats(&numbers);
        Combination {
            numbers,
            stats,
            created_at: Utc::now(),
            is_favorite: false,
            check_result: None,
        }
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.is_favorite = favorite;
        self
    }

    pub fn with_check_result(mut self, match_count: u8, draw_id: i64) -> Self {
        self.check_result = Some(CheckResult {
            match_count,
            draw_id,
        });
        self
    }
}

/// Prize payouts per match tier of one official draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PrizePayouts {
    pub prize_11: f64,
    pub prize_12: f64,
    pub prize_13: f64,
    pub prize_14: f64,
    pub prize_15: f64,
}

/// One official drawing, identified by its contest number. Immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficialDraw {
    pub contest_id: i64,
    pub draw_date: String,
    pub numbers: Vec<u8>,
    pub payouts: PrizePayouts,
}

fn default_retry_multiplier() -> usize {
    100
}

/// Parameters for one generation run. Constructed per request, validated
/// by the generator, then discarded; only the resulting combinations
/// persist. Also serialized as the user's saved default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub target_count: usize,
    pub combination_size: usize,
    #[serde(default)]
    pub fixed_numbers: Vec<u8>,
    #[serde(default)]
    pub excluded_numbers: Vec<u8>,
    #[serde(default)]
    pub bounds: Bounds,
    /// The retry budget is `target_count * retry_multiplier` attempts.
    #[serde(default = "default_retry_multiplier")]
    pub retry_multiplier: usize,
    /// Fixed seed for reproducible runs; fresh entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            target_count: 5,
            combination_size: MIN_COMBINATION_SIZE,
            fixed_numbers: Vec::new(),
            excluded_numbers: Vec::new(),
            bounds: Bounds::default(),
            retry_multiplier: default_retry_multiplier(),
            seed: None,
        }
    }
}

/// A persisted combination as stored in the `combinations` table.
#[derive(Debug, Clone, Serialize)]
pub struct CombinationRow {
    pub id: i64,
    pub numbers: String,
    pub even_count: u8,
    pub odd_count: u8,
    pub prime_count: u8,
    pub fibonacci_count: u8,
    pub core_count: u8,
    pub frame_count: u8,
    pub multiple_of_three_count: u8,
    pub sum: u16,
    pub is_favorite: bool,
    pub match_count: Option<u8>,
    pub checked_draw_id: Option<i64>,
    pub created_at: String,
}

impl CombinationRow {
    pub fn numbers_vec(&self) -> Vec<u8> {
        parse_numbers(&self.numbers)
    }
}

pub fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn parse_numbers(text: &str) -> Vec<u8> {
    text.split(',')
        .filter_map(|part| part.trim().parse::<u8>().ok())
        .collect()
}
