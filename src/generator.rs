//! Rejection-sampling generation of constrained combinations.
//!
//! Each attempt builds one candidate from the fixed numbers plus a random
//! fill from the eligible pool, evaluates it against the configured bounds,
//! and keeps it if it is distinct from everything accepted so far. The
//! search stops at the target count or when the retry budget runs out;
//! coming up short is a partial result, not an error.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::constraints;
use crate::statistics::compute_stats;
use crate::types::{
    Combination, GenerationConfig, MAX_COMBINATION_SIZE, MAX_NUMBER, MIN_COMBINATION_SIZE,
    MIN_NUMBER,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("combination size must be between 15 and 20, got {0}")]
    InvalidSize(usize),
    #[error("target count must be greater than zero")]
    InvalidTargetCount,
    #[error("{fixed} fixed numbers do not fit a combination of size {size}")]
    TooManyFixed { fixed: usize, size: usize },
    #[error("only {eligible} numbers remain after exclusions, but {size} are needed")]
    NotEnoughEligible { eligible: usize, size: usize },
    #[error("numbers {overlap:?} are both fixed and excluded")]
    FixedExcludedOverlap { overlap: Vec<u8> },
    #[error("number {0} is outside the 1..=25 board")]
    NumberOutOfRange(u8),
    #[error("generation was cancelled")]
    Cancelled,
}

/// Cooperative cancellation handle, observed at each attempt boundary.
/// A cancelled run discards whatever it had accepted.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Generates up to `config.target_count` distinct combinations. The sole
/// entry point of the core; callers wanting the loop off their own task
/// dispatch it themselves (see `use_cases::GenerationUseCase`).
pub fn generate(config: &GenerationConfig) -> Result<Vec<Combination>, GenerationError> {
    generate_with_cancel(config, &CancelFlag::new())
}

pub fn generate_with_cancel(
    config: &GenerationConfig,
    cancel: &CancelFlag,
) -> Result<Vec<Combination>, GenerationError> {
    let fixed = normalized(&config.fixed_numbers);
    let excluded = normalized(&config.excluded_numbers);
    validate(config, &fixed, &excluded)?;

    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut pool: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER)
        .filter(|n| !fixed.contains(n) && !excluded.contains(n))
        .collect();
    let fill_count = config.combination_size - fixed.len();
    let max_attempts = config.target_count * config.retry_multiplier;

    let mut accepted: Vec<Combination> = Vec::with_capacity(config.target_count);
    let mut seen: HashSet<Vec<u8>> = HashSet::with_capacity(config.target_count);
    let mut attempts = 0usize;

    while accepted.len() < config.target_count && attempts < max_attempts {
        if cancel.is_cancelled() {
            return Err(GenerationError::Cancelled);
        }
        attempts += 1;

        pool.shuffle(&mut rng);
        if pool.len() < fill_count {
            continue;
        }

        let mut numbers: Vec<u8> = fixed.clone();
        numbers.extend_from_slice(&pool[..fill_count]);
        numbers.sort_unstable();

        let stats = compute_stats(&numbers);
        if !constraints::satisfies(&stats, &config.bounds) {
            continue;
        }
        if !seen.insert(numbers.clone()) {
            continue;
        }

        accepted.push(Combination {
            numbers,
            stats,
            created_at: chrono::Utc::now(),
            is_favorite: false,
            check_result: None,
        });
    }

    Ok(accepted)
}

fn normalized(numbers: &[u8]) -> Vec<u8> {
    let mut out = numbers.to_vec();
    out.sort_unstable();
    out.dedup();
    out
}

fn validate(
    config: &GenerationConfig,
    fixed: &[u8],
    excluded: &[u8],
) -> Result<(), GenerationError> {
    if !(MIN_COMBINATION_SIZE..=MAX_COMBINATION_SIZE).contains(&config.combination_size) {
        return Err(GenerationError::InvalidSize(config.combination_size));
    }
    if config.target_count == 0 {
        return Err(GenerationError::InvalidTargetCount);
    }
    if let Some(&n) = fixed
        .iter()
        .chain(excluded.iter())
        .find(|&&n| !(MIN_NUMBER..=MAX_NUMBER).contains(&n))
    {
        return Err(GenerationError::NumberOutOfRange(n));
    }
    if fixed.len() >= config.combination_size {
        return Err(GenerationError::TooManyFixed {
            fixed: fixed.len(),
            size: config.combination_size,
        });
    }
    let eligible = MAX_NUMBER as usize - excluded.len();
    if eligible < config.combination_size {
        return Err(GenerationError::NotEnoughEligible {
            eligible,
            size: config.combination_size,
        });
    }
    let overlap: Vec<u8> = fixed
        .iter()
        .copied()
        .filter(|n| excluded.contains(n))
        .collect();
    if !overlap.is_empty() {
        return Err(GenerationError::FixedExcludedOverlap { overlap });
    }
    Ok(())
}
