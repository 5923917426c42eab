//! Match counting against official draws.

use serde::{Deserialize, Serialize};

use crate::types::{OfficialDraw, PrizePayouts};

/// Lotofácil pays out from 11 matches up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrizeTier {
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
}

impl PrizeTier {
    pub fn payout(&self, payouts: &PrizePayouts) -> f64 {
        match self {
            PrizeTier::Eleven => payouts.prize_11,
            PrizeTier::Twelve => payouts.prize_12,
            PrizeTier::Thirteen => payouts.prize_13,
            PrizeTier::Fourteen => payouts.prize_14,
            PrizeTier::Fifteen => payouts.prize_15,
        }
    }
}

/// Size of the intersection between a combination and the draw.
pub fn count_matches(numbers: &[u8], draw: &OfficialDraw) -> u8 {
    numbers.iter().filter(|n| draw.numbers.contains(n)).count() as u8
}

pub fn classify_prize_tier(match_count: u8) -> Option<PrizeTier> {
    match match_count {
        11 => Some(PrizeTier::Eleven),
        12 => Some(PrizeTier::Twelve),
        13 => Some(PrizeTier::Thirteen),
        14 => Some(PrizeTier::Fourteen),
        15 => Some(PrizeTier::Fifteen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw() -> OfficialDraw {
        OfficialDraw {
            contest_id: 3000,
            draw_date: "2024-01-10".to_string(),
            numbers: (1..=15).collect(),
            payouts: PrizePayouts {
                prize_11: 6.0,
                prize_12: 12.0,
                prize_13: 30.0,
                prize_14: 1500.0,
                prize_15: 500_000.0,
            },
        }
    }

    #[test]
    fn counts_the_intersection() {
        let draw = draw();
        let full_match: Vec<u8> = (1..=15).collect();
        assert_eq!(count_matches(&full_match, &draw), 15);

        let partial: Vec<u8> = (11..=25).collect();
        assert_eq!(count_matches(&partial, &draw), 5);
    }

    #[test]
    fn no_prize_below_eleven() {
        for matches in 0..=10 {
            assert_eq!(classify_prize_tier(matches), None);
        }
    }

    #[test]
    fn tiers_from_eleven_to_fifteen() {
        assert_eq!(classify_prize_tier(11), Some(PrizeTier::Eleven));
        assert_eq!(classify_prize_tier(13), Some(PrizeTier::Thirteen));
        assert_eq!(classify_prize_tier(15), Some(PrizeTier::Fifteen));
    }

    #[test]
    fn tier_payout_lookup() {
        let draw = draw();
        let tier = classify_prize_tier(14).expect("14 matches pays out");
        assert_eq!(tier.payout(&draw.payouts), 1500.0);
    }
}
