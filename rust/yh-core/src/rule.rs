//! Scoring rule variants.
//!
//! Every rule is plain configuration plus a pure `evaluate`. Dispatch is a
//! `match` over the variant; each variant carries its own parameter struct.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hand::{Hand, NUM_DICE, NUM_FACES};

/// Invalid rule parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("target face {0} is outside 1..={NUM_FACES}")]
    FaceOutOfRange(u8),
    #[error("required count {0} exceeds {NUM_DICE} dice")]
    CountTooLarge(u8),
}

/// How straights are detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StraightMode {
    /// Small straight needs 4 consecutive faces, large straight needs 5.
    #[default]
    Consecutive,
    /// Historical scoring: a small straight is paid for {1,2,3,4}, {2,3,4,5},
    /// or any hand that shows a 5 or a 6. Large straight is 5 distinct faces
    /// not containing both 1 and 6.
    Legacy,
}

/// `val` points per die showing `val`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalOneNumber {
    pub val: u8,
}

/// Sum of all dice when some face appears at least `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumDistro {
    pub count: u8,
}

/// Fixed payout for a dice pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatScore {
    pub score: u32,
}

/// Fixed payout for a straight, detected per `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Straight {
    pub score: u32,
    pub mode: StraightMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    TotalOneNumber(TotalOneNumber),
    SumDistro(SumDistro),
    FullHouse(FlatScore),
    SmallStraight(Straight),
    LargeStraight(Straight),
    Yahtzee(FlatScore),
}

impl Rule {
    pub fn total_one_number(val: u8) -> Self {
        Rule::TotalOneNumber(TotalOneNumber { val })
    }

    pub fn sum_distro(count: u8) -> Self {
        Rule::SumDistro(SumDistro { count })
    }

    pub fn full_house(score: u32) -> Self {
        Rule::FullHouse(FlatScore { score })
    }

    pub fn small_straight(score: u32, mode: StraightMode) -> Self {
        Rule::SmallStraight(Straight { score, mode })
    }

    pub fn large_straight(score: u32, mode: StraightMode) -> Self {
        Rule::LargeStraight(Straight { score, mode })
    }

    pub fn yahtzee(score: u32) -> Self {
        Rule::Yahtzee(FlatScore { score })
    }

    /// Check parameters that would make the rule meaningless.
    pub fn validate(&self) -> Result<(), RuleError> {
        match *self {
            Rule::TotalOneNumber(TotalOneNumber { val }) if !(1..=NUM_FACES).contains(&val) => {
                Err(RuleError::FaceOutOfRange(val))
            }
            Rule::SumDistro(SumDistro { count }) if count as usize > NUM_DICE => {
                Err(RuleError::CountTooLarge(count))
            }
            _ => Ok(()),
        }
    }

    /// Score `hand` under this rule. Total over every valid hand.
    pub fn evaluate(&self, hand: &Hand) -> u32 {
        match *self {
            Rule::TotalOneNumber(TotalOneNumber { val }) => {
                val as u32 * hand.count_value(val) as u32
            }
            Rule::SumDistro(SumDistro { count }) => {
                if hand.frequency().iter().any(|&c| c >= count) {
                    hand.sum()
                } else {
                    0
                }
            }
            Rule::FullHouse(FlatScore { score }) => {
                let freqs = hand.frequency();
                if freqs.contains(&2) && freqs.contains(&3) {
                    score
                } else {
                    0
                }
            }
            Rule::SmallStraight(Straight { score, mode }) => {
                if is_small_straight(hand, mode) {
                    score
                } else {
                    0
                }
            }
            Rule::LargeStraight(Straight { score, mode }) => {
                if is_large_straight(hand, mode) {
                    score
                } else {
                    0
                }
            }
            Rule::Yahtzee(FlatScore { score }) => {
                if hand.distinct_faces() == 1 {
                    score
                } else {
                    0
                }
            }
        }
    }
}

fn has_all(hand: &Hand, faces: &[u8]) -> bool {
    faces.iter().all(|&f| hand.has_face(f))
}

fn is_small_straight(hand: &Hand, mode: StraightMode) -> bool {
    match mode {
        StraightMode::Consecutive => hand.longest_run() >= 4,
        StraightMode::Legacy => {
            // Operator precedence of the historical rule binds `||` last.
            has_all(hand, &[2, 3, 4, 1])
                || hand.has_face(5)
                || has_all(hand, &[3, 4, 5, 2])
                || hand.has_face(6)
        }
    }
}

fn is_large_straight(hand: &Hand, mode: StraightMode) -> bool {
    match mode {
        StraightMode::Consecutive => hand.longest_run() == NUM_DICE,
        StraightMode::Legacy => {
            hand.distinct_faces() == NUM_DICE && (!hand.has_face(1) || !hand.has_face(6))
        }
    }
}
