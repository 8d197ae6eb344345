//! Hand representation and dice statistics helpers.
//!
//! A `Hand` is always five faces in 1..=6; construction is the only place
//! where malformed input is rejected, so rule evaluation never fails.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of dice in a hand.
pub const NUM_DICE: usize = 5;

/// Number of faces on a die.
pub const NUM_FACES: u8 = 6;

/// Die face names, indexed by `face - 1`.
pub const FACE_WORDS: [&str; NUM_FACES as usize] = ["one", "two", "three", "four", "five", "six"];

/// Malformed hand input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("invalid hand: expected {NUM_DICE} dice, got {0}")]
    WrongLength(usize),
    #[error("invalid hand: face {face} at position {pos} is outside 1..={NUM_FACES}")]
    FaceOutOfRange { pos: usize, face: u8 },
    #[error("invalid hand: cannot parse {0:?} as a die face")]
    Unparsable(String),
}

/// Five dice, each in 1..=6, in the order they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([u8; NUM_DICE]);

impl Hand {
    pub fn new(dice: [u8; NUM_DICE]) -> Result<Self, HandError> {
        for (pos, &face) in dice.iter().enumerate() {
            if !(1..=NUM_FACES).contains(&face) {
                return Err(HandError::FaceOutOfRange { pos, face });
            }
        }
        Ok(Self(dice))
    }

    /// Faces already known to be in range.
    pub(crate) fn from_faces_unchecked(dice: [u8; NUM_DICE]) -> Self {
        debug_assert!(dice.iter().all(|d| (1..=NUM_FACES).contains(d)));
        Self(dice)
    }

    #[inline]
    pub fn dice(&self) -> [u8; NUM_DICE] {
        self.0
    }

    /// Sum of all dice.
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| d as u32).sum()
    }

    /// Occurrence counts of each distinct face, in order of first occurrence.
    ///
    /// `[2, 2, 3, 3, 3]` yields `[2, 3]`.
    pub fn frequency(&self) -> Vec<u8> {
        let mut order: Vec<u8> = Vec::with_capacity(NUM_DICE);
        let counts = self.face_counts();
        for &d in &self.0 {
            if !order.contains(&d) {
                order.push(d);
            }
        }
        order.iter().map(|&d| counts[(d - 1) as usize]).collect()
    }

    /// Number of dice showing `val`.
    pub fn count_value(&self, val: u8) -> u8 {
        self.0.iter().filter(|&&d| d == val).count() as u8
    }

    /// Counts indexed by `face - 1`.
    pub fn face_counts(&self) -> [u8; NUM_FACES as usize] {
        let mut counts = [0u8; NUM_FACES as usize];
        for &d in &self.0 {
            counts[(d - 1) as usize] += 1;
        }
        counts
    }

    #[inline]
    pub fn has_face(&self, face: u8) -> bool {
        self.0.contains(&face)
    }

    pub fn distinct_faces(&self) -> usize {
        self.face_counts().iter().filter(|&&c| c > 0).count()
    }

    /// Length of the longest run of consecutive faces present in the hand.
    pub fn longest_run(&self) -> usize {
        let mut best = 0usize;
        let mut run = 0usize;
        for c in self.face_counts() {
            if c > 0 {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
        best
    }
}

impl TryFrom<&[u8]> for Hand {
    type Error = HandError;

    fn try_from(dice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; NUM_DICE] = dice
            .try_into()
            .map_err(|_| HandError::WrongLength(dice.len()))?;
        Hand::new(arr)
    }
}

impl TryFrom<[u8; NUM_DICE]> for Hand {
    type Error = HandError;

    fn try_from(dice: [u8; NUM_DICE]) -> Result<Self, Self::Error> {
        Hand::new(dice)
    }
}

/// Accepts faces separated by whitespace and/or commas, or a run of digits
/// (`"1 2 3 4 5"`, `"1,2,3,4,5"`, `"12345"`).
impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let mut faces = Vec::with_capacity(NUM_DICE);
        if tokens.len() == 1 && tokens[0].len() > 1 {
            // Compact form: one digit per die.
            for ch in tokens[0].chars() {
                let face = ch
                    .to_digit(10)
                    .ok_or_else(|| HandError::Unparsable(ch.to_string()))?;
                faces.push(face as u8);
            }
        } else {
            for t in tokens {
                let face: u8 = t.parse().map_err(|_| HandError::Unparsable(t.to_string()))?;
                faces.push(face);
            }
        }
        Hand::try_from(faces.as_slice())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "[{a} {b} {c} {d} {e}]")
    }
}

/// Word for a die face (`1 -> "one"`), or `None` outside 1..=6.
pub fn face_word(face: u8) -> Option<&'static str> {
    if (1..=NUM_FACES).contains(&face) {
        Some(FACE_WORDS[(face - 1) as usize])
    } else {
        None
    }
}
