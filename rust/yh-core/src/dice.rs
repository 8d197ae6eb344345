//! Dice tray: the five dice of the current turn with per-die lock flags.
//!
//! Locked dice keep their face across rolls. A turn allows a bounded number
//! of rolls (the first roll included); dice can only be locked once rolled.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use thiserror::Error;

use crate::hand::{Hand, NUM_DICE, NUM_FACES};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("no rolls left this turn")]
    NoRollsLeft,
    #[error("die index {0} out of range 0..{NUM_DICE}")]
    BadIndex(usize),
    #[error("dice have not been rolled yet")]
    NotRolled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceTray {
    values: [u8; NUM_DICE],
    locked: [bool; NUM_DICE],
    rolls_left: u8,
    rolls_per_turn: u8,
}

impl DiceTray {
    /// Fresh tray: all dice unlocked and showing 1.
    pub fn new(rolls_per_turn: u8) -> Self {
        Self {
            values: [1; NUM_DICE],
            locked: [false; NUM_DICE],
            rolls_left: rolls_per_turn,
            rolls_per_turn,
        }
    }

    /// Reroll every unlocked die.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Hand, DiceError> {
        if self.rolls_left == 0 {
            return Err(DiceError::NoRollsLeft);
        }
        for (v, &locked) in self.values.iter_mut().zip(&self.locked) {
            if !locked {
                *v = rng.gen_range(1..=NUM_FACES);
            }
        }
        self.rolls_left -= 1;
        Ok(self.hand())
    }

    /// Flip the lock on die `idx`; returns the new lock state.
    pub fn toggle_lock(&mut self, idx: usize) -> Result<bool, DiceError> {
        if idx >= NUM_DICE {
            return Err(DiceError::BadIndex(idx));
        }
        if !self.has_rolled() {
            return Err(DiceError::NotRolled);
        }
        self.locked[idx] = !self.locked[idx];
        Ok(self.locked[idx])
    }

    /// Lock exactly the dice selected by `keep`, unlocking the rest.
    pub fn set_locks(&mut self, keep: [bool; NUM_DICE]) -> Result<(), DiceError> {
        if !self.has_rolled() {
            return Err(DiceError::NotRolled);
        }
        self.locked = keep;
        Ok(())
    }

    /// Start a new turn.
    pub fn reset(&mut self) {
        self.locked = [false; NUM_DICE];
        self.rolls_left = self.rolls_per_turn;
    }

    pub fn hand(&self) -> Hand {
        Hand::from_faces_unchecked(self.values)
    }

    #[inline]
    pub fn values(&self) -> [u8; NUM_DICE] {
        self.values
    }

    #[inline]
    pub fn locked(&self) -> [bool; NUM_DICE] {
        self.locked
    }

    #[inline]
    pub fn rolls_left(&self) -> u8 {
        self.rolls_left
    }

    pub fn has_rolled(&self) -> bool {
        self.rolls_left < self.rolls_per_turn
    }

    /// True once every die is locked or no rolls remain.
    pub fn is_settled(&self) -> bool {
        self.rolls_left == 0 || self.locked.iter().all(|&l| l)
    }
}

/// Seeded dice stream for reproducible games.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
