//! Solitaire game driver: 13 turns, each rolling the tray up to the
//! configured number of times and then filling one scorecard row.
//!
//! The built-in policy is greedy and fixed, which makes seeded games fully
//! reproducible.

use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::config::RulesConfig;
use crate::dice::{seeded_rng, DiceError, DiceTray};
use crate::hand::{Hand, NUM_DICE};
use crate::registry::{Category, Registry, NUM_CATEGORIES};
use crate::scorecard::{Scorecard, ScorecardError};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("dice: {0}")]
    Dice(#[from] DiceError),
    #[error("scorecard: {0}")]
    Scorecard(#[from] ScorecardError),
    #[error("no open category left to score")]
    NoOpenCategory,
}

/// What happened in one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    /// 0-based turn index.
    pub turn: u8,
    /// Dice after each roll, in order.
    pub rolls: Vec<[u8; NUM_DICE]>,
    pub category: Category,
    pub hand: Hand,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub seed: u64,
    pub turns: Vec<TurnRecord>,
    pub card: Scorecard,
}

impl GameRecord {
    pub fn total(&self) -> u32 {
        self.card.total()
    }
}

/// Dice to keep before a reroll.
///
/// Keeps a 5-long run whole and a 4-long run minus the spare die, otherwise
/// every die of the most frequent face (higher face wins ties).
pub fn keep_for(hand: &Hand) -> [bool; NUM_DICE] {
    let dice = hand.dice();
    let counts = hand.face_counts();

    if hand.longest_run() == NUM_DICE {
        return [true; NUM_DICE];
    }
    if hand.longest_run() == 4 {
        let mut start = 0usize;
        for s in 0..=2usize {
            if counts[s..s + 4].iter().all(|&c| c > 0) {
                start = s;
            }
        }
        let mut taken = [false; 6];
        let mut keep = [false; NUM_DICE];
        for (k, &d) in keep.iter_mut().zip(&dice) {
            let slot = (d - 1) as usize;
            if (start..start + 4).contains(&slot) && !taken[slot] {
                taken[slot] = true;
                *k = true;
            }
        }
        return keep;
    }

    let mut best_face = 6usize;
    for face in (1..=6usize).rev() {
        if counts[face - 1] > counts[best_face - 1] {
            best_face = face;
        }
    }
    dice.map(|d| d as usize == best_face)
}

/// Highest-scoring open category; the earliest one wins ties.
pub fn choose_category(registry: &Registry, card: &Scorecard, hand: &Hand) -> Option<Category> {
    let mut best: Option<(Category, u32)> = None;
    for cat in card.open_categories() {
        let score = registry.score_category(cat, hand);
        match best {
            Some((_, s)) if s >= score => {}
            _ => best = Some((cat, score)),
        }
    }
    best.map(|(c, _)| c)
}

/// Running game state.
pub struct Game<'r> {
    registry: &'r Registry,
    tray: DiceTray,
    card: Scorecard,
    rng: ChaCha8Rng,
    turn: u8,
}

impl<'r> Game<'r> {
    pub fn new(registry: &'r Registry, config: &RulesConfig, seed: u64) -> Self {
        Self {
            registry,
            tray: DiceTray::new(config.game.rolls_per_turn),
            card: Scorecard::new(),
            rng: seeded_rng(seed),
            turn: 0,
        }
    }

    pub fn card(&self) -> &Scorecard {
        &self.card
    }

    pub fn is_over(&self) -> bool {
        self.card.is_complete()
    }

    /// Play one turn with the greedy policy.
    pub fn play_turn(&mut self) -> Result<TurnRecord, GameError> {
        self.tray.reset();
        let mut rolls = Vec::new();

        let mut hand = self.tray.roll(&mut self.rng)?;
        rolls.push(hand.dice());
        while self.tray.rolls_left() > 0 {
            self.tray.set_locks(keep_for(&hand))?;
            if self.tray.is_settled() {
                break;
            }
            hand = self.tray.roll(&mut self.rng)?;
            rolls.push(hand.dice());
        }

        let category =
            choose_category(self.registry, &self.card, &hand).ok_or(GameError::NoOpenCategory)?;
        let score = self.card.record(self.registry, category, &hand)?;
        let record = TurnRecord {
            turn: self.turn,
            rolls,
            category,
            hand,
            score,
        };
        self.turn += 1;
        Ok(record)
    }
}

/// Play a complete seeded game, calling `on_turn` after every turn.
pub fn play_game<F>(
    registry: &Registry,
    config: &RulesConfig,
    seed: u64,
    mut on_turn: F,
) -> Result<GameRecord, GameError>
where
    F: FnMut(&TurnRecord),
{
    let mut game = Game::new(registry, config, seed);
    let mut turns = Vec::with_capacity(NUM_CATEGORIES);
    while !game.is_over() {
        let t = game.play_turn()?;
        on_turn(&t);
        turns.push(t);
    }
    Ok(GameRecord {
        seed,
        turns,
        card: game.card,
    })
}
