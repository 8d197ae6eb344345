//! Scorecard: one optional score per category.
//!
//! `None` means the row has not been played yet. A row is written once.

use thiserror::Error;

use crate::hand::Hand;
use crate::registry::{Category, Registry, NUM_CATEGORIES};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScorecardError {
    #[error("category {0} has already been scored")]
    AlreadyScored(Category),
}

/// One scoreboard row as shown to a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub category: Category,
    pub name: &'static str,
    pub description: &'a str,
    pub score: Option<u32>,
}

impl Row<'_> {
    /// Open rows accept a score; filled rows are disabled.
    pub fn is_active(&self) -> bool {
        self.score.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorecard {
    scores: [Option<u32>; NUM_CATEGORIES],
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `hand` in `category` and fill the row.
    pub fn record(
        &mut self,
        registry: &Registry,
        category: Category,
        hand: &Hand,
    ) -> Result<u32, ScorecardError> {
        let slot = &mut self.scores[category.index()];
        if slot.is_some() {
            return Err(ScorecardError::AlreadyScored(category));
        }
        let score = registry.score_category(category, hand);
        *slot = Some(score);
        Ok(score)
    }

    #[inline]
    pub fn get(&self, category: Category) -> Option<u32> {
        self.scores[category.index()]
    }

    #[inline]
    pub fn is_open(&self, category: Category) -> bool {
        self.get(category).is_none()
    }

    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|&c| self.is_open(c))
    }

    pub fn total(&self) -> u32 {
        self.scores.iter().flatten().sum()
    }

    pub fn upper_total(&self) -> u32 {
        Category::ALL
            .into_iter()
            .filter(|c| c.is_upper())
            .filter_map(|c| self.get(c))
            .sum()
    }

    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }

    /// Rows in scoreboard order, with descriptions from `registry`.
    pub fn rows<'a>(&self, registry: &'a Registry) -> Vec<Row<'a>> {
        registry
            .iter()
            .map(|e| Row {
                category: e.category,
                name: e.name(),
                description: e.description.as_str(),
                score: self.get(e.category),
            })
            .collect()
    }
}
