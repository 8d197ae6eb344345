//! The 13 scoreboard categories and their configured rules.
//!
//! `Registry` is an immutable value built once by the caller from a
//! `RulesConfig` and passed around explicitly.

use std::fmt;

use thiserror::Error;

use crate::config::RulesConfig;
use crate::hand::Hand;
use crate::rule::Rule;

pub const NUM_CATEGORIES: usize = 13;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown rule: {0:?}")]
    UnknownRule(String),
}

/// Scoreboard category, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfKind,
    FourOfKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl Category {
    pub const ALL: [Category; NUM_CATEGORIES] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfKind,
        Category::FourOfKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::ThreeOfKind => "threeOfKind",
            Category::FourOfKind => "fourOfKind",
            Category::FullHouse => "fullHouse",
            Category::SmallStraight => "smallStraight",
            Category::LargeStraight => "largeStraight",
            Category::Yahtzee => "yahtzee",
            Category::Chance => "chance",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| RegistryError::UnknownRule(name.to_string()))
    }

    /// Ones through sixes.
    pub fn is_upper(self) -> bool {
        self.index() < 6
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named, described rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub category: Category,
    pub description: String,
    pub rule: Rule,
}

impl RuleEntry {
    pub fn name(&self) -> &'static str {
        self.category.name()
    }

    pub fn evaluate(&self, hand: &Hand) -> u32 {
        self.rule.evaluate(hand)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<RuleEntry>,
}

impl Registry {
    /// Build the registry for `config`.
    pub fn new(config: &RulesConfig) -> Self {
        let p = &config.payouts;
        let mode = config.straights.mode;

        let entries = Category::ALL
            .into_iter()
            .map(|category| {
                let (rule, description) = match category {
                    Category::Ones
                    | Category::Twos
                    | Category::Threes
                    | Category::Fours
                    | Category::Fives
                    | Category::Sixes => {
                        let val = category.index() as u8 + 1;
                        (
                            Rule::total_one_number(val),
                            format!("{val} point per {val}"),
                        )
                    }
                    Category::ThreeOfKind => (
                        Rule::sum_distro(3),
                        "Sum all dice if 3 are the same".to_string(),
                    ),
                    Category::FourOfKind => (
                        Rule::sum_distro(4),
                        "Sum all dice if 4 are the same".to_string(),
                    ),
                    Category::FullHouse => (
                        Rule::full_house(p.full_house),
                        format!(
                            "{} points if you have 2 of the same dice paired with 3 of other same dice",
                            p.full_house
                        ),
                    ),
                    Category::SmallStraight => (
                        Rule::small_straight(p.small_straight, mode),
                        format!(
                            "{} points for a straight made of 4 dice; 1 2 3 4 or 2 3 4 5 etc.",
                            p.small_straight
                        ),
                    ),
                    Category::LargeStraight => (
                        Rule::large_straight(p.large_straight, mode),
                        format!(
                            "{} points for a straight made of 5 dice; 1 2 3 4 5 or 2 3 4 5 6",
                            p.large_straight
                        ),
                    ),
                    Category::Yahtzee => (
                        Rule::yahtzee(p.yahtzee),
                        format!("{} points if you have all 5 dice the same", p.yahtzee),
                    ),
                    // At least 0 of a kind always holds.
                    Category::Chance => (
                        Rule::sum_distro(0),
                        "Sum all dice to get your score".to_string(),
                    ),
                };
                debug_assert_eq!(rule.validate(), Ok(()));
                RuleEntry {
                    category,
                    description,
                    rule,
                }
            })
            .collect();

        Self { entries }
    }

    /// Registry for the standard game.
    pub fn standard() -> Self {
        Self::new(&RulesConfig::default())
    }

    pub fn get(&self, category: Category) -> &RuleEntry {
        &self.entries[category.index()]
    }

    pub fn by_name(&self, name: &str) -> Result<&RuleEntry, RegistryError> {
        Category::from_name(name).map(|c| self.get(c))
    }

    /// Entries in scoreboard order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn score(&self, name: &str, hand: &Hand) -> Result<u32, RegistryError> {
        Ok(self.by_name(name)?.evaluate(hand))
    }

    pub fn score_category(&self, category: Category, hand: &Hand) -> u32 {
        self.get(category).evaluate(hand)
    }

    /// Score `hand` in every category.
    pub fn score_all(&self, hand: &Hand) -> [(Category, u32); NUM_CATEGORIES] {
        Category::ALL.map(|c| (c, self.score_category(c, hand)))
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a RuleEntry;
    type IntoIter = std::slice::Iter<'a, RuleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
