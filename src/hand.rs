use crate::{Error, Result};
use serde::Serialize;

/// The total that makes a blackjack
pub const BLACKJACK: i64 = 21;

/// Lowest card value a dealt card can carry
pub const MIN_CARD: i32 = 2;
/// Highest card value a dealt card can carry (an ace counted as 11)
pub const MAX_CARD: i32 = 11;

pub const DRAW_MESSAGE: &str = "Do you want to draw a new card? 🙂";
pub const BLACKJACK_MESSAGE: &str = "Wohoo! You've got Blackjack! 🥳";
pub const BUST_MESSAGE: &str = "You're out of the game! 😭";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HandOutcome {
    /// Under 21, the player may draw again
    Continue,
    Blackjack,
    Bust,
}

impl HandOutcome {
    /// Classify a hand total
    pub fn from_sum(sum: i64) -> Self {
        if sum < BLACKJACK {
            HandOutcome::Continue
        } else if sum == BLACKJACK {
            HandOutcome::Blackjack
        } else {
            HandOutcome::Bust
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HandOutcome::Continue => DRAW_MESSAGE,
            HandOutcome::Blackjack => BLACKJACK_MESSAGE,
            HandOutcome::Bust => BUST_MESSAGE,
        }
    }

    pub fn has_blackjack(&self) -> bool {
        matches!(self, HandOutcome::Blackjack)
    }

    pub fn is_alive(&self) -> bool {
        !matches!(self, HandOutcome::Bust)
    }
}

/// A two-card hand. Card values are not range checked unless built with
/// [`Hand::checked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hand {
    pub first_card: i32,
    pub second_card: i32,
}

impl Hand {
    pub fn new(first_card: i32, second_card: i32) -> Self {
        Self {
            first_card,
            second_card,
        }
    }

    /// Build a hand, rejecting cards outside `MIN_CARD..=MAX_CARD`
    pub fn checked(first_card: i32, second_card: i32) -> Result<Self> {
        for card in [first_card, second_card] {
            if !(MIN_CARD..=MAX_CARD).contains(&card) {
                return Err(Error::CardOutOfRange {
                    card,
                    min: MIN_CARD,
                    max: MAX_CARD,
                });
            }
        }
        Ok(Self::new(first_card, second_card))
    }

    // Widened so that any two i32 cards have a sum.
    pub fn sum(&self) -> i64 {
        i64::from(self.first_card) + i64::from(self.second_card)
    }

    pub fn outcome(&self) -> HandOutcome {
        HandOutcome::from_sum(self.sum())
    }

    pub fn evaluate(&self) -> Evaluation {
        let sum = self.sum();
        let outcome = HandOutcome::from_sum(sum);
        log::debug!(
            "hand {} + {} = {sum} -> {outcome:?}",
            self.first_card,
            self.second_card
        );
        Evaluation {
            sum,
            message: outcome.message(),
            has_blackjack: outcome.has_blackjack(),
            is_alive: outcome.is_alive(),
            outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub sum: i64,
    pub message: &'static str,
    pub has_blackjack: bool,
    pub is_alive: bool,
    pub outcome: HandOutcome,
}

/// Evaluate the hand made of two card values
pub fn evaluate(first_card: i32, second_card: i32) -> Evaluation {
    Hand::new(first_card, second_card).evaluate()
}
