use crate::{check_entry, Evaluation, Hand, Result};
use serde::Serialize;
use std::fmt;

/// Everything the program prints: the club entry message, then the hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entry_message: &'static str,
    pub hand: Hand,
    pub evaluation: Evaluation,
}

impl Report {
    pub const DEFAULT_AGE: i32 = 22;
    pub const DEFAULT_FIRST_CARD: i32 = 10;
    pub const DEFAULT_SECOND_CARD: i32 = 4;

    pub fn new(age: i32, hand: Hand) -> Self {
        Self {
            entry_message: check_entry(age),
            hand,
            evaluation: hand.evaluate(),
        }
    }

    pub fn lines(&self) -> [&'static str; 2] {
        [self.entry_message, self.evaluation.message]
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_AGE,
            Hand::new(Self::DEFAULT_FIRST_CARD, Self::DEFAULT_SECOND_CARD),
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [entry, hand] = self.lines();
        writeln!(f, "{entry}")?;
        write!(f, "{hand}")
    }
}
