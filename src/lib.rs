mod club;
mod error;
mod hand;
mod report;

pub use club::{check_entry, ENTRY_AGE, ENTRY_DENIED, ENTRY_WELCOME};
pub use error::{Error, Result};
pub use hand::{
    evaluate, Evaluation, Hand, HandOutcome, BLACKJACK, BLACKJACK_MESSAGE, BUST_MESSAGE,
    DRAW_MESSAGE, MAX_CARD, MIN_CARD,
};
pub use report::Report;
