use thiserror::Error;

use crate::cards::Card;
use crate::hand_evaluator::HandCategory;

#[derive(Error, Debug)]
pub enum ShowdownError {
    #[error("Invalid rank: {0}")]
    InvalidRank(char),

    #[error("Invalid rank value: {0}")]
    InvalidRankValue(u8),

    #[error("Invalid suit: {0}")]
    InvalidSuit(String),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Invalid board notation: {0}")]
    InvalidBoardNotation(String),

    #[error("Hole cards must be exactly 2 cards")]
    InvalidHandSize,

    #[error("Need exactly {expected} cards, got {got}")]
    InvalidInputSize { expected: usize, got: usize },

    #[error("Hand does not satisfy category {0}")]
    CategoryMismatch(HandCategory),

    #[error("Card {0} appears more than once across hands and board")]
    HoleCardOverlap(Card),

    #[error("Card {0} not found in deck")]
    NotFound(Card),

    #[error("Cannot deal {requested} cards, only {available} remaining")]
    NotEnoughDeck { requested: usize, available: usize },

    #[error("Equity needs at least 2 players")]
    NotEnoughPlayers,

    #[error("Board can hold at most 5 cards, got {0}")]
    InvalidBoardSize(usize),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type ShowdownResult<T> = Result<T, ShowdownError>;
