use std::cmp::Ordering;

use crate::cards::Card;
use crate::error::{ShowdownError, ShowdownResult};
use crate::hand_evaluator::{classify, HandCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
    Tie,
}

/// Break a tie between two hands already known to share `category`.
/// Classifies both seven-card sets and fails with `CategoryMismatch` when
/// either does not actually satisfy the stated category.
pub fn resolve(
    hole1: &[Card],
    hole2: &[Card],
    board: &[Card],
    category: HandCategory,
) -> ShowdownResult<Winner> {
    let seven1: Vec<Card> = hole1.iter().chain(board.iter()).copied().collect();
    let seven2: Vec<Card> = hole2.iter().chain(board.iter()).copied().collect();
    let first = classify(&seven1)?;
    let second = classify(&seven2)?;
    if first.category != category || second.category != category {
        return Err(ShowdownError::CategoryMismatch(category));
    }
    Ok(compare_ranked(category, &first.best_five, &second.best_five))
}

/// Category-specific comparison over canonical best-five hands. Groups are
/// compared first, then the kickers of the five-card hand, highest to
/// lowest. Suits never break ties.
pub fn compare_ranked(category: HandCategory, first: &[Card; 5], second: &[Card; 5]) -> Winner {
    match category {
        // The high card of the run decides; the wheel leads with the five.
        HandCategory::Straight | HandCategory::StraightFlush | HandCategory::RoyalFlush => {
            by_positions(first, second, &[0])
        }
        HandCategory::Flush | HandCategory::HighCard => {
            by_positions(first, second, &[0, 1, 2, 3, 4])
        }
        // Triple rank, then pair rank.
        HandCategory::FullHouse => by_positions(first, second, &[0, 3]),
        HandCategory::FourOfAKind => by_positions(first, second, &[0, 4]),
        HandCategory::ThreeOfAKind => by_positions(first, second, &[0, 3, 4]),
        // Both pair ranks in descending order, then the kicker.
        HandCategory::TwoPair => by_positions(first, second, &[0, 2, 4]),
        HandCategory::Pair => by_positions(first, second, &[0, 2, 3, 4]),
        HandCategory::Unknown => Winner::Tie,
    }
}

fn by_positions(first: &[Card; 5], second: &[Card; 5], positions: &[usize]) -> Winner {
    for &i in positions {
        match first[i].rank.cmp(&second[i].rank) {
            Ordering::Greater => return Winner::First,
            Ordering::Less => return Winner::Second,
            Ordering::Equal => {}
        }
    }
    Winner::Tie
}
