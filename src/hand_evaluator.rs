use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::cards::{Card, Rank, Suit, ALL_SUITS};
use crate::error::{ShowdownError, ShowdownResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandCategory {
    Unknown = 0,
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::Unknown => write!(f, "unknown"),
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::Pair => write!(f, "Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
            HandCategory::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

/// A classified seven-card hand: the category and the best five cards,
/// ordered best-card-first. The wheel straight orders as 5 4 3 2 A.
#[derive(Debug, Clone)]
pub struct ClassifiedHand {
    pub category: HandCategory,
    pub best_five: [Card; 5],
}

impl ClassifiedHand {
    pub fn key(&self) -> [u8; 5] {
        let mut key = [0u8; 5];
        for (i, card) in self.best_five.iter().enumerate() {
            key[i] = card.value();
        }
        key
    }
}

impl fmt::Display for ClassifiedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

pub fn classify(cards: &[Card]) -> ShowdownResult<ClassifiedHand> {
    if cards.len() != 7 {
        return Err(ShowdownError::InvalidInputSize {
            expected: 7,
            got: cards.len(),
        });
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[i + 1..].contains(card) {
            return Err(ShowdownError::HoleCardOverlap(*card));
        }
    }

    // Straight flush first: straight detection restricted to the flush suit.
    let flush = flush_suit(cards).map(|suit| suited_cards(cards, suit));
    if let Some(suited) = &flush {
        if let Some(run) = straight(suited) {
            let category = if run[0].rank == Rank::Ace && run[4].rank == Rank::Ten {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return Ok(ClassifiedHand {
                category,
                best_five: run,
            });
        }
    }

    let groups = rank_groups(cards);

    // Full house: a triple plus a second rank holding at least a pair. A
    // second triple contributes its top two cards as the pair.
    if groups[0].len() == 3 && groups.len() > 1 && groups[1].len() >= 2 {
        let best_five = [
            groups[0][0],
            groups[0][1],
            groups[0][2],
            groups[1][0],
            groups[1][1],
        ];
        return Ok(ClassifiedHand {
            category: HandCategory::FullHouse,
            best_five,
        });
    }

    if let Some(suited) = flush {
        let best_five = [suited[0], suited[1], suited[2], suited[3], suited[4]];
        return Ok(ClassifiedHand {
            category: HandCategory::Flush,
            best_five,
        });
    }

    if let Some(run) = straight(cards) {
        return Ok(ClassifiedHand {
            category: HandCategory::Straight,
            best_five: run,
        });
    }

    match groups[0].len() {
        4 => {
            let kicker = best_kickers(cards, &groups[..1], 1)[0];
            let best_five = [groups[0][0], groups[0][1], groups[0][2], groups[0][3], kicker];
            Ok(ClassifiedHand {
                category: HandCategory::FourOfAKind,
                best_five,
            })
        }
        3 => {
            let kickers = best_kickers(cards, &groups[..1], 2);
            let best_five = [
                groups[0][0],
                groups[0][1],
                groups[0][2],
                kickers[0],
                kickers[1],
            ];
            Ok(ClassifiedHand {
                category: HandCategory::ThreeOfAKind,
                best_five,
            })
        }
        2 => {
            if groups[1].len() == 2 {
                let kicker = best_kickers(cards, &groups[..2], 1)[0];
                let best_five = [groups[0][0], groups[0][1], groups[1][0], groups[1][1], kicker];
                Ok(ClassifiedHand {
                    category: HandCategory::TwoPair,
                    best_five,
                })
            } else {
                let kickers = best_kickers(cards, &groups[..1], 3);
                let best_five = [
                    groups[0][0],
                    groups[0][1],
                    kickers[0],
                    kickers[1],
                    kickers[2],
                ];
                Ok(ClassifiedHand {
                    category: HandCategory::Pair,
                    best_five,
                })
            }
        }
        _ => {
            let mut sorted = cards.to_vec();
            sorted.sort_by(|a, b| b.rank.cmp(&a.rank));
            let best_five = [sorted[0], sorted[1], sorted[2], sorted[3], sorted[4]];
            Ok(ClassifiedHand {
                category: HandCategory::HighCard,
                best_five,
            })
        }
    }
}

fn flush_suit(cards: &[Card]) -> Option<Suit> {
    ALL_SUITS
        .iter()
        .copied()
        .find(|&suit| cards.iter().filter(|c| c.suit == suit).count() >= 5)
}

fn suited_cards(cards: &[Card], suit: Suit) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| c.suit == suit)
        .copied()
        .sorted_by(|a, b| b.rank.cmp(&a.rank))
        .collect()
}

/// Highest run of five consecutive ranks, ignoring duplicate ranks; the
/// wheel (A-2-3-4-5) is the fallback low straight. Best card first.
fn straight(cards: &[Card]) -> Option<[Card; 5]> {
    let mut unique = cards.to_vec();
    unique.sort_by_key(|c| c.rank);
    unique.dedup_by_key(|c| c.rank);

    if unique.len() >= 5 {
        for start in (0..=unique.len() - 5).rev() {
            let w = &unique[start..start + 5];
            if w[4].value() - w[0].value() == 4 {
                return Some([w[4], w[3], w[2], w[1], w[0]]);
            }
        }
    }

    let find = |rank: Rank| unique.iter().find(|c| c.rank == rank).copied();
    if let (Some(five), Some(four), Some(three), Some(two), Some(ace)) = (
        find(Rank::Five),
        find(Rank::Four),
        find(Rank::Three),
        find(Rank::Two),
        find(Rank::Ace),
    ) {
        return Some([five, four, three, two, ace]);
    }

    None
}

/// All cards grouped by rank, ordered by group size descending, then rank
/// descending.
fn rank_groups(cards: &[Card]) -> Vec<Vec<Card>> {
    let mut groups: Vec<Vec<Card>> = cards
        .iter()
        .map(|c| (c.rank, *c))
        .into_group_map()
        .into_values()
        .collect();
    groups.sort_by(|a, b| b.len().cmp(&a.len()).then(b[0].rank.cmp(&a[0].rank)));
    groups
}

fn best_kickers(cards: &[Card], taken: &[Vec<Card>], n: usize) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| !taken.iter().any(|group| group[0].rank == c.rank))
        .copied()
        .sorted_by(|a, b| b.rank.cmp(&a.rank))
        .take(n)
        .collect()
}
