//! Exhaustive all-in equity: enumerate every completion of the unseen
//! community cards, rank every player on every board, and tally wins and
//! tie shares. Boards are addressed by lexicographic combination index so
//! the space shards cleanly across rayon workers; tallies are integers, so
//! the reduction is exact and order-independent.

use std::cmp::Ordering;
use std::collections::HashSet;

use rayon::prelude::*;

use crate::cards::{Card, Deck};
use crate::error::{ShowdownError, ShowdownResult};
use crate::hand_evaluator::{classify, ClassifiedHand, HandCategory};
use crate::lookup_eval::rank_hand;
use crate::tiebreak::{compare_ranked, Winner};

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub hole: [Card; 2],
}

impl Player {
    pub fn new(name: impl Into<String>, hole: [Card; 2]) -> Player {
        Player {
            name: name.into(),
            hole,
        }
    }
}

/// Hand evaluation strategy, selected by the caller. Both strategies agree
/// on every input; `Lookup` is the fast path for large enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluator {
    RuleBased,
    Lookup,
}

impl Evaluator {
    pub fn category(self, seven: &[Card]) -> ShowdownResult<HandCategory> {
        match self {
            Evaluator::RuleBased => Ok(classify(seven)?.category),
            Evaluator::Lookup => Ok(rank_hand(seven)?.category()),
        }
    }
}

/// Equity of each player across every completion of the community cards.
/// Returns one fraction per player; the fractions sum to 1.
pub fn equity(
    players: &[Player],
    community: &[Card],
    evaluator: Evaluator,
) -> ShowdownResult<Vec<f64>> {
    if players.len() < 2 {
        return Err(ShowdownError::NotEnoughPlayers);
    }
    if community.len() > 5 {
        return Err(ShowdownError::InvalidBoardSize(community.len()));
    }

    let dead: Vec<Card> = players
        .iter()
        .flat_map(|p| p.hole)
        .chain(community.iter().copied())
        .collect();
    let mut seen: HashSet<Card> = HashSet::with_capacity(dead.len());
    for &card in &dead {
        if !seen.insert(card) {
            return Err(ShowdownError::HoleCardOverlap(card));
        }
    }

    let mut deck = Deck::new();
    for &card in &dead {
        deck.remove(card)?;
    }

    let n = deck.len();
    let draws = 5 - community.len();
    if n < draws {
        return Err(ShowdownError::NotEnoughDeck {
            requested: draws,
            available: n,
        });
    }
    let total = binomial(n as u64, draws as u64);
    let scale = tie_scale(players.len());

    let tally = (0..total)
        .into_par_iter()
        .try_fold(
            || Tally::new(players.len()),
            |mut tally, index| -> ShowdownResult<Tally> {
                let mut board = [deck.cards[0]; 5];
                board[..community.len()].copy_from_slice(community);
                for (slot, pos) in nth_combination(index, n, draws).into_iter().enumerate() {
                    board[community.len() + slot] = deck.cards[pos];
                }
                let winners = board_winners(players, &board, evaluator)?;
                tally.record(&winners, scale);
                Ok(tally)
            },
        )
        .try_reduce(
            || Tally::new(players.len()),
            |mut merged, tally| {
                merged.merge(&tally);
                Ok(merged)
            },
        )?;

    Ok(tally.equities(total, scale))
}

/// Winner set on a settled five-card board: index of every player holding
/// the best hand (more than one only on an exact tie).
pub fn showdown_winners(
    players: &[Player],
    board: &[Card],
    evaluator: Evaluator,
) -> ShowdownResult<Vec<usize>> {
    if board.len() != 5 {
        return Err(ShowdownError::InvalidInputSize {
            expected: 5,
            got: board.len(),
        });
    }
    let board = [board[0], board[1], board[2], board[3], board[4]];
    board_winners(players, &board, evaluator)
}

fn board_winners(
    players: &[Player],
    board: &[Card; 5],
    evaluator: Evaluator,
) -> ShowdownResult<Vec<usize>> {
    let mut winners: Vec<usize> = Vec::with_capacity(players.len());
    match evaluator {
        Evaluator::Lookup => {
            let mut best = u16::MAX;
            for (i, player) in players.iter().enumerate() {
                let value = rank_hand(&seven(player.hole, board))?.value();
                match value.cmp(&best) {
                    Ordering::Less => {
                        best = value;
                        winners.clear();
                        winners.push(i);
                    }
                    Ordering::Equal => winners.push(i),
                    Ordering::Greater => {}
                }
            }
        }
        Evaluator::RuleBased => {
            let mut best: Option<ClassifiedHand> = None;
            for (i, player) in players.iter().enumerate() {
                let hand = classify(&seven(player.hole, board))?;
                match best.as_ref().map(|b| (b.category, b.best_five)) {
                    None => {
                        best = Some(hand);
                        winners.push(i);
                    }
                    Some((category, best_five)) => match hand.category.cmp(&category) {
                        Ordering::Greater => {
                            best = Some(hand);
                            winners.clear();
                            winners.push(i);
                        }
                        Ordering::Less => {}
                        Ordering::Equal => {
                            match compare_ranked(category, &hand.best_five, &best_five) {
                                Winner::First => {
                                    best = Some(hand);
                                    winners.clear();
                                    winners.push(i);
                                }
                                Winner::Tie => winners.push(i),
                                Winner::Second => {}
                            }
                        }
                    },
                }
            }
        }
    }
    Ok(winners)
}

fn seven(hole: [Card; 2], board: &[Card; 5]) -> [Card; 7] {
    [
        hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
    ]
}

/// Integer win/tie accounting. An m-way tie adds `scale / m` units to each
/// tied player, with `scale` the lcm of all possible tie sizes, so shares
/// stay exact and the final merge is commutative.
struct Tally {
    wins: Vec<u64>,
    tie_units: Vec<u64>,
}

impl Tally {
    fn new(players: usize) -> Tally {
        Tally {
            wins: vec![0; players],
            tie_units: vec![0; players],
        }
    }

    fn record(&mut self, winners: &[usize], scale: u64) {
        if let [sole] = winners {
            self.wins[*sole] += 1;
        } else {
            let share = scale / winners.len() as u64;
            for &w in winners {
                self.tie_units[w] += share;
            }
        }
    }

    fn merge(&mut self, other: &Tally) {
        for (a, b) in self.wins.iter_mut().zip(&other.wins) {
            *a += b;
        }
        for (a, b) in self.tie_units.iter_mut().zip(&other.tie_units) {
            *a += b;
        }
    }

    fn equities(&self, total: u64, scale: u64) -> Vec<f64> {
        self.wins
            .iter()
            .zip(&self.tie_units)
            .map(|(&wins, &units)| {
                (wins as f64 + units as f64 / scale as f64) / total as f64
            })
            .collect()
    }
}

fn tie_scale(players: usize) -> u64 {
    (2..=players as u64).fold(1, |acc, k| acc / gcd(acc, k) * k)
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 1..=k {
        result = result * (n - k + i) / i;
    }
    result
}

/// The `index`-th k-combination of `0..n` in lexicographic order.
pub fn nth_combination(mut index: u64, n: usize, k: usize) -> Vec<usize> {
    let mut combo = Vec::with_capacity(k);
    let mut element = 0;
    let mut remaining = k;
    while remaining > 0 {
        let with_element = binomial((n - element - 1) as u64, (remaining - 1) as u64);
        if index < with_element {
            combo.push(element);
            remaining -= 1;
        } else {
            index -= with_element;
        }
        element += 1;
    }
    combo
}
