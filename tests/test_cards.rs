use showdown_cli::cards::*;
use showdown_cli::error::ShowdownError;

#[test]
fn test_card_creation() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.rank, Rank::Ace);
    assert_eq!(c.suit, Suit::Spades);
    assert_eq!(c.value(), 14);
}

#[test]
fn test_rank_from_char() {
    assert_eq!(Rank::from_char('T').unwrap(), Rank::Ten);
    assert_eq!(Rank::from_char('2').unwrap(), Rank::Two);
    assert_eq!(Rank::from_char('A').unwrap(), Rank::Ace);
}

#[test]
fn test_rank_from_value() {
    assert_eq!(Rank::from_value(2).unwrap(), Rank::Two);
    assert_eq!(Rank::from_value(11).unwrap(), Rank::Jack);
    assert_eq!(Rank::from_value(14).unwrap(), Rank::Ace);
}

#[test]
fn test_invalid_rank() {
    assert!(Rank::from_char('X').is_err());
    assert!(Rank::from_char('1').is_err());
    assert!(matches!(
        Rank::from_value(15),
        Err(ShowdownError::InvalidRankValue(15))
    ));
    assert!(Rank::from_value(0).is_err());
}

#[test]
fn test_suit_parse_letters_and_names() {
    assert_eq!(Suit::from_char('h').unwrap(), Suit::Hearts);
    assert_eq!(Suit::from_char('S').unwrap(), Suit::Spades);
    assert_eq!(Suit::parse("diamonds").unwrap(), Suit::Diamonds);
    assert_eq!(Suit::parse("c").unwrap(), Suit::Clubs);
    assert_eq!(Suit::parse("Hearts").unwrap(), Suit::Hearts);
}

#[test]
fn test_invalid_suit() {
    assert!(Suit::from_char('x').is_err());
    assert!(Suit::parse("swords").is_err());
}

#[test]
fn test_rank_display() {
    assert_eq!(format!("{}", Rank::Ten), "T");
    assert_eq!(format!("{}", Rank::Two), "2");
}

#[test]
fn test_suit_display_full_word() {
    assert_eq!(format!("{}", Suit::Hearts), "hearts");
    assert_eq!(format!("{}", Suit::Spades), "spades");
}

#[test]
fn test_card_str() {
    let c = Card::new(Rank::King, Suit::Diamonds);
    assert_eq!(format!("{}", c), "Kd");
}

#[test]
fn test_card_pretty() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.pretty(), "A\u{2660}");
}

#[test]
fn test_card_ordering_by_rank_only() {
    let two = Card::new(Rank::Two, Suit::Spades);
    let ace = Card::new(Rank::Ace, Suit::Spades);
    assert!(two < ace);
    let king = Card::new(Rank::King, Suit::Hearts);
    let queen = Card::new(Rank::Queen, Suit::Diamonds);
    assert!(!(king < queen));
}

#[test]
fn test_card_equality() {
    let a1 = Card::new(Rank::Ace, Suit::Spades);
    let a2 = Card::new(Rank::Ace, Suit::Spades);
    let a3 = Card::new(Rank::Ace, Suit::Hearts);
    assert_eq!(a1, a2);
    assert_ne!(a1, a3);
}

#[test]
fn test_parse_card_basic() {
    assert_eq!(parse_card("As").unwrap(), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(
        parse_card("Td").unwrap(),
        Card::new(Rank::Ten, Suit::Diamonds)
    );
}

#[test]
fn test_parse_card_case_insensitive_suit() {
    assert_eq!(parse_card("AH").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
}

#[test]
fn test_parse_card_invalid() {
    assert!(parse_card("ABC").is_err());
    assert!(parse_card("A").is_err());
}

#[test]
fn test_parse_board_with_spaces() {
    let board = parse_board("As Kd Qh").unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board[0], Card::new(Rank::Ace, Suit::Spades));
}

#[test]
fn test_parse_board_odd_length() {
    assert!(parse_board("AsK").is_err());
}

#[test]
fn test_parse_hole() {
    let hole = parse_hole("2h3d").unwrap();
    assert_eq!(hole[0], Card::new(Rank::Two, Suit::Hearts));
    assert_eq!(hole[1], Card::new(Rank::Three, Suit::Diamonds));
    assert!(matches!(
        parse_hole("2h3d4c"),
        Err(ShowdownError::InvalidHandSize)
    ));
}

#[test]
fn test_deck_full() {
    let d = Deck::new();
    assert_eq!(d.len(), 52);
    let unique: std::collections::HashSet<Card> = d.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn test_deck_remove() {
    let mut d = Deck::new();
    let ace = Card::new(Rank::Ace, Suit::Spades);
    d.remove(ace).unwrap();
    assert_eq!(d.len(), 51);
    assert!(!d.cards.contains(&ace));
}

#[test]
fn test_deck_remove_absent_is_not_found() {
    let mut d = Deck::new();
    let ace = Card::new(Rank::Ace, Suit::Spades);
    d.remove(ace).unwrap();
    assert!(matches!(d.remove(ace), Err(ShowdownError::NotFound(_))));
    assert_eq!(d.len(), 51);
}

#[test]
fn test_deck_discard_is_silent() {
    let mut d = Deck::new();
    let ace = Card::new(Rank::Ace, Suit::Spades);
    assert!(d.discard(ace));
    assert!(!d.discard(ace));
    assert_eq!(d.len(), 51);
}

#[test]
fn test_deck_deal() {
    let mut d = Deck::new();
    let cards = d.deal(5).unwrap();
    assert_eq!(cards.len(), 5);
    assert_eq!(d.len(), 47);
}

#[test]
fn test_deck_deal_too_many() {
    let mut d = Deck::new();
    assert!(matches!(
        d.deal(53),
        Err(ShowdownError::NotEnoughDeck {
            requested: 53,
            available: 52
        })
    ));
}
