//! War engine integration tests.

use std::collections::VecDeque;

use clashrs::card::{ACE, KING, SUITS};
use clashrs::{
    Card, DECK_SIZE, DrawOutcome, GameOptions, RoundPhase, RoundWinner, Score, Suit, WarGame,
    standard_deck,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn set_decks(game: &mut WarGame, player: Vec<Card>, computer: Vec<Card>) {
    game.player_deck = VecDeque::from(player);
    game.computer_deck = VecDeque::from(computer);
}

#[test]
fn default_options_deal_one_full_deck() {
    let game = WarGame::new(GameOptions::default(), 42);

    assert_eq!(game.player_deck.len(), DECK_SIZE / 2);
    assert_eq!(game.computer_deck.len(), DECK_SIZE / 2);

    // Every card of the catalog appears exactly once across both decks.
    for reference in standard_deck() {
        let count = game
            .player_deck
            .iter()
            .chain(game.computer_deck.iter())
            .filter(|c| **c == reference)
            .count();
        assert_eq!(count, 1, "{}{:?}", reference.rank_label(), reference.suit);
    }
}

#[test]
fn larger_deck_sizes_replicate_the_catalog() {
    let options = GameOptions::default().with_deck_size(2 * DECK_SIZE);
    let game = WarGame::new(options, 42);

    assert_eq!(game.player_deck.len(), DECK_SIZE);
    assert_eq!(game.computer_deck.len(), DECK_SIZE);
}

#[test]
fn rank_comparison_is_antisymmetric_and_follows_the_table() {
    let deck = standard_deck();
    for a in &deck {
        for b in &deck {
            assert_eq!(a.compare_rank(b), b.compare_rank(a).reverse());
            assert_eq!(a.compare_rank(b), a.rank.cmp(&b.rank));
        }
    }
}

#[test]
fn ace_beats_king() {
    let mut game = WarGame::new(GameOptions::default(), 1);
    set_decks(
        &mut game,
        vec![card(Suit::Spades, KING)],
        vec![card(Suit::Hearts, ACE)],
    );

    let outcome = game.draw().unwrap();
    assert_eq!(
        outcome,
        DrawOutcome::Cards {
            player: card(Suit::Spades, KING),
            computer: card(Suit::Hearts, ACE),
        }
    );

    let result = game.last_result().unwrap();
    assert_eq!(result.winner, RoundWinner::Computer);
    assert_eq!(game.score(), Score { player: 0, computer: 1 });
}

#[test]
fn equal_ranks_tie() {
    let mut game = WarGame::new(GameOptions::default(), 1);
    set_decks(
        &mut game,
        vec![card(Suit::Clubs, 7)],
        vec![card(Suit::Diamonds, 7)],
    );

    game.draw().unwrap();

    let result = game.last_result().unwrap();
    assert_eq!(result.winner, RoundWinner::Tie);
    assert_eq!(game.score(), Score::default());
}

#[test]
fn draw_resolves_immediately_and_keeps_the_result_until_the_next_draw() {
    let mut game = WarGame::new(GameOptions::default(), 2);
    set_decks(
        &mut game,
        vec![card(Suit::Hearts, 9), card(Suit::Hearts, 2)],
        vec![card(Suit::Spades, 3), card(Suit::Spades, 5)],
    );

    game.draw().unwrap();
    assert_eq!(game.phase(), RoundPhase::Resolved);
    assert_eq!(game.last_result().unwrap().winner, RoundWinner::Player);

    game.draw().unwrap();
    assert_eq!(game.last_result().unwrap().winner, RoundWinner::Computer);
    assert_eq!(game.score(), Score { player: 1, computer: 1 });
}

#[test]
fn empty_decks_report_game_over_without_touching_the_score() {
    let mut game = WarGame::new(GameOptions::default(), 3);
    set_decks(&mut game, vec![], vec![]);

    assert_eq!(game.draw().unwrap(), DrawOutcome::GameOver);
    assert_eq!(game.phase(), RoundPhase::GameOver);
    assert!(game.is_over());
    assert_eq!(game.score(), Score::default());

    // The terminal status repeats instead of erroring.
    assert_eq!(game.draw().unwrap(), DrawOutcome::GameOver);
}

#[test]
fn a_full_game_consumes_both_decks() {
    let mut game = WarGame::new(GameOptions::default(), 4);

    let mut rounds: u32 = 0;
    while let DrawOutcome::Cards { .. } = game.draw().unwrap() {
        rounds += 1;
    }

    assert_eq!(rounds as usize, DECK_SIZE / 2);
    assert!(game.is_over());

    // At most one point is credited per round; ties score nothing.
    let score = game.score();
    assert!(score.player + score.computer <= rounds);
}

#[test]
fn start_resets_the_session() {
    let mut game = WarGame::new(GameOptions::default(), 5);

    game.draw().unwrap();
    game.draw().unwrap();

    game.start();

    assert_eq!(game.phase(), RoundPhase::Draw);
    assert_eq!(game.score(), Score::default());
    assert_eq!(game.cards_remaining(), DECK_SIZE / 2);
    assert!(game.last_result().is_none());
}

#[test]
fn rank_labels_cover_the_court_cards() {
    assert_eq!(card(Suit::Hearts, 10).rank_label(), "10");
    assert_eq!(card(Suit::Hearts, KING).rank_label(), "K");
    assert_eq!(card(Suit::Hearts, ACE).rank_label(), "A");
    assert_eq!(SUITS.len(), 4);
}
