//! Twenty-One rounds dealt from stacked decks through an in-memory console.

use parlor_console::{GameRng, TerminalConsole};
use parlor_twentyone::{
    Card, DEALER_NAMES, Deck, DeckError, Participant, Rank, Showdown, Suit, TwentyOne,
    TwentyOneError,
};
use std::io::Cursor;
use std::time::Duration;

type BufferConsole = TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> BufferConsole {
    TerminalConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
        .with_clear_screen(false)
        .with_pauses(false)
}

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(suit, rank)
}

/// Plays one round from `deal_order` and returns the showdown, the dealer's
/// name, the dealer's final card count, and everything printed.
fn play_stacked(deal_order: Vec<Card>, input: &str) -> (Showdown, String, usize, String) {
    let mut console = console(input);
    let mut rng = GameRng::seeded(7);
    let mut game = TwentyOne::with_player(&mut console, &mut rng, Participant::player("Alice"))
        .with_dealer_pause(Duration::ZERO);

    let showdown = game.play_round(Deck::stacked(deal_order)).expect("round");
    let dealer = game.dealer().name().clone();
    let dealer_cards = game.dealer().hand().cards().len();
    drop(game);

    let out = String::from_utf8(console.into_output()).unwrap();
    (showdown, dealer, dealer_cards, out)
}

#[test]
fn test_dealer_wins_nineteen_to_fifteen() {
    let deck = vec![
        card(Rank::Two, Suit::Spades),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::King, Suit::Spades),
    ];
    let (showdown, dealer, dealer_cards, out) = play_stacked(deck, "hit\nstay\n");

    assert_eq!(showdown, Showdown::DealerWins);
    assert_eq!(dealer_cards, 2);
    assert!(out.contains("Alice's hand is 2 of Spades, and 3 of Hearts."));
    assert!(out.contains(&format!(
        "{} shows 10 of Diamonds.  The second card is face down.",
        dealer
    )));
    assert!(out.contains("Alice's hand value is 5."));
    assert!(out.contains("You chose to hit, and were dealt the K of Spades."));
    assert!(out.contains("Alice's hand value is 15."));
    assert!(out.contains("Alice's hand is 2 of Spades, 3 of Hearts, and K of Spades, with a value of 15."));
    assert!(out.contains(&format!(
        "{}'s hand is 10 of Diamonds, and 9 of Clubs, with a value of 19.",
        dealer
    )));
    assert!(out.trim_end().ends_with(&format!("{} wins.", dealer)));
}

#[test]
fn test_dealer_chases_high_player() {
    let deck = vec![
        card(Rank::Ten, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Two, Suit::Hearts),
    ];
    let (showdown, dealer, dealer_cards, out) = play_stacked(deck, "stay\n");

    // 17 hits towards 19, the ace drops to one for 18, then 20 stands.
    assert_eq!(dealer_cards, 4);
    assert!(out.contains(&format!("{} chose to hit, and was dealt the A of Spades.", dealer)));
    assert!(out.contains(&format!("{} chose to hit, and was dealt the 2 of Hearts.", dealer)));
    assert!(out.contains("with a value of 18."));
    assert!(out.contains("with a value of 20."));
    assert_eq!(showdown, Showdown::DealerWins);
}

#[test]
fn test_dealer_stands_on_seventeen_against_low_player() {
    let deck = vec![
        card(Rank::Ten, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Seven, Suit::Clubs),
    ];
    let (showdown, _, dealer_cards, out) = play_stacked(deck, "stay\n");

    assert_eq!(dealer_cards, 2);
    assert!(!out.contains("chose to hit, and was dealt"));
    assert_eq!(showdown, Showdown::DealerWins);
}

#[test]
fn test_natural_twenty_one_skips_both_turns() {
    let deck = vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Hearts),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Seven, Suit::Clubs),
    ];
    let (showdown, _, dealer_cards, out) = play_stacked(deck, "");

    assert!(!out.contains("Would you like to hit or stay?"));
    assert!(out.contains("Twenty-One!  You win!"));
    assert_eq!(dealer_cards, 2);
    assert_eq!(showdown, Showdown::PlayerHigher);
    assert!(out.trim_end().ends_with("You win!"));
}

#[test]
fn test_natural_against_natural_is_a_tie() {
    let deck = vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Hearts),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::Queen, Suit::Clubs),
    ];
    let (showdown, _, _, out) = play_stacked(deck, "");

    assert_eq!(showdown, Showdown::Tie);
    assert!(out.contains("Twenty-One!\n"));
    assert!(!out.contains("You win!"));
    assert!(out.trim_end().ends_with("It's a tie!"));
}

#[test]
fn test_dealer_natural_skips_player_turn() {
    let deck = vec![
        card(Rank::Ten, Suit::Spades),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::King, Suit::Clubs),
    ];
    let (showdown, dealer, dealer_cards, out) = play_stacked(deck, "");

    assert!(!out.contains("Would you like to hit or stay?"));
    assert_eq!(dealer_cards, 2);
    assert_eq!(showdown, Showdown::DealerWins);
    assert!(out.contains(&format!("{} wins.", dealer)));
}

#[test]
fn test_player_bust_skips_dealer_turn() {
    let deck = vec![
        card(Rank::Ten, Suit::Spades),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Eight, Suit::Clubs),
        card(Rank::King, Suit::Spades),
    ];
    let (showdown, dealer, dealer_cards, out) = play_stacked(deck, "hit\n");

    assert!(out.contains("Alice's hand value is 26."));
    assert!(out.contains(&format!("You busted!  {} wins.", dealer)));
    assert!(!out.contains(&format!("{}'s hand is", dealer)));
    assert_eq!(dealer_cards, 2);
    assert_eq!(showdown, Showdown::DealerWins);
}

#[test]
fn test_dealer_bust_pays_player() {
    let deck = vec![
        card(Rank::Ten, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Six, Suit::Clubs),
        card(Rank::King, Suit::Spades),
    ];
    let (showdown, dealer, _, out) = play_stacked(deck, "stay\n");

    assert_eq!(showdown, Showdown::DealerBusted);
    assert!(showdown.player_won());
    assert!(out.contains(&format!("{} busts!  You win!", dealer)));
}

#[test]
fn test_short_deck_is_an_error() {
    let mut console = console("");
    let mut rng = GameRng::seeded(1);
    let mut game = TwentyOne::with_player(&mut console, &mut rng, Participant::player("Alice"));

    let short = Deck::stacked([
        card(Rank::Two, Suit::Spades),
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Spades),
    ]);
    let err = game.play_round(short).unwrap_err();
    assert!(matches!(err, TwentyOneError::Deck(DeckError::Exhausted)));
}

#[test]
fn test_next_round_starts_with_fresh_hands() {
    let mut console = console("stay\nstay\n");
    let mut rng = GameRng::seeded(5);
    let mut game = TwentyOne::with_player(&mut console, &mut rng, Participant::player("Alice"))
        .with_dealer_pause(Duration::ZERO);

    let first = vec![
        card(Rank::Ten, Suit::Spades),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Two, Suit::Clubs),
    ];
    game.play_round(Deck::stacked(first)).expect("first round");
    assert_eq!(game.dealer().hand().cards().len(), 3);

    let second_player = [card(Rank::Four, Suit::Hearts), card(Rank::Five, Suit::Hearts)];
    let second = vec![
        second_player[0],
        second_player[1],
        card(Rank::King, Suit::Diamonds),
        card(Rank::Queen, Suit::Clubs),
    ];
    game.play_round(Deck::stacked(second)).expect("second round");

    assert_eq!(game.player().hand().cards(), &second_player);
    assert_eq!(game.dealer().hand().cards().len(), 2);
    assert_eq!(*game.summary().rounds_played(), 2);
}

#[test]
fn test_first_dealer_is_the_first_draw_from_the_seed() {
    let deck = vec![
        card(Rank::Ten, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Eight, Suit::Clubs),
    ];
    let (_, dealer, _, _) = play_stacked(deck, "stay\n");

    let expected = Participant::dealer(&mut GameRng::seeded(7));
    assert_eq!(&dealer, expected.name());
}

#[test]
fn test_setup_reprompts_for_name() {
    let mut console = console("\nAlice\n");
    let mut rng = GameRng::seeded(2);
    let game = TwentyOne::setup(&mut console, &mut rng).expect("setup");

    assert_eq!(game.player().name(), "Alice");
    assert!(DEALER_NAMES.contains(&game.dealer().name().as_str()));
    drop(game);

    let out = String::from_utf8(console.into_output()).unwrap();
    assert!(out.starts_with("Welcome to Twenty-One!\nWhat's your name?\n"));
    assert_eq!(out.matches("Sorry, must enter a value.").count(), 1);
}

#[test]
fn test_play_single_round_then_leave() {
    // Whether or not a natural skips the hit/stay prompt, "stay" is either
    // taken there or rejected by the replay prompt, which then reads "n".
    let mut console = console("stay\nn\n");
    let mut rng = GameRng::seeded(42);
    let mut game = TwentyOne::with_player(&mut console, &mut rng, Participant::player("Alice"))
        .with_dealer_pause(Duration::ZERO);

    let summary = game.play().expect("table");
    assert_eq!(*summary.rounds_played(), 1);
    assert_eq!(summary.outcomes().len(), 1);
    drop(game);

    let out = String::from_utf8(console.into_output()).unwrap();
    assert!(out.contains("Would you like to play again? (y/n)"));
    assert!(out.trim_end().ends_with("Thanks for playing Twenty-One!  Goodbye!"));
}

#[test]
fn test_closed_input_ends_table_with_error() {
    let mut console = console("");
    let mut rng = GameRng::seeded(8);
    let mut game = TwentyOne::with_player(&mut console, &mut rng, Participant::player("Alice"));

    let err = game.play().unwrap_err();
    assert!(matches!(err, TwentyOneError::Console(_)));
}
