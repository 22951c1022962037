//! Round controller for Twenty-One.
//!
//! Each round: deal two cards each, let the player draw, let the dealer
//! draw, compare. Rounds are independent; nothing is scored across them.

use super::deck::Deck;
use super::error::TwentyOneError;
use super::hand::Hand;
use super::participant::{DEALER_NAMES, Participant};
use derive_getters::Getters;
use parlor_console::{Console, GameRng};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// How long the dealer lingers after each draw by default.
pub const DEFAULT_DEALER_PAUSE: Duration = Duration::from_secs(3);

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Deal,
    PlayerTurn,
    DealerTurn,
    Showdown,
}

/// Result of comparing the final hands.
///
/// Checked in declaration order: the first that applies wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Showdown {
    /// The dealer went over twenty-one.
    DealerBusted,
    /// The player is higher without busting.
    PlayerHigher,
    /// Equal totals.
    Tie,
    /// Everything else, including a busted player.
    DealerWins,
}

impl Showdown {
    /// Compares the final hands.
    pub fn evaluate(player: &Hand, dealer: &Hand) -> Self {
        let (player, dealer) = (player.value(), dealer.value());
        if dealer > super::hand::TWENTY_ONE {
            Showdown::DealerBusted
        } else if player > dealer && player <= super::hand::TWENTY_ONE {
            Showdown::PlayerHigher
        } else if player == dealer {
            Showdown::Tie
        } else {
            Showdown::DealerWins
        }
    }

    /// True when the player takes the round.
    pub fn player_won(self) -> bool {
        matches!(self, Showdown::DealerBusted | Showdown::PlayerHigher)
    }
}

/// What happened at the table.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TableSummary {
    rounds_played: u32,
    /// Showdown of every round, oldest first.
    outcomes: Vec<Showdown>,
}

/// A Twenty-One table: one player against a dealer.
#[derive(Debug)]
pub struct TwentyOne<'a, C: Console> {
    console: &'a mut C,
    rng: &'a mut GameRng,
    player: Participant,
    dealer: Participant,
    dealer_pause: Duration,
    rounds_played: u32,
    outcomes: Vec<Showdown>,
}

impl<'a, C: Console> TwentyOne<'a, C> {
    /// Greets the player and asks for their name.
    ///
    /// # Errors
    ///
    /// Returns [`TwentyOneError::Console`] if the console fails.
    #[instrument(skip_all)]
    pub fn setup(console: &'a mut C, rng: &'a mut GameRng) -> Result<Self, TwentyOneError> {
        console.clear_screen()?;
        console.say("Welcome to Twenty-One!")?;
        let name = console.prompt_non_empty("What's your name?", "Sorry, must enter a value.")?;
        info!(player = %name, "Player seated");
        Ok(Self::with_player(console, rng, Participant::player(name)))
    }

    /// Opens a table for a player who is already named.
    ///
    /// The real dealer sits down when the first round is dealt.
    pub fn with_player(console: &'a mut C, rng: &'a mut GameRng, player: Participant) -> Self {
        Self {
            console,
            rng,
            player,
            dealer: Participant::dealer_named(DEALER_NAMES[0]),
            dealer_pause: DEFAULT_DEALER_PAUSE,
            rounds_played: 0,
            outcomes: Vec::new(),
        }
    }

    /// Sets how long to wait after each dealer draw.
    pub fn with_dealer_pause(mut self, pause: Duration) -> Self {
        self.dealer_pause = pause;
        self
    }

    /// The human player.
    pub fn player(&self) -> &Participant {
        &self.player
    }

    /// This round's dealer.
    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Plays rounds with freshly shuffled decks until the player stops.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or the deck runs dry.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<TableSummary, TwentyOneError> {
        loop {
            let deck = Deck::shuffled(self.rng);
            self.play_round(deck)?;
            if !self.console.confirm_replay()? {
                break;
            }
            self.console.clear_screen()?;
        }
        self.console.say("Thanks for playing Twenty-One!  Goodbye!")?;

        let summary = self.summary();
        info!(?summary, "Table closed");
        Ok(summary)
    }

    /// Plays one round dealt from `deck`.
    ///
    /// Both hands start empty and a new dealer sits down.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or `deck` runs out.
    #[instrument(skip(self, deck), fields(round = self.rounds_played + 1, cards = deck.len()))]
    pub fn play_round(&mut self, mut deck: Deck) -> Result<Showdown, TwentyOneError> {
        self.player.discard_hand();
        self.dealer = Participant::dealer(self.rng);

        let mut phase = Phase::Deal;
        let showdown = loop {
            debug!(?phase, "Round phase");
            phase = match phase {
                Phase::Deal => {
                    self.deal_initial_cards(&mut deck)?;
                    self.show_initial_cards()?;
                    Phase::PlayerTurn
                }
                Phase::PlayerTurn => {
                    if !(self.player.hand().game_over() || self.dealer.hand().game_over()) {
                        self.player_turn(&mut deck)?;
                    }
                    self.display_player_turn_results()?;
                    Phase::DealerTurn
                }
                Phase::DealerTurn => {
                    if !self.player.hand().game_over() {
                        self.dealer_turn(&mut deck)?;
                    }
                    Phase::Showdown
                }
                Phase::Showdown => {
                    break Showdown::evaluate(self.player.hand(), self.dealer.hand());
                }
            };
        };

        self.show_result(showdown)?;
        self.rounds_played += 1;
        self.outcomes.push(showdown);
        info!(
            ?showdown,
            player_won = showdown.player_won(),
            player = self.player.hand().value(),
            dealer = self.dealer.hand().value(),
            "Round over"
        );
        Ok(showdown)
    }

    /// Snapshot of the table so far.
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            rounds_played: self.rounds_played,
            outcomes: self.outcomes.clone(),
        }
    }

    fn deal_initial_cards(&mut self, deck: &mut Deck) -> Result<(), TwentyOneError> {
        for _ in 0..2 {
            self.player.hit(deck.deal()?);
        }
        for _ in 0..2 {
            self.dealer.hit(deck.deal()?);
        }
        Ok(())
    }

    fn show_initial_cards(&mut self) -> Result<(), TwentyOneError> {
        self.console.say(&format!(
            "{}'s hand is {}.",
            self.player.name(),
            self.player.hand().describe()
        ))?;
        if let Some(up_card) = self.dealer.hand().cards().first() {
            self.console.say(&format!(
                "{} shows {}.  The second card is face down.",
                self.dealer.name(),
                up_card
            ))?;
        }
        Ok(())
    }

    fn player_turn(&mut self, deck: &mut Deck) -> Result<(), TwentyOneError> {
        self.show_value(Who::Player)?;
        while !self.player.hand().game_over()
            && self
                .player
                .decide_to_continue(self.dealer.hand(), self.console)?
        {
            let card = deck.deal()?;
            self.player.hit(card);
            self.console
                .say(&format!("You chose to hit, and were dealt the {}.", card))?;
            self.show_value(Who::Player)?;
        }
        Ok(())
    }

    fn display_player_turn_results(&mut self) -> Result<(), TwentyOneError> {
        self.console.clear_screen()?;
        self.show_hand_and_value(Who::Player)?;
        if self.player.hand().busted() {
            self.console
                .say(&format!("You busted!  {} wins.", self.dealer.name()))?;
        }
        if self.player.hand().twenty_one() {
            // A dealer dealt 21 still pushes at the showdown.
            if self.dealer.hand().twenty_one() {
                self.console.say("Twenty-One!")?;
            } else {
                self.console.say("Twenty-One!  You win!")?;
            }
        }
        Ok(())
    }

    fn dealer_turn(&mut self, deck: &mut Deck) -> Result<(), TwentyOneError> {
        self.show_hand_and_value(Who::Dealer)?;
        while self
            .dealer
            .decide_to_continue(self.player.hand(), self.console)?
        {
            self.console.clear_screen()?;
            let card = deck.deal()?;
            self.dealer.hit(card);
            self.console.say(&format!(
                "{} chose to hit, and was dealt the {}.",
                self.dealer.name(),
                card
            ))?;
            self.show_hand_and_value(Who::Dealer)?;
            self.console.pause(self.dealer_pause)?;
        }
        Ok(())
    }

    fn show_result(&mut self, showdown: Showdown) -> Result<(), TwentyOneError> {
        let message = match showdown {
            Showdown::DealerBusted => format!("{} busts!  You win!", self.dealer.name()),
            Showdown::PlayerHigher => "You win!".to_string(),
            Showdown::Tie => "It's a tie!".to_string(),
            Showdown::DealerWins => format!("{} wins.", self.dealer.name()),
        };
        self.console.say(&message)?;
        Ok(())
    }

    fn show_value(&mut self, who: Who) -> Result<(), TwentyOneError> {
        let participant = self.participant(who);
        let line = format!(
            "{}'s hand value is {}.",
            participant.name(),
            participant.hand().value()
        );
        self.console.say(&line)?;
        Ok(())
    }

    fn show_hand_and_value(&mut self, who: Who) -> Result<(), TwentyOneError> {
        let participant = self.participant(who);
        let line = format!(
            "{}'s hand is {}, with a value of {}.",
            participant.name(),
            participant.hand().describe(),
            participant.hand().value()
        );
        self.console.say(&line)?;
        Ok(())
    }

    fn participant(&self, who: Who) -> &Participant {
        match who {
            Who::Player => &self.player,
            Who::Dealer => &self.dealer,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Who {
    Player,
    Dealer,
}
