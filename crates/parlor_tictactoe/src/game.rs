//! Round and session controller for tic-tac-toe.
//!
//! A session is a run of rounds against the same opponent. The human
//! always opens a round; turns alternate until a line is completed or the
//! board fills. The session ends when either side reaches
//! [`WIN_THRESHOLD`](super::WIN_THRESHOLD) wins or the human declines to
//! play again.

use super::error::TicTacToeError;
use super::player::{Player, Side};
use super::policy;
use super::score::{RoundOutcome, Scoreboard, wins_phrase};
use super::types::{Board, Marker};
use derive_getters::Getters;
use parlor_console::{Console, GameRng, joinor};
use tracing::{debug, info, instrument};

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    HumanTurn,
    ComputerTurn,
    RoundOver,
}

/// What a finished session looked like.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    rounds_played: u32,
    human_wins: u32,
    computer_wins: u32,
    /// Name of the player with more round wins; `None` when level.
    winner: Option<String>,
}

/// Tic-tac-toe session between a human and the computer.
#[derive(Debug)]
pub struct TicTacToe<'a, C: Console> {
    console: &'a mut C,
    rng: &'a mut GameRng,
    board: Board,
    human: Player,
    computer: Player,
    scoreboard: Scoreboard,
    rounds_played: u32,
}

impl<'a, C: Console> TicTacToe<'a, C> {
    /// Greets the human, asks for their name and marker, and seats a
    /// computer opponent.
    ///
    /// # Errors
    ///
    /// Returns [`TicTacToeError::Console`] if the console fails.
    #[instrument(skip_all)]
    pub fn setup(console: &'a mut C, rng: &'a mut GameRng) -> Result<Self, TicTacToeError> {
        console.display(&["Welcome to Tic Tac Toe!".to_string(), String::new()])?;

        let name = console.prompt_non_empty(
            "What is your name?",
            "Sorry, please enter at least one letter for your name.",
        )?;

        let markers = Marker::human_choices();
        let prompt = format!("Choose a marker: ({})", joinor(&markers));
        let marker = *console.select(&prompt, &markers)?;

        let human = Player::human(name, marker);
        let computer = Player::computer(rng);
        info!(human = %human.name(), computer = %computer.name(), %marker, "Players seated");

        Ok(Self::with_players(console, rng, human, computer))
    }

    /// Starts a session with players that are already chosen.
    pub fn with_players(
        console: &'a mut C,
        rng: &'a mut GameRng,
        human: Player,
        computer: Player,
    ) -> Self {
        Self {
            console,
            rng,
            board: Board::new(),
            human,
            computer,
            scoreboard: Scoreboard::new(),
            rounds_played: 0,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Session score so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// The human player.
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// The computer player.
    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// Plays rounds until the threshold is reached or the human stops.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or a board invariant is
    /// violated.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<SessionSummary, TicTacToeError> {
        self.console.clear_screen()?;

        loop {
            self.display_board()?;
            let outcome = self.play_round()?;
            self.display_result(outcome)?;
            self.scoreboard.record(outcome);
            self.display_total_wins()?;

            if self.scoreboard.threshold_reached() {
                info!("Win threshold reached");
                break;
            }
            if !self.console.confirm_replay()? {
                break;
            }
            self.reset()?;
            self.console
                .display(&["Let's play again!".to_string(), String::new()])?;
        }

        let summary = self.summary();
        match summary.winner() {
            Some(name) => self.console.say(&format!("{} wins!", name))?,
            None => self.console.say("It's a tie!")?,
        }
        self.console.say("Thanks for playing Tic Tac Toe!  Goodbye!")?;

        info!(?summary, "Session over");
        Ok(summary)
    }

    /// Plays one round on the current board, human first.
    ///
    /// Does not touch the scoreboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or a board invariant is
    /// violated.
    #[instrument(skip(self), fields(round = self.rounds_played + 1))]
    pub fn play_round(&mut self) -> Result<RoundOutcome, TicTacToeError> {
        let mut phase = Phase::HumanTurn;
        loop {
            debug!(?phase, "Round phase");
            phase = match phase {
                Phase::HumanTurn => {
                    self.human_moves()?;
                    self.after_move(Phase::ComputerTurn)
                }
                Phase::ComputerTurn => {
                    self.computer_moves()?;
                    let next = self.after_move(Phase::HumanTurn);
                    if next == Phase::HumanTurn {
                        self.console.clear_screen()?;
                        self.display_board()?;
                    }
                    next
                }
                Phase::RoundOver => break,
            };
        }

        self.rounds_played += 1;
        let outcome = self.outcome();
        info!(?outcome, "Round over");
        Ok(outcome)
    }

    /// Clears the board for a new round. Players and score carry over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), TicTacToeError> {
        self.board.reset();
        self.console.clear_screen()?;
        Ok(())
    }

    /// Snapshot of the session so far.
    pub fn summary(&self) -> SessionSummary {
        let winner = self.scoreboard.leader().map(|side| match side {
            Side::Human => self.human.name().clone(),
            Side::Computer => self.computer.name().clone(),
        });
        SessionSummary {
            rounds_played: self.rounds_played,
            human_wins: self.scoreboard.human_wins(),
            computer_wins: self.scoreboard.computer_wins(),
            winner,
        }
    }

    fn after_move(&self, next: Phase) -> Phase {
        let (human, computer) = self.markers();
        if self.board.someone_won(human, computer) || self.board.is_full() {
            Phase::RoundOver
        } else {
            next
        }
    }

    fn outcome(&self) -> RoundOutcome {
        let (human, computer) = self.markers();
        match self.board.winner(human, computer) {
            Some(marker) if marker == human => RoundOutcome::Won(Side::Human),
            Some(_) => RoundOutcome::Won(Side::Computer),
            None => RoundOutcome::Tie,
        }
    }

    fn markers(&self) -> (Marker, Marker) {
        (*self.human.marker(), *self.computer.marker())
    }

    fn human_moves(&mut self) -> Result<(), TicTacToeError> {
        let open = self.board.unmarked_positions();
        let prompt = format!("Choose a square from the following: ({})", joinor(&open));
        let square = *self.console.select(&prompt, &open)?;
        self.board.mark(square, *self.human.marker())?;
        Ok(())
    }

    fn computer_moves(&mut self) -> Result<(), TicTacToeError> {
        let (human, computer) = self.markers();
        let square = policy::choose_move(&self.board, computer, human, self.rng)
            .ok_or(TicTacToeError::NoMoveAvailable)?;
        self.board.mark(square, computer)?;
        Ok(())
    }

    fn display_board(&mut self) -> Result<(), TicTacToeError> {
        let mut lines = vec![
            format!(
                "{}, your marker is {}.  Your computer opponent {}'s marker is {}.",
                self.human.name(),
                self.human.marker(),
                self.computer.name(),
                self.computer.marker()
            ),
            String::new(),
        ];
        lines.extend(self.board.render());
        lines.push(String::new());
        self.console.display(&lines)?;
        Ok(())
    }

    fn display_result(&mut self, outcome: RoundOutcome) -> Result<(), TicTacToeError> {
        self.display_board()?;
        let message = match outcome {
            RoundOutcome::Won(Side::Human) => "You won the round!".to_string(),
            RoundOutcome::Won(Side::Computer) => {
                format!("{} won the round!", self.computer.name())
            }
            RoundOutcome::Tie => "This round is a tie!".to_string(),
        };
        self.console.say(&message)?;
        Ok(())
    }

    fn display_total_wins(&mut self) -> Result<(), TicTacToeError> {
        let lines = [
            format!(
                "{} has {}",
                self.human.name(),
                wins_phrase(self.scoreboard.human_wins())
            ),
            format!(
                "{} has {}",
                self.computer.name(),
                wins_phrase(self.scoreboard.computer_wins())
            ),
        ];
        self.console.display(&lines)?;
        Ok(())
    }
}
