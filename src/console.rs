//! Interactive console driver.
//!
//! [`Console`] runs a [`Session`] against any line-based input and text
//! output. The binary wires it to stdin and stdout; tests feed it scripted
//! input.

use std::io::{BufRead, Write};

use tracing::{Level, event};

use crate::card::Card;
use crate::error::{MenuError, PlayError};
use crate::game::Session;
use crate::hand::HandStatus;
use crate::menu::MenuOption;
use crate::result::{Draw, Resolution, RoundOutcome, Showdown};
use crate::stats::Stats;

const fn article(card: Card) -> &'static str {
    match card.rank {
        1 | 8 => "an",
        _ => "a",
    }
}

/// Console front end for a session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading options from `input` and narrating to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns its input and output.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Plays rounds until the player exits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn run(&mut self, session: &mut Session) -> Result<(), PlayError> {
        while !session.is_terminated() {
            if session.hand().is_empty() {
                writeln!(self.output, "\nSTART GAME #{}\n", session.stats().games)?;
            }

            let draw = session.draw_card()?;
            self.print_draw(&draw)?;

            match draw.status {
                HandStatus::Blackjack => writeln!(self.output, "\nBLACKJACK! You win!")?,
                HandStatus::Bust => writeln!(
                    self.output,
                    "\nYou exceeded {}! You lose.",
                    session.options().target
                )?,
                HandStatus::Active => {
                    let outcome = self.menu(session)?;
                    event!(Level::TRACE, ?outcome, "menu closed");
                }
            }
        }

        Ok(())
    }

    /// Shows the menu until the player draws, holds, or exits.
    ///
    /// Statistics requests and invalid input show the menu again. The end of
    /// the input counts as an exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written, or if the
    /// session is not waiting for a decision when the player holds.
    pub fn menu(&mut self, session: &mut Session) -> Result<RoundOutcome, PlayError> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt_line("Choose an option: ")? else {
                event!(Level::DEBUG, "input closed");
                session.exit();
                return Ok(RoundOutcome::Exited);
            };

            let choice = line.parse::<MenuOption>();
            event!(Level::TRACE, ?choice, "menu input");

            match choice {
                Ok(MenuOption::Draw) => return Ok(RoundOutcome::Continue),
                Ok(MenuOption::Hold) => {
                    let showdown = session.hold()?;
                    self.print_showdown(&showdown)?;
                    return Ok(showdown.resolution.into());
                }
                Ok(MenuOption::Stats) => self.print_stats(session.stats())?,
                Ok(MenuOption::Exit) => {
                    session.exit();
                    return Ok(RoundOutcome::Exited);
                }
                Err(MenuError::NotANumber) => {
                    writeln!(self.output, "\nPlease enter a number.\n")?;
                }
                Err(MenuError::OutOfRange(_)) => {
                    writeln!(self.output, "\nInvalid input!")?;
                    writeln!(
                        self.output,
                        "Please enter an integer value between 1 and 4.\n"
                    )?;
                }
            }
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, PlayError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_owned()))
    }

    fn print_draw(&mut self, draw: &Draw) -> Result<(), PlayError> {
        writeln!(
            self.output,
            "Your card is {} {}!",
            article(draw.card),
            draw.card
        )?;
        writeln!(self.output, "Your hand is: {}\n", draw.total)?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), PlayError> {
        for option in MenuOption::ALL {
            writeln!(self.output, "{option}")?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn print_showdown(&mut self, showdown: &Showdown) -> Result<(), PlayError> {
        writeln!(self.output, "\nDealer's hand: {}", showdown.dealer_total)?;
        writeln!(self.output, "Your hand is: {}\n", showdown.player_total)?;

        let message = match showdown.resolution {
            Resolution::DealerBust => "Dealer busts! You win!",
            Resolution::PlayerWins => "You win!",
            Resolution::DealerWins => "Dealer wins!",
            Resolution::Tie => "It's a tie! No one wins!",
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn print_stats(&mut self, stats: &Stats) -> Result<(), PlayError> {
        writeln!(self.output, "\n{stats}\n")?;
        Ok(())
    }
}
