//! Human player implementation that reads moves from a text console.
//!
//! `ConsolePlayer` stands in for the click-to-move board: the person types
//! the two squares of a move (`e2e4`), which the orchestrator turns into a
//! candidate and checks against the legal set. A few words are understood
//! as commands:
//!
//! - `undo` / `u` takes back the last move
//! - `reset` / `r` starts over
//! - `moves` lists the legal moves
//! - `quit` / `q` ends the session
//!
//! Text that is neither a command nor two square names is reported and the
//! prompt repeats. End of input counts as quitting.
//!
//! Input and output are generic so tests can drive the player from a byte
//! slice and inspect what it printed.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use crate::agent::player::{Action, Player};
use crate::game_repr::{parse_move_text, GameState, Move};

pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl ConsolePlayer<io::StdinLock<'static>, io::Stdout> {
    /// A console player on the process's stdin and stdout.
    pub fn stdio(name: String) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), name)
    }
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W, name: String) -> Self {
        Self { input, output, name }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Prompts until the person types something meaningful.
    fn read_action(&mut self, state: &GameState, legal: &BTreeSet<Move>) -> io::Result<Action> {
        loop {
            write!(self.output, "{} to move> ", state.side_to_move().name())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Action::Quit);
            }

            match line.trim().to_ascii_lowercase().as_str() {
                "" => continue,
                "undo" | "u" => return Ok(Action::TakeBack),
                "reset" | "r" => return Ok(Action::Reset),
                "quit" | "q" | "exit" => return Ok(Action::Quit),
                "moves" => {
                    let listed: Vec<String> = legal.iter().map(|mv| mv.notation()).collect();
                    writeln!(self.output, "{}", listed.join(" "))?;
                }
                text => match parse_move_text(text) {
                    Ok((start, end)) => return Ok(Action::Play(state.move_between(start, end))),
                    Err(err) => writeln!(self.output, "{}", err)?,
                },
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn get_move(&mut self, state: &GameState, legal: &BTreeSet<Move>) -> Option<Action> {
        match self.read_action(state, legal) {
            Ok(action) => Some(action),
            Err(err) => {
                log::warn!("[{}] console unavailable: {}", self.name, err);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}
