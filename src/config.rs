//! Game configuration types.
//!
//! A [`GameConfig`] holds everything needed to start a game: who plays each
//! color and an optional ply limit. The binary builds one from its
//! command-line arguments with [`GameConfig::from_args`].

use crate::agent::ai::Strategy;
use crate::error::{ChessError, Result};
use crate::game_repr::Color;

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Person typing moves at the console
    Human,
    /// Computer player with the given strategy and scoring threads
    Computer { strategy: Strategy, threads: usize },
}

impl PlayerConfig {
    pub fn computer(strategy: Strategy) -> Self {
        PlayerConfig::Computer {
            strategy,
            threads: num_cpus::get(),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, PlayerConfig::Human)
    }

    fn parse(flag: &str, kind: &str) -> Result<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerConfig::Human),
            "greedy" => Ok(PlayerConfig::computer(Strategy::Greedy)),
            "random" => Ok(PlayerConfig::computer(Strategy::Random)),
            _ => {
                log::debug!("rejecting {} {}", flag, kind);
                Err(ChessError::UnknownPlayer(kind.to_string()))
            }
        }
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Configuration for the White player
    pub white: PlayerConfig,
    /// Configuration for the Black player
    pub black: PlayerConfig,
    /// Stop after this many plies, `None` to play until the game ends
    pub max_plies: Option<u32>,
}

impl Default for GameConfig {
    /// A person with the white pieces against the greedy computer.
    fn default() -> Self {
        Self::pvai(Color::White, Strategy::Greedy)
    }
}

impl GameConfig {
    /// Create a PvP game configuration.
    pub fn pvp() -> Self {
        Self {
            white: PlayerConfig::Human,
            black: PlayerConfig::Human,
            max_plies: None,
        }
    }

    /// Create a PvAI game configuration.
    ///
    /// # Arguments
    /// * `user_color` - The color the human player will play as
    /// * `strategy` - How the computer opponent picks its moves
    pub fn pvai(user_color: Color, strategy: Strategy) -> Self {
        let (white, black) = match user_color {
            Color::White => (PlayerConfig::Human, PlayerConfig::computer(strategy)),
            Color::Black => (PlayerConfig::computer(strategy), PlayerConfig::Human),
        };

        Self {
            white,
            black,
            max_plies: None,
        }
    }

    /// Create an AIvAI game configuration.
    pub fn aivai(white: Strategy, black: Strategy) -> Self {
        Self {
            white: PlayerConfig::computer(white),
            black: PlayerConfig::computer(black),
            max_plies: None,
        }
    }

    /// Parses command-line arguments (without the program name).
    ///
    /// ```text
    /// --white <human|greedy|random>   default human
    /// --black <human|greedy|random>   default greedy
    /// --max-plies <n>                 stop after n plies
    /// --threads <n>                   scoring threads per computer player
    /// ```
    ///
    /// `--threads` applies to both computer players wherever it appears.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = GameConfig::default();
        let mut threads = None;

        let mut args = args.into_iter().map(Into::into);
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--white" | "--black" | "--max-plies" | "--threads" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ChessError::MissingValue(flag.clone()))?;

                    match flag.as_str() {
                        "--white" => config.white = PlayerConfig::parse(&flag, &value)?,
                        "--black" => config.black = PlayerConfig::parse(&flag, &value)?,
                        "--max-plies" => config.max_plies = Some(parse_count(&flag, &value)?),
                        _ => threads = Some(parse_count(&flag, &value)? as usize),
                    }
                }
                _ => return Err(ChessError::UnknownArgument(flag)),
            }
        }

        if let Some(n) = threads {
            for player in [&mut config.white, &mut config.black] {
                if let PlayerConfig::Computer { threads, .. } = player {
                    *threads = n;
                }
            }
        }

        Ok(config)
    }
}

/// A strictly positive count.
fn parse_count(flag: &str, value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ChessError::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string(),
        }),
    }
}
