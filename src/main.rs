use anyhow::{Context, Result};

use greedy_chess::agent::{AIPlayer, ConsolePlayer, Evaluator, Player, Seat};
use greedy_chess::config::{GameConfig, PlayerConfig};
use greedy_chess::game_repr::Color;
use greedy_chess::orchestrator::{Orchestrator, TurnOutcome};

fn boxed<P: Player + 'static>(player: P) -> Box<dyn Player> {
    Box::new(player)
}

fn build_computer(color: Color, config: PlayerConfig) -> Result<Box<dyn Player>> {
    let PlayerConfig::Computer { strategy, threads } = config else {
        anyhow::bail!("{} is not a computer player", color.name());
    };
    let evaluator = Evaluator::new(strategy)
        .with_threads(threads)
        .with_context(|| format!("setting up the {} computer", color.name()))?;
    let name = format!("{} AI ({})", color.name(), strategy.name());
    Ok(boxed(AIPlayer::new(evaluator, name)))
}

/// Both humans share one console so only one of them ever holds stdin.
fn build_players(config: &GameConfig) -> Result<(Box<dyn Player>, Box<dyn Player>)> {
    match (config.white, config.black) {
        (PlayerConfig::Human, PlayerConfig::Human) => {
            let (white, black) = Seat::pair(ConsolePlayer::stdio("Human".to_string()));
            Ok((boxed(white), boxed(black)))
        }
        (PlayerConfig::Human, black) => Ok((
            boxed(ConsolePlayer::stdio("White (human)".to_string())),
            build_computer(Color::Black, black)?,
        )),
        (white, PlayerConfig::Human) => Ok((
            build_computer(Color::White, white)?,
            boxed(ConsolePlayer::stdio("Black (human)".to_string())),
        )),
        (white, black) => Ok((
            build_computer(Color::White, white)?,
            build_computer(Color::Black, black)?,
        )),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::from_args(std::env::args().skip(1)).context("parsing arguments")?;
    log::info!("Starting game: {:?} vs {:?}", config.white, config.black);

    let (white, black) = build_players(&config)?;
    let mut orchestrator = Orchestrator::new(white, black).with_max_plies(config.max_plies);

    println!("{}\n", orchestrator.state());
    let result = orchestrator.run_with(|game, outcome| match outcome {
        TurnOutcome::Moved(mv) => {
            println!("{} played {}\n", game.state().side_to_move().opposite().name(), mv);
            println!("{}\n", game.state());
            if let (Some(result), true) = (game.result(), game.has_human()) {
                println!("{}. Type undo, reset or quit.", result);
            }
        }
        TurnOutcome::Rejected(mv) => println!("{} is not a legal move", mv),
        TurnOutcome::TakeBack | TurnOutcome::Reset => println!("{}\n", game.state()),
        TurnOutcome::Quit | TurnOutcome::GameOver(_) => {}
    });

    match result {
        Some(result) => println!("{}", result),
        None => println!("Game stopped after {} plies", orchestrator.state().move_log().len()),
    }
    Ok(())
}
