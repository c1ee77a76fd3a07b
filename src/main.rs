//! EchoGrid binary: wire the console collaborators to the engine.

use anyhow::Result;
use clap::Parser;
use echogrid::cli::{Cli, Mode};
use echogrid::console::{ConsoleView, HumanParticipant};
use echogrid::game::director::GameDirector;
use echogrid::game::participant::{AiParticipant, Participant};
use echogrid::game::rng::GameRng;
use echogrid::game::Player;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so tracing output does not interleave with the
    // rendered board.
    let log_file = std::fs::File::create("echogrid.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let mut rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), mode = ?cli.mode, "starting match");

    let (one, two): (Box<dyn Participant>, Box<dyn Participant>) = match cli.mode {
        Mode::HumanAi => (
            Box::new(HumanParticipant::new("You", Player::One)),
            Box::new(AiParticipant::new("The Echo", Player::Two, rng.fork())),
        ),
        Mode::HumanHuman => (
            Box::new(HumanParticipant::new("Player One", Player::One)),
            Box::new(HumanParticipant::new("Player Two", Player::Two)),
        ),
        Mode::AiAi => (
            Box::new(AiParticipant::new("Echo", Player::One, rng.fork())),
            Box::new(AiParticipant::new("Grid", Player::Two, rng.fork())),
        ),
    };

    let mut view = ConsoleView::new(!cli.fast);
    view.welcome()?;

    let mut director = GameDirector::new(one, two, Box::new(rng), Box::new(view));
    let result = director.run()?;
    info!(?result, "match finished");

    Ok(())
}
