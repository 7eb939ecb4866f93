use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_ai::ai::Strategy;
use connect_four_ai::config::AppConfig;
use connect_four_ai::game::Player;
use connect_four_ai::ui::Session;

/// Play Connect Four against the machine.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the machine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Your side: x (moves first) or o. Asked interactively when omitted
    #[arg(long)]
    side: Option<String>,

    /// Machine strategy: monte_carlo, negamax, or hybrid
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Override rollouts per column (difficulty)
    #[arg(long)]
    simulations: Option<u32>,

    /// Seed the machine's random source for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(strategy) = cli.strategy {
        app_config.ai.strategy = strategy;
    }
    if let Some(simulations) = cli.simulations {
        app_config.ai.simulations = simulations;
    }
    if let Some(seed) = cli.seed {
        app_config.ai.seed = Some(seed);
    }
    app_config.validate().context("invalid settings")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let human = match cli.side {
        Some(side) => match Player::from_symbol(&side) {
            Some(player) => player,
            None => bail!("unknown side '{}' (expected 'x' or 'o')", side),
        },
        None => ask_side(&mut input, &mut output, &app_config)?,
    };

    let mut session = Session::new(input, output, app_config.ai.build_agent(), human);
    if let Some(seed) = app_config.ai.seed {
        session = session.with_fallback_seed(seed);
    }
    session.run().context("game aborted")?;
    Ok(())
}

/// An empty answer keeps the configured side; anything unrecognised means `o`.
fn ask_side(
    input: &mut impl BufRead,
    output: &mut impl Write,
    config: &AppConfig,
) -> Result<Player> {
    write!(output, "Choose 'x' or 'o': ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("reading side")?;
    if line.trim().is_empty() {
        return Ok(config.game.human_player().unwrap_or(Player::O));
    }
    Ok(Player::from_symbol(&line).unwrap_or(Player::O))
}
