use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use thunder_app::autopilot::Autopilot;
use thunder_app::game_loop::TICK_DURATION;
use thunder_app::headless;
use thunder_app::state::AppState;
use thunder_core::commands::PlayerCommand;
use thunder_core::config::SimConfig;
use thunder_core::enums::GamePhase;

/// Run a seeded Thunder session without a window and print a JSON summary.
#[derive(Parser, Debug)]
#[command(name = "thunder-headless", version)]
struct Cli {
    /// RNG seed; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of ticks to simulate.
    #[arg(long, default_value_t = 7200)]
    ticks: u64,

    /// JSON config file. Omitted fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drive the game loop thread against the wall clock instead of ticking
    /// as fast as possible.
    #[arg(long)]
    realtime: bool,

    /// Pretty-print the summary.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SimConfig::from_json_str(&text)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let output = if cli.realtime {
        run_realtime(config, cli.ticks, cli.pretty)?
    } else {
        let summary = headless::run_headless(config, cli.ticks)?;
        if cli.pretty {
            serde_json::to_string_pretty(&summary)?
        } else {
            serde_json::to_string(&summary)?
        }
    };
    println!("{output}");
    Ok(())
}

/// Play through the threaded game loop, feeding autopilot input from the
/// latest snapshot. Prints the final snapshot.
fn run_realtime(config: SimConfig, ticks: u64, pretty: bool) -> anyhow::Result<String> {
    let state = AppState::new();
    state.start_simulation(config)?;
    state.send_command(PlayerCommand::StartRun)?;

    let autopilot = Autopilot::new();
    // Twice the nominal run time, in case the machine falls behind.
    let budget = u32::try_from(ticks).unwrap_or(u32::MAX).saturating_mul(2);
    let deadline = Instant::now() + TICK_DURATION * budget + Duration::from_secs(1);
    let mut last = None;
    while Instant::now() < deadline {
        std::thread::sleep(TICK_DURATION);
        let Some(snapshot) = state.snapshot()? else {
            continue;
        };
        let finished = snapshot.time.tick >= ticks
            || matches!(snapshot.phase, GamePhase::Success | GamePhase::Fail);
        state.set_input(autopilot.decide(&snapshot))?;
        last = Some(snapshot);
        if finished {
            break;
        }
    }
    state.shutdown()?;

    let snapshot = last.context("game loop produced no snapshot")?;
    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    Ok(json)
}
