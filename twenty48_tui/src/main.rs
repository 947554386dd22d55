mod app;
mod config;
mod input;
mod terminal;
mod ui;

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use app::App;
use clap::Parser;
use config::Config;
use ratatui::{
    crossterm::event::{self, Event},
    prelude::*,
};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use twenty48::Game;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How many times per second the screen is redrawn (overrides the config file)
    #[arg(long)]
    tick_rate: Option<f64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    /// Write logs to this file. Without it, logs are discarded, since the
    /// terminal is taken up by the game.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level, args.log_file.as_deref())?;

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(tick_rate) = args.tick_rate {
        config.tick_rate_hz = tick_rate;
        config.validate()?;
    }

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, tick_rate_hz = config.tick_rate_hz, "Starting game");
    let app = App::new(Game::new(config.rules.clone(), seed));

    let guard = terminal::TerminalGuard::enter()?;
    let result = run(app, Duration::from_secs_f64(1.0 / config.tick_rate_hz));
    let restored = guard.restore();
    let score = result?;
    restored?;
    info!(score, "Quit");
    println!("Final score: {}", score);
    Ok(())
}

/// Draws and handles input once per tick until the player quits. Returns the final score.
fn run(mut app: App, tick: Duration) -> io::Result<u32> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut last_tick = Instant::now();
    while !app.should_quit {
        terminal.draw(|frame| ui::ui(frame, &app))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            // Drain everything that queued up since the last frame
            loop {
                if let Event::Key(key) = event::read()? {
                    if let Some(command) = input::command_for_key(key) {
                        app.handle_command(command);
                    }
                }
                if app.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
        }
    }
    Ok(app.game.score())
}

fn initialize_logging(level: LevelFilter, log_file: Option<&Path>) -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let writer = match log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None => BoxMakeWriter::new(io::sink),
    };

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_ansi(false)
                .with_writer(writer),
        )
        .with(filter)
        .init();
    Ok(())
}
