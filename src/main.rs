mod config;
mod driver;
mod error;
mod grid;
mod pattern;
mod render;
mod settings;
mod terminal;

use clap::{Args, Parser, Subcommand};
use config::{LifeConfig, OutputMode, SeedSource, DEFAULT_PRINT_GENERATIONS};
use driver::{generation_limit, NoPause, Simulation, ThreadSleep};
use error::{LifeError, Result};
use grid::GridState;
use rand::prelude::*;
use render::{Glyphs, Viewport};
use settings::Settings;
use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use terminal::{PlainPrinter, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "termlife")]
#[command(author = "Terminal Life")]
#[command(version)]
#[command(about = "Conway's Game of Life on an unbounded grid, rendered in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the simulation in the terminal until interrupted
    Run(SimArgs),

    /// Print generations to stdout as plain text
    Print(SimArgs),
}

#[derive(Args)]
struct SimArgs {
    /// Seed pattern: default, gun, pulsar, block, blinker, glider, random
    #[arg(short, long, default_value = "default")]
    pattern: String,

    /// File of `x,y` lines to seed from (overrides --pattern)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Random seed for the random pattern
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds between generations
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Columns shown
    #[arg(long)]
    width: Option<u16>,

    /// Rows shown
    #[arg(long)]
    height: Option<u16>,

    /// Grid x coordinate of the leftmost column
    #[arg(long, allow_hyphen_values = true)]
    origin_x: Option<i64>,

    /// Grid y coordinate of the top row
    #[arg(long, allow_hyphen_values = true)]
    origin_y: Option<i64>,

    /// Character for live cells
    #[arg(long)]
    alive: Option<String>,

    /// Character for dead cells
    #[arg(long)]
    dead: Option<String>,

    /// Stop after this many generations
    #[arg(short, long)]
    generations: Option<u64>,

    /// Show generation and population with each frame
    #[arg(long)]
    status: bool,

    /// Settings file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn parse_glyph(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(LifeError::InvalidGlyph(text.to_string())),
    }
}

/// Merge settings with command line flags; flags win
fn build_config(mode: OutputMode, args: SimArgs, settings: &Settings) -> Result<LifeConfig> {
    let display = &settings.display;

    let glyphs = Glyphs {
        alive: args.alive.as_deref().map(parse_glyph).transpose()?.unwrap_or(display.alive),
        dead: args.dead.as_deref().map(parse_glyph).transpose()?.unwrap_or(display.dead),
    };

    let viewport = Viewport::new(
        args.origin_x.unwrap_or(display.origin_x),
        args.origin_y.unwrap_or(display.origin_y),
        args.width.unwrap_or(display.width),
        args.height.unwrap_or(display.height),
    );

    let generations = match mode {
        OutputMode::Live => args.generations,
        OutputMode::Print => Some(args.generations.unwrap_or(DEFAULT_PRINT_GENERATIONS)),
    };

    let source = match args.file {
        Some(path) => SeedSource::File(path),
        None => SeedSource::Preset(args.pattern),
    };

    Ok(LifeConfig {
        mode,
        source,
        seed: args.seed,
        viewport,
        glyphs,
        interval: Duration::from_millis(args.interval_ms.unwrap_or(settings.timing.interval_ms)),
        generations,
        show_status: args.status,
    })
}

fn seed_grid(config: &LifeConfig) -> Result<GridState> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0) // Fallback seed for misconfigured system clocks
    });
    let mut rng = StdRng::seed_from_u64(seed);

    let cells = match &config.source {
        SeedSource::Preset(name) => pattern::preset(name, &config.viewport, &mut rng)?,
        SeedSource::File(path) => pattern::load_coordinates(path)?,
    };

    let grid = GridState::with_cells(cells);
    if grid.is_empty() {
        warn!(seed, "seed pattern has no live cells");
    }
    let visible = grid.cells().filter(|c| config.viewport.contains(*c)).count();
    info!(population = grid.population(), visible, seed, "grid seeded");
    Ok(grid)
}

fn run(config: &LifeConfig) -> Result<()> {
    let mut sim = Simulation::new(seed_grid(config)?);
    let stop = generation_limit(config.generations);

    match config.mode {
        OutputMode::Live => {
            let mut term = Terminal::new(config.show_status)?;
            let (cols, rows) = term.size();
            if config.viewport.width > cols || config.viewport.height > rows {
                warn!(
                    cols,
                    rows,
                    width = config.viewport.width,
                    height = config.viewport.height,
                    "viewport is larger than the terminal"
                );
            }
            term.clear_screen()?;
            sim.run(
                &mut term,
                &mut ThreadSleep,
                &config.viewport,
                &config.glyphs,
                config.interval,
                stop,
            )?;
        }
        OutputMode::Print => {
            let mut printer = PlainPrinter::new(stdout().lock(), config.show_status);
            sim.run(
                &mut printer,
                &mut NoPause,
                &config.viewport,
                &config.glyphs,
                config.interval,
                stop,
            )?;
        }
    }

    info!(
        generation = sim.generation(),
        population = sim.grid().population(),
        "finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("termlife: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<()> {
    let (mode, args) = match cli.command {
        Commands::Run(args) => (OutputMode::Live, args),
        Commands::Print(args) => (OutputMode::Print, args),
    };

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };

    let config = build_config(mode, args, &settings)?;
    info!(?config, "configuration loaded");

    run(&config)
}
