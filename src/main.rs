//! Hanoi Console - Unified CLI
//!
//! Animates the optimal Tower of Hanoi solution or prints its move list.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{AnimateArgs, Cli, Command};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use hanoi_console::{
    AnimationConfig, AnsiRenderer, Peg, PegListRenderer, RenderMode, TerminalRenderer, Tower,
    Transcript, TranscriptFormat, optimal_moves, solve,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Animate(AnimateArgs::default())) {
        Command::Animate(args) => run_animate(args),
        Command::Moves {
            cylinders,
            source,
            target,
            format,
        } => run_moves(cylinders, source, target, format),
    }
}

/// Logs to stderr, quiet by default so frames stay readable.
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
}

/// Logs to a file so the alternate screen is left alone.
fn init_file_logging() -> Result<()> {
    let log_file = std::fs::File::create("hanoi_console.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Merges the config file (if any) with command-line overrides.
fn resolve_config(args: AnimateArgs) -> Result<AnimationConfig> {
    let mut config = match &args.config {
        Some(path) => AnimationConfig::from_file(path)?,
        None => AnimationConfig::default(),
    };

    if let Some(cylinders) = args.cylinders {
        config = config.with_cylinders(cylinders);
    }
    if let Some(colours) = args.colours {
        config = config.with_colours(colours);
    }
    if let Some(source) = args.source {
        config = config.with_source(source);
    }
    if let Some(target) = args.target {
        config = config.with_target(target);
    }
    if let Some(delay_ms) = args.delay_ms {
        config = config.with_delay_ms(delay_ms);
    }
    if let Some(mode) = args.mode {
        config = config.with_mode(mode);
    }

    config.validate()?;
    Ok(config)
}

/// Animate the solution in the configured mode.
fn run_animate(args: AnimateArgs) -> Result<()> {
    let config = resolve_config(args)?;
    if *config.mode() == RenderMode::Fullscreen {
        init_file_logging()?;
    } else {
        init_stderr_logging();
    }
    info!(?config, "Starting animation");

    let mut tower = config.tower();
    let target = *config.target();
    let moves = match config.mode() {
        RenderMode::Inline => animate_inline(&mut tower, target, &config)?,
        RenderMode::Fullscreen => animate_fullscreen(&mut tower, target, &config)?,
        RenderMode::Plain => animate_plain(&mut tower, target)?,
    };

    report(&tower, moves)
}

#[instrument(skip(tower, config))]
fn animate_inline(tower: &mut Tower, target: Peg, config: &AnimationConfig) -> Result<u64> {
    let total = optimal_moves(tower.len());
    let mut renderer = AnsiRenderer::new(io::stdout(), config.delay(), total);
    match crossterm::terminal::size() {
        Ok((columns, _)) => renderer = renderer.with_width(columns),
        Err(err) => warn!(error = %err, "Terminal width unknown; lines are not clipped"),
    }

    renderer.draw(tower, "Initial state")?;
    renderer.detach();

    let moves = solve(tower, target, &mut renderer)?;
    renderer.finish()?;
    Ok(moves)
}

#[instrument(skip(tower, config))]
fn animate_fullscreen(tower: &mut Tower, target: Peg, config: &AnimationConfig) -> Result<u64> {
    let total = optimal_moves(tower.len());
    let initial = tower.clone();

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut renderer = TerminalRenderer::new(terminal, config.delay(), total);

    let result = renderer
        .draw(&initial, "Initial state")
        .map_err(anyhow::Error::from)
        .and_then(|()| {
            std::thread::sleep(config.delay());
            solve(tower, target, &mut renderer).map_err(anyhow::Error::from)
        });
    let finished = renderer.finish();

    execute!(io::stdout(), LeaveAlternateScreen, Show)?;

    let moves = result?;
    finished?;

    println!("Initial state =");
    println!("{}", initial);
    Ok(moves)
}

#[instrument(skip(tower))]
fn animate_plain(tower: &mut Tower, target: Peg) -> Result<u64> {
    let mut renderer = PegListRenderer::new(io::stdout().lock());
    renderer.print_state("Initial state", tower)?;
    let moves = solve(tower, target, &mut renderer)?;
    renderer.finish()?;
    Ok(moves)
}

/// Prints the final state and checks the move count against `2^N - 1`.
fn report(tower: &Tower, moves: u64) -> Result<()> {
    let optimal = optimal_moves(tower.len());
    let mut out = io::stdout().lock();
    writeln!(out, "Final state =")?;
    writeln!(out, "{}", tower)?;

    if moves == optimal {
        writeln!(out, "Total moves = {}.  This is optimal!", moves)?;
        info!(moves, "Optimal solution");
    } else {
        writeln!(out, "Total moves = {}, expected {}.", moves, optimal)?;
        warn!(moves, optimal, "Solution was not optimal");
    }
    Ok(())
}

/// Print the optimal move list, one move at a time.
fn run_moves(cylinders: usize, source: Peg, target: Peg, format: TranscriptFormat) -> Result<()> {
    init_stderr_logging();

    let out = io::BufWriter::new(io::stdout().lock());
    Transcript::stream(cylinders, source, target, format, out).with_context(|| {
        format!(
            "Cannot list {} cylinders from {} to {}",
            cylinders, source, target
        )
    })?;
    Ok(())
}
