use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use plum_rules::game_state::chess_types::GameState;
use plum_rules::move_generation::perft::{perft, perft_divide};
use plum_rules::utils::terminal_session::{TerminalSession, HELP_TEXT};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Log filter (e.g. `debug`, `plum_rules=trace`). Overrides `RUST_LOG`.
    #[clap(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game on the terminal, reading commands from stdin
    Play,
    /// Count leaf nodes of the legal move tree from the initial position
    Perft {
        #[clap(long, default_value = "3")]
        depth: u8,
        /// Print the node count below each root move
        #[clap(long)]
        divide: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(),
        Command::Perft { depth, divide } => run_perft(depth, divide),
    }
}

fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let filter = match log_level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter {directive:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn play() -> Result<()> {
    let mut session = TerminalSession::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{HELP_TEXT}")?;
    writeln!(stdout, "{}", session.game().status_message())?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let reply = session.handle_line(&line);
        if !reply.output.is_empty() {
            writeln!(stdout, "{}", reply.output)?;
        }
        stdout.flush()?;
        if reply.quit {
            break;
        }
    }
    Ok(())
}

fn run_perft(depth: u8, divide: bool) -> Result<()> {
    if depth == 0 {
        bail!("perft depth must be at least 1");
    }
    let game = GameState::new_game();

    if divide {
        let mut total = 0;
        for (text, counts) in perft_divide(&game, depth)? {
            println!("{text}: {}", counts.nodes);
            total += counts.nodes;
        }
        println!("\nnodes: {total}");
    } else {
        let counts = perft(&game, depth)?;
        println!("depth {depth}");
        println!("  nodes:      {}", counts.nodes);
        println!("  captures:   {}", counts.captures);
        println!("  en passant: {}", counts.en_passant);
        println!("  castles:    {}", counts.castles);
        println!("  promotions: {}", counts.promotions);
        println!("  checks:     {}", counts.checks);
        println!("  checkmates: {}", counts.checkmates);
    }
    Ok(())
}
