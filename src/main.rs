use std::io;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rookery_core::{Game, divide};
use rookery_host::{MemoryStore, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    info!("rookery starting");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => {
            let mut session = Session::new(MemoryStore::new());
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Some("perft") => run_perft(&args[1..])?,
        Some(other) => bail!("unknown subcommand: {other} (expected `perft <depth> [fen]` or nothing)"),
    }

    info!("rookery shutting down");
    Ok(())
}

/// `perft <depth> [fen]`: print per-move leaf counts and the total.
fn run_perft(args: &[String]) -> Result<()> {
    let depth: usize = args
        .first()
        .context("perft needs a depth")?
        .parse()
        .context("depth must be a non-negative integer")?;
    let game = match args.get(1..).filter(|rest| !rest.is_empty()) {
        Some(fen) => fen.join(" ").parse::<Game>()?,
        None => Game::new(),
    };

    let mut total = 0;
    for (mv, count) in divide(&game, depth) {
        println!("{mv}: {count}");
        total += count;
    }
    println!("total: {total}");
    Ok(())
}
