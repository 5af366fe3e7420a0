mod input;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use goban::Point;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check which groups on a Go board have no liberties", long_about = None)]
struct Args {
    /// Board file, one row per line (`.` empty, `o` white, `#` black). `-` reads stdin.
    board: PathBuf,

    /// Point to query as X,Y. Repeatable; defaults to every stone on the board.
    #[arg(long = "at", value_name = "X,Y", value_parser = input::parse_point)]
    points: Vec<Point>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.debug {
        "goban=debug,goban_cli=debug"
    } else {
        "goban=info,goban_cli=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let goban = input::load_goban(&args.board)?;
    let report = report::build_report(&goban, &args.points)?;
    tracing::info!(queries = report.queries.len(), "board checked");

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}
