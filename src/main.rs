//! Console blackjack: draw cards towards 21, then hold against the dealer.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjhold::{Console, Session, TableOptions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "bjhold")]
struct Cli {
    /// Seed for the card generator. Defaults to the current time.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Total that wins the round outright.
    #[arg(long, default_value_t = 21)]
    target: u8,

    /// Lowest total the dealer can hold.
    #[arg(long, default_value_t = 16)]
    dealer_min: u8,

    /// Highest total the dealer can hold.
    #[arg(long, default_value_t = 26)]
    dealer_max: u8,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::event!(tracing::Level::DEBUG, seed, "starting session");

    let options = TableOptions::default()
        .with_target(cli.target)
        .with_dealer_range(cli.dealer_min, cli.dealer_max);

    let mut session = match Session::new(options, seed) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Invalid table options: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    if let Err(err) = console.run(&mut session) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
