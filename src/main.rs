mod menu;

use std::io;

use banking_core::{Bank, BankConfig};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::menu::Menu;

/// Top Secret Funds console bank
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set the log level (overrides BANK_LOG_LEVEL)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Name shown in the welcome banner (overrides BANK_NAME)
    #[arg(short, long)]
    bank_name: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = BankConfig::from_env();
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(name) = cli.bank_name {
        config.bank_name = name;
    }

    // Logs go to stderr so they never interleave with the prompts
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "banking_core={0},top_secret_funds={0}",
            config.log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(bank = %config.bank_name, "starting console");

    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), Bank::new(), config.bank_name);
    menu.run()?;

    Ok(())
}
