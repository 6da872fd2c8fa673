use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, bail};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

mod app;
mod client;
mod constants;
mod domain;
mod format;
mod handler;
mod theme;
mod tooltip;
mod tui;
mod ui;

use crate::{
    app::App,
    client::AptosClient,
    domain::{ExplorerError, Network, TxnVariant, UserTransaction},
    tui::Tui,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// lazymove - Terminal viewer for Aptos user transactions
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Transaction hash (0x-prefixed) or ledger version number
    txn: Option<String>,

    /// Load the transaction from a local JSON file instead of the network
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Network to fetch from: mainnet, testnet, devnet or localnet
    #[arg(long, default_value = "mainnet")]
    network: Network,

    /// Start in the developer layout
    #[arg(long)]
    dev: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let record = load_transaction(&cli).await?;

    let variant = TxnVariant::from_json(&record);
    if variant != TxnVariant::User {
        bail!("expected a user transaction, got a {variant} transaction");
    }
    let txn = UserTransaction::from_json(&record);

    let mut terminal = tui::init()?;
    let app = App::new(txn, cli.network, cli.dev);
    let result = run_app(&mut terminal, app);

    tui::restore()?;
    result
}

/// Load the raw transaction record from a file or the fullnode.
async fn load_transaction(cli: &Cli) -> Result<Value> {
    if let Some(path) = &cli.file {
        let contents = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&contents)?);
    }

    let Some(txn_ref) = &cli.txn else {
        bail!("provide a transaction hash or version, or --file <PATH>");
    };

    let client = AptosClient::new(cli.network);
    tracing::debug!("using fullnode {}", client.base_url());
    let record = if txn_ref.starts_with("0x") {
        client.get_transaction_by_hash(txn_ref).await?
    } else if let Ok(version) = txn_ref.parse::<u64>() {
        client.get_transaction_by_version(version).await?
    } else {
        bail!("'{txn_ref}' is neither a 0x-prefixed hash nor a version number");
    };

    match record {
        Some(record) => Ok(record),
        None => Err(ExplorerError::not_found("transaction", txn_ref.as_str()).into_report()),
    }
}

/// Main application loop: draw, poll, dispatch.
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    loop {
        if app.exit {
            break;
        }

        terminal.draw(|frame| ui::render(&app, frame))?;

        if crossterm::event::poll(Duration::from_millis(250))? {
            let event = crossterm::event::read()?;
            if let Some(action) = handler::handle_event(&event) {
                app.update(action);
            }
        }
    }
    Ok(())
}
