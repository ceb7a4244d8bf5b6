use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tradebook::cli::commands::{Cli, Commands};
use tradebook::config::Settings;
use tradebook::TradeBook;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so query output on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run_command(cli.command).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run_command(cmd: Commands) -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    match cmd {
        Commands::Serve { bind, seed } => {
            let settings = settings.with_overrides(bind, seed);
            let book = load_book(settings.seed.as_ref())?;
            tradebook::api::run_server(book, settings.bind).await?;
        }
        Commands::Get { id, source } => {
            let settings = settings.with_overrides(None, source.seed);
            let book = load_book(settings.seed.as_ref())?;
            let trade = book.get(&id)?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::Search { text, source } => {
            let settings = settings.with_overrides(None, source.seed);
            let book = load_book(settings.seed.as_ref())?;
            let trades = book.search(&text);
            println!("{}", serde_json::to_string_pretty(&trades)?);
        }
        Commands::Filter { criteria, source } => {
            let filter = criteria.to_filter()?;
            let settings = settings.with_overrides(None, source.seed);
            let book = load_book(settings.seed.as_ref())?;
            let trades = book.filter(&filter)?;
            println!("{}", serde_json::to_string_pretty(&trades)?);
        }
    }
    Ok(())
}

fn load_book(seed: Option<&PathBuf>) -> anyhow::Result<TradeBook> {
    let book = TradeBook::new();
    match seed {
        Some(path) => {
            book.import_file(path)
                .with_context(|| format!("loading seed file {}", path.display()))?;
        }
        None => tracing::warn!("no seed file given; starting with an empty trade book"),
    }
    Ok(book)
}
