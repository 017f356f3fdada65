use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use qasearch_core::config::Config;
use qasearch_core::{QueryParser, SearchRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "qasearch", about = "Inspect how search requests are normalized for backends")]
struct Cli {
    /// Config file; defaults to qasearch.toml plus the RUST_ENV overlay.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate, parse and translate a query, printing the backend condition.
    Translate {
        #[arg(short, long)]
        q: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        order: Option<String>,
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Print the effective request limits.
    Limits,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "qasearch=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let limits = config.limits()?;

    match cli.command {
        Command::Translate { q, page, size, order, user_id } => {
            let request = SearchRequest { query: q, page, page_size: size, order, user_id, ..Default::default() };
            let search = match request.validate_with(&limits) {
                Ok(search) => search,
                Err(e) => {
                    eprintln!("rejected ({}): {}", e.field(), e);
                    return Ok(ExitCode::FAILURE);
                }
            };
            let cond = QueryParser::new().parse(&search);
            let basic = cond.translate(&search);
            tracing::info!(scope = cond.target.as_str(), "translated");
            let out = serde_json::json!({
                "scope": cond.target,
                "condition": basic,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Limits => {
            println!("{}", serde_json::to_string_pretty(&limits)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}
