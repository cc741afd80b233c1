use clap::{Parser, Subcommand};
use gateway_advisor::catalog::Catalog;
use gateway_advisor::engine::RecommendationEngine;
use gateway_advisor::profile::{Route, SuggestionRequest};
use gateway_advisor::reader::ProfileReader;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to an alternative gateway catalog (JSON). Defaults to the
    /// built-in catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank all catalog gateways against a business profile
    Rank {
        /// Business profile JSON file
        profile: PathBuf,
    },
    /// Suggest a single gateway for one payment scenario
    Suggest {
        #[arg(long)]
        payment_type: String,
        /// Transaction amount in USD-equivalent units
        #[arg(long)]
        amount: Decimal,
        #[arg(long, value_enum)]
        route: Route,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            Catalog::from_reader(file).into_diagnostic()?
        }
        None => Catalog::builtin().into_diagnostic()?,
    };
    let engine = RecommendationEngine::new(catalog);

    match cli.command {
        Command::Rank { profile } => {
            let file = File::open(profile).into_diagnostic()?;
            let profile = ProfileReader::new(file).read().into_diagnostic()?;
            let results = engine.rank(&profile).into_diagnostic()?;

            serde_json::to_writer_pretty(io::stdout().lock(), &results).into_diagnostic()?;
            println!();
        }
        Command::Suggest {
            payment_type,
            amount,
            route,
        } => {
            let request = SuggestionRequest {
                payment_type,
                amount,
                route,
            };
            match engine.suggest(&request) {
                Some(gateway) => {
                    serde_json::to_writer_pretty(io::stdout().lock(), gateway)
                        .into_diagnostic()?;
                    println!();
                }
                None => println!("No suitable gateway found for your requirements."),
            }
        }
    }

    Ok(())
}
