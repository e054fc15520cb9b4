//! citydb: command-line interface for citydb-core
//!
//! Runs the four dataset queries from the terminal, or starts the HTTP
//! server.
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ citydb stats
//!
//! - Look up a city by GeoNames id
//!   $ citydb city 524901
//!
//! - Compare two cities (most populous namesake wins)
//!   $ citydb compare Москва Владивосток
//!   $ citydb compare Москва Владивосток --json
//!
//! - Page through the dataset
//!   $ citydb cities --page 2 --per-page 10
//!
//! - Suggest names by prefix
//!   $ citydb suggest сам
//!
//! - Serve over HTTP
//!   $ citydb --input ./RU.txt serve --port 8000
//!
//! Without `--input`, the dataset bundled with `citydb-core` is used.
mod args;

use crate::args::{CliArgs, Commands};
use citydb_core::prelude::*;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    match args.command {
        Commands::Serve { bind, port } => serve(args.input, bind, port),
        command => {
            let store = load_store(args.input.as_deref())?;
            run_query(&store, command)
        }
    }
}

fn load_store(input: Option<&Path>) -> anyhow::Result<Arc<CityStore>> {
    Ok(match input {
        Some(path) => Arc::new(CityStore::load_from_path(path)?),
        None => CityStore::load()?,
    })
}

fn serve(input: Option<PathBuf>, bind: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = server::ServerConfig::load()?;
    if let Some(input) = input {
        config.data_path = input;
    }
    if let Some(bind) = bind {
        config.bind_addr = bind;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::start_server(config))
}

fn run_query(store: &CityStore, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Stats => {
            let stats = store.stats();
            println!("Dataset statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Timezones: {}", stats.timezones);
        }

        Commands::City { id } => match store.lookup_by_id(&id) {
            Ok(city) => println!("{}", serde_json::to_string_pretty(&CityView::from(city))?),
            Err(err) => eprintln!("{err}: {id}"),
        },

        Commands::Compare { name1, name2, json } => {
            match store.compare_cities(&name1, &name2) {
                Ok(cmp) if json => {
                    println!("{}", serde_json::to_string_pretty(&ComparisonView::from(&cmp))?)
                }
                Ok(cmp) => println!("{}", cmp.summary()),
                Err(err) => eprintln!("{err}"),
            }
        }

        Commands::Cities { page, per_page } => {
            let cities: Vec<CitySummaryView<'_>> = store
                .list_cities(page, per_page)?
                .into_iter()
                .map(CitySummaryView::from)
                .collect();
            if cities.is_empty() {
                println!("No cities on page {page}");
            }
            for c in cities {
                println!(
                    "{} ({:.4}, {:.4}) pop. {} [{}]",
                    c.name, c.latitude, c.longitude, c.population, c.timezone
                );
            }
        }

        Commands::Suggest { prefix } => {
            let names = store.suggest_by_prefix(&prefix);
            if names.is_empty() {
                println!("No cities found starting with: {prefix}");
            }
            for name in names {
                println!("{name}");
            }
        }

        Commands::Serve { .. } => anyhow::bail!("`serve` is not a query"),
    }

    Ok(())
}
