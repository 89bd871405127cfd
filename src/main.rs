mod cli;
mod config;
mod models;
mod provider;
mod schedule;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use provider::ProviderClient;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;
    let query = cli.query(&config.provider);
    let client = ProviderClient::new(&config.provider.base_url)?;

    match cli.command {
        Some(Commands::Next) => handlers::handle_next(&client, &query),
        None => handlers::handle_times(&client, &query),
    }
}
