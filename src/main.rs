mod chart;
mod cli;
mod config;
mod core;
mod export;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, compare},
    prelude::*,
    tables::build_payment_schedules_table,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Compare(args) => {
            compare(&args)?;
        }
        Command::Schedules => {
            println!("{}", build_payment_schedules_table());
        }
    }

    Ok(())
}
