//! CLI module for the car price server
//!
//! Subcommands:
//! - `serve`: HTTP server with the form UI and prediction endpoint
//! - `predict`: one-shot prediction from the command line

pub mod predict;
pub mod serve;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Car Price Server - Serves a fitted used-car price model
#[derive(Parser)]
#[command(name = "car-price-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Predict a single price and print it as a JSON list
    Predict(predict::PredictArgs),
}

/// Load `.env`, then the layered configuration
fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    AppConfig::load().context("Invalid configuration")
}
