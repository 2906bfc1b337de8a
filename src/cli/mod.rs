//! CLI module
//!
//! - `serve`: run the HTTP inference API
//! - `predict`: classify a single sample from the command line

pub mod predict;
pub mod serve;

use clap::{Parser, Subcommand};

/// Iris species inference API
#[derive(Parser)]
#[command(name = "iris-inference-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Predict the species of one sample and print the result as JSON
    Predict(predict::PredictArgs),
}
