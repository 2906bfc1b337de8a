use clap::Parser;
use iris_inference_api::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Predict(args) => cli::predict::run(args).await,
    }
}
