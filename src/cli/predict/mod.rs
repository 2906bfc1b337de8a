//! Predict command - one-shot classification through the same service stack

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;

use crate::config::AppConfig;
use crate::domain::FeatureRecord;
use crate::infrastructure::logging;
use crate::infrastructure::model::FileModelRepository;
use crate::infrastructure::services::PredictionService;

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub sepal_length: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub sepal_width: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub petal_length: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub petal_width: f64,

    /// Model artifact path, overriding the configured one
    #[arg(long)]
    pub model: Option<PathBuf>,
}

impl PredictArgs {
    pub fn features(&self) -> FeatureRecord {
        FeatureRecord::new(
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        )
    }
}

/// Run a single prediction and print it to stdout
pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&logging::LoggingConfig::from(&config));

    let path = args.model.clone().unwrap_or(config.model.path);
    let repository = Arc::new(FileModelRepository::new(path));

    let service = PredictionService::new(repository).await?;
    let result = service.predict_one(&args.features()).await?;

    println!("{}", serde_json::to_string(&result)?);

    Ok(())
}
