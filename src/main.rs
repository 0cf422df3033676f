use questboard::server::{bot, config::Config, error::AppError, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!(
        "Starting questboard with {} starter quest candidates",
        config.starter_quest_ids.len()
    );

    bot::start::start_bot(&config, db).await
}
