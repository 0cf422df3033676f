use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env.example` file for the variables the bot needs.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
