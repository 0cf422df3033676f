use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Every randomly drawn quest id was already taken
    #[error("Failed to generate an unused quest id after {attempts} attempts")]
    QuestIdExhausted {
        /// Number of ids drawn before giving up
        attempts: usize,
    },
}
