//! Error types for the questboard bot.
//!
//! `AppError` is the top-level error returned by services and startup code. Repositories
//! return `sea_orm::DbErr` directly and services lift it with `?`. Business-rule denials are
//! not errors; they are returned as values (see `service::quest::AcceptOutcome`).

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::server::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates configuration, storage, Discord and internal failures. Every variant is an
/// infrastructure failure; callers log it and report a generic failure to the member.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Unexpected internal state, such as exhausting quest id generation.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
