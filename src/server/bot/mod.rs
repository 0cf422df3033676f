//! Discord bot integration for membership tracking.
//!
//! The bot keeps the points ledger and onboarding records in step with guild membership:
//! members are added to the leaderboard when seen, enrolled with starter quests when they
//! join, and snapshotted into departure history when they leave. Departure history is what
//! lets a returning member retry starter quests from an earlier membership period.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events
//! - `GUILD_MEMBERS` - Receive member join, leave and update events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
