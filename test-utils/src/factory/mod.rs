//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation. Factories insert directly
//! through the entity layer, bypassing repositories and services, so tests can stage any
//! state (including backdated timestamps) without going through the lifecycle rules.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let quest = factory::create_quest(&db, "1000").await?;
//! let progress = factory::create_progress(&db, &quest, "42").await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use chrono::{Duration, Utc};
//! use test_utils::factory::quest_progress::QuestProgressFactory;
//!
//! let rejected = QuestProgressFactory::new(&db, &quest, "42")
//!     .status("rejected")
//!     .completed_at(Utc::now() - Duration::hours(25))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `quest` - Create quest catalog entries
//! - `quest_progress` - Create per-user progress rows
//! - `leaderboard` - Create ledger entries
//! - `departed_member` - Create departure history rows
//! - `welcome_automation` - Create welcome/mentorship records
//! - `helpers` - ID generation and multi-entity helpers

pub mod departed_member;
pub mod helpers;
pub mod leaderboard;
pub mod quest;
pub mod quest_progress;
pub mod welcome_automation;

pub use departed_member::create_departure;
pub use leaderboard::create_entry;
pub use quest::{create_quest, create_starter_quest};
pub use quest_progress::create_progress;
pub use welcome_automation::create_welcome;
