//! Questboard Test Utils
//!
//! Shared testing utilities for the questboard bot. Tests build an in-memory SQLite database
//! containing only the tables they need, then seed it through the entity factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for quests, progress rows, ledger entries, departures and welcome records
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn accepts_quest() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let quest = factory::create_quest(db, "1000").await?;
//!     // Perform operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
