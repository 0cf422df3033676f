//! Database repository layer.
//!
//! Each repository borrows the connection and performs the queries for one table, converting
//! entity models to domain models on the way out. Repositories return `DbErr`; lifecycle rules
//! live in the service layer, but conditional writes that must not race (status transitions,
//! the ledger clamp) are expressed here as single filtered statements.

pub mod departed_member;
pub mod leaderboard;
pub mod quest;
pub mod quest_progress;
pub mod welcome;

#[cfg(test)]
mod test;
