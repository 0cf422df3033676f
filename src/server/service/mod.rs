//! Service layer for business logic and orchestration.
//!
//! Services sit between the Discord event handlers and the data (repository) layer. They
//! enforce the quest rules, coordinate multiple repository calls, and lift `DbErr` into
//! `AppError`. Every service borrows the shared connection and holds no state of its own.

pub mod ledger;
pub mod member;
pub mod quest;
pub mod reward;
pub mod welcome;

#[cfg(test)]
mod test;
