//! Discord quest board: quest lifecycle, eligibility rules, points ledger and onboarding.
//!
//! The services under `server::service` are the entry points for interaction handlers;
//! `server::bot` wires the gateway membership events to them.

pub mod server;
