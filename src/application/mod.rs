//! Application layer: the outcome validator and the orchestration built on
//! top of it.
//!
//! `validator` holds the stateless classification of settled transactions.
//! `OutcomeRunner` wires a submitter, a notifier and the active contract
//! together and produces one summary per submission.

pub mod reporter;
pub mod runner;
pub mod validator;
