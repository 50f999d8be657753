//! Domain types for transaction outcomes and the ports the application
//! talks to.

pub mod notification;
pub mod outcome;
pub mod ports;
pub mod submission;
pub mod tokens;
pub mod transaction;
