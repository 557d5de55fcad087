//! # dataforge-cli — Command Handlers
//!
//! Argument types and handlers for the `dataforge` binary. Each subcommand
//! lives in its own module; `main.rs` only assembles and dispatches.

pub mod analyze;
pub mod corpus;
pub mod diagnostic;
pub mod rules;
