//! # dataforge-core — Foundational Types for the DataForge Engine
//!
//! This crate is the bedrock of the DataForge compliance workspace. It defines
//! the type-system primitives every other crate builds on. Every other crate
//! in the workspace depends on `dataforge-core`; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `DocumentId`, `RuleId`,
//!    `ScenarioId`, `ActionId` — all newtypes. No bare strings for
//!    identifiers.
//!
//! 2. **Single `ActionType` enum.** One definition, 7 variants, exhaustive
//!    `match` everywhere. Adding an action type forces every consumer
//!    (capability routing, evidence vocabulary, recommendations) to handle it.
//!
//! 3. **Bounded integers over validation code.** `employee_count` and
//!    `duration_months` are `u32` — a negative headcount is unrepresentable,
//!    so the extractor contract "never return employeeCount < 0" holds by
//!    construction.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so analysis results serialize the same
//!    bytes wherever they are produced.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dataforge-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod action;
pub mod context;
pub mod error;
pub mod identifier;
pub mod sector;
pub mod severity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use action::{ActionType, ACTION_TYPE_COUNT};
pub use context::EvaluationContext;
pub use error::{ConfigurationError, InvalidInput};
pub use identifier::{ActionId, DocumentId, RuleId, ScenarioId};
pub use sector::SectorScope;
pub use severity::{Priority, RiskLevel, Severity};
pub use temporal::{Timestamp, TimestampError};
