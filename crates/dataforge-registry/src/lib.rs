//! # dataforge-registry — Legal Reference Registry
//!
//! The catalogue of regulatory texts the compliance engine cites: laws and
//! regulations of the Québec occupational health-and-safety regime (LMRSST,
//! LSST, RSST, the construction safety code, and related regulations).
//!
//! ## Architecture
//!
//! - **Reference** (`reference.rs`): the immutable `LegalReference` record
//!   and its `Law`/`Regulation` kind.
//! - **Registry** (`registry.rs`): a read-only dictionary keyed by citation
//!   code. Duplicate codes are a construction error — the registry is never
//!   built in an ambiguous state.
//! - **Corpus** (`corpus.rs`): the built-in Québec SST corpus.
//!
//! ## Crate Policy
//!
//! - The registry exposes no mutation: load once, share freely. Concurrent
//!   analyses read the same registry through a shared reference.
//! - Iteration order is deterministic (sorted by citation code).

pub mod corpus;
pub mod reference;
pub mod registry;

pub use corpus::quebec_sst_corpus;
pub use reference::{LegalReference, ReferenceKind};
pub use registry::LegalReferenceRegistry;
