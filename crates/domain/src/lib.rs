//! # PouchTrackr Domain
//!
//! Core state model for essence pouch tracking: the pouch kind catalog,
//! the tracked per-pouch state, and its invariants. Pure synchronous logic
//! with no I/O; overlay and host wiring live in adapter layers.

pub mod aggregates;
pub mod error;
pub mod types;
pub mod value_objects;

pub use aggregates::Pouch;
pub use error::DomainError;
pub use types::PouchKind;
pub use value_objects::FillsRemaining;
