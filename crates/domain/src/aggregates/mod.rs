//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Is mutated exclusively through `&mut` by a single observer
//!
//! # Rustic DDD Principles
//!
//! Instead of porting Java/C# DDD patterns, we leverage Rust's strengths:
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Encapsulated fields, `#[inline]` accessors |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Value Object immutability | `#[derive(Clone)]` + no `&mut` methods |
//! | Factory pattern | `::new()` + explicit constructors |

pub mod pouch;

pub use pouch::Pouch;
