//! Value objects - Immutable objects defined by their attributes

mod fills_remaining;

pub use fills_remaining::FillsRemaining;
