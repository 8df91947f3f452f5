//! Core deterministic primitives.
//!
//! All types in this module are designed for perfect cross-platform
//! determinism. Board logic is built entirely on top of them.

pub mod rng;
pub mod vec2;

// Re-export core types
pub use rng::DeterministicRng;
pub use vec2::Vec2;
