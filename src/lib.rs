//! # Five Twelve Board Core
//!
//! Deterministic board state and sliding/merging logic for 512, a puzzle
//! game in the 2048 family.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   FIVE TWELVE CORE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── vec2.rs     - Integer (row, col) position/displacement  │
//! │  └── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── events.rs   - Typed events and listener registry        │
//! │  ├── tile.rs     - Numbered tile entity                      │
//! │  └── board.rs    - Grid, slide/merge algorithm, moves        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Given the same seed and the same sequence of moves and placements, a
//! [`Board`](game::board::Board) produces identical grids and an identical
//! event stream on any platform:
//! - All randomness comes from a seeded Xorshift128+ PRNG
//! - Empty cells are enumerated in row-major order before random choice
//! - Events are delivered synchronously, in mutation order
//!
//! The display and controller layers live outside this crate. They subscribe
//! to board events ([`GameEvent`](game::events::GameEvent)) and drive the
//! board through [`Move`](game::board::Move) commands; the core never depends
//! on a rendering technology.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::rng::DeterministicRng;
pub use crate::core::vec2::Vec2;
pub use crate::game::board::{Board, BoardConfig, BoardError, Move};
pub use crate::game::events::{EventKind, GameEvent, Notifier, TileSnapshot};
pub use crate::game::tile::{Tile, TileId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default board dimension (4x4 grid)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Percent chance that a randomly placed tile is a 4 instead of a 2
pub const FOUR_TILE_PERCENT: u32 = 10;
