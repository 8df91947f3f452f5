//! Game Logic Module
//!
//! All board simulation code. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `events`: Typed events and the shared listener registry
//! - `tile`: The numbered tile entity
//! - `board`: The grid, slide/merge algorithm, and move commands

pub mod board;
pub mod events;
pub mod tile;

// Re-export key types
pub use board::{Board, BoardConfig, BoardError, Move};
pub use events::{EventKind, GameEvent, Notifier, TileSnapshot};
pub use tile::{Tile, TileId};
