//! Tile Entity
//!
//! A slidy numbered thing. Tiles are owned by the board; a tile's position is
//! meaningful only in the context of its owning board, which is the sole
//! caller of the mutating operations here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;
use crate::game::events::{GameEvent, Notifier, TileSnapshot};

/// Stable identifier for one tile, unique within its board.
///
/// Identity is per-instance: two tiles with equal values are still distinct
/// tiles. Implements Ord so listeners can keep tiles in sorted containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create from a raw id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A single numbered game piece.
///
/// Holds a clone of its board's event channel so it can announce its own
/// moves and merges. Value progression is 2, 4, 8, ... via merging.
pub struct Tile {
    id: TileId,
    pos: Vec2,
    value: u32,
    notifier: Notifier,
}

impl Tile {
    /// Create a tile. Creation events are the board's responsibility, so
    /// construction itself is silent.
    pub(crate) fn new(id: TileId, pos: Vec2, value: u32, notifier: Notifier) -> Self {
        Self {
            id,
            pos,
            value,
            notifier,
        }
    }

    /// Tile identifier.
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Current position on the owning board.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Current numeric value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Merge eligibility: equal value fields only, never identity.
    pub fn same_value_as(&self, other: &Tile) -> bool {
        self.value == other.value
    }

    /// Capture the tile's current state for an event.
    pub fn snapshot(&self) -> TileSnapshot {
        TileSnapshot {
            id: self.id,
            pos: self.pos,
            value: self.value,
        }
    }

    /// Move to a new position and announce it.
    ///
    /// No bounds checking here: the board guarantees legality.
    pub(crate) fn move_to(&mut self, new_pos: Vec2) {
        self.pos = new_pos;
        self.notifier.notify_all(&GameEvent::tile_updated(self.snapshot()));
    }

    /// Absorb another tile of equal value.
    ///
    /// Takes the absorbed tile by value: the board hands over ownership, so
    /// an absent partner cannot be expressed and the tile cannot be touched
    /// again after the merge. Announces the value change on this tile, then
    /// the removal of the absorbed one.
    pub(crate) fn merge(&mut self, other: Tile) {
        self.value += other.value;
        self.notifier.notify_all(&GameEvent::tile_updated(self.snapshot()));
        // The other tile has been absorbed. Resistance was futile.
        other
            .notifier
            .notify_all(&GameEvent::tile_removed(other.snapshot()));
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile[{},{}]:{}", self.pos.x, self.pos.y, self.value)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
