//! Game Events
//!
//! Typed notifications that keep an external display in sync with the board
//! without the core depending on any rendering technology. Events are
//! delivered synchronously, in mutation order, and are never dropped or
//! coalesced.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;
use crate::game::tile::TileId;

/// Kind of board mutation an event announces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum EventKind {
    /// A tile appeared on the board
    TileCreated = 0,
    /// A tile moved or changed value
    TileUpdated = 1,
    /// A tile was absorbed into another by a merge
    TileRemoved = 2,
}

/// The affected tile, captured at the moment the event fired.
///
/// Listeners correlate events across a tile's lifetime through `id`; the
/// position and value are the tile's state after the mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    /// Stable per-tile identifier
    pub id: TileId,
    /// Tile position after the mutation
    pub pos: Vec2,
    /// Tile value after the mutation
    pub value: u32,
}

/// A board mutation notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// What happened
    pub kind: EventKind,
    /// The tile it happened to
    pub tile: TileSnapshot,
}

impl GameEvent {
    /// Create a tile-created event.
    pub fn tile_created(tile: TileSnapshot) -> Self {
        Self {
            kind: EventKind::TileCreated,
            tile,
        }
    }

    /// Create a tile-updated event (moved or value changed).
    pub fn tile_updated(tile: TileSnapshot) -> Self {
        Self {
            kind: EventKind::TileUpdated,
            tile,
        }
    }

    /// Create a tile-removed event (absorbed by a merge).
    pub fn tile_removed(tile: TileSnapshot) -> Self {
        Self {
            kind: EventKind::TileRemoved,
            tile,
        }
    }
}

/// A registered event listener.
pub type EventListener = Box<dyn FnMut(&GameEvent)>;

/// Listener registry shared by the board and its tiles.
///
/// Any entity holding a clone of a `Notifier` can broadcast typed events to
/// zero or more subscribers. The board owns one channel and hands a clone to
/// every tile it creates, so tile-level events (moves, merges) and
/// board-level events (creations) reach the same subscribers in a single,
/// mutation-ordered stream.
///
/// Delivery is synchronous and single-threaded. Listeners must not register
/// or remove listeners from inside a callback.
#[derive(Clone, Default)]
pub struct Notifier {
    listeners: Rc<RefCell<Vec<EventListener>>>,
}

impl Notifier {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It receives every subsequent event, in order.
    pub fn add_listener(&self, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Broadcast an event to all registered listeners, in registration order.
    pub fn notify_all(&self, event: &GameEvent) {
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(event);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn snapshot(value: u32) -> TileSnapshot {
        TileSnapshot {
            id: TileId::new(1),
            pos: Vec2::new(0, 0),
            value,
        }
    }

    #[test]
    fn test_notify_reaches_all_listeners() {
        let notifier = Notifier::new();
        let count = Rc::new(Cell::new(0u32));

        for _ in 0..3 {
            let count = Rc::clone(&count);
            notifier.add_listener(move |_| count.set(count.get() + 1));
        }
        assert_eq!(notifier.listener_count(), 3);

        notifier.notify_all(&GameEvent::tile_created(snapshot(2)));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_clones_share_one_channel() {
        let notifier = Notifier::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        notifier.add_listener(move |e| sink.borrow_mut().push(e.kind));

        // A clone broadcasts to the same subscribers
        let handle = notifier.clone();
        handle.notify_all(&GameEvent::tile_updated(snapshot(4)));
        handle.notify_all(&GameEvent::tile_removed(snapshot(4)));

        assert_eq!(
            *seen.borrow(),
            vec![EventKind::TileUpdated, EventKind::TileRemoved]
        );
    }

    #[test]
    fn test_no_listeners_is_fine() {
        let notifier = Notifier::new();
        notifier.notify_all(&GameEvent::tile_created(snapshot(2)));
    }
}
