//! Game Board
//!
//! The grid that owns every tile. Implements the directional move resolution:
//! per-tile slide-until-blocked, merge-once-per-slide, and the
//! direction-correct traversal order that keeps merges honest.
//!
//! All mutation is synchronous and single-threaded. A directional move runs
//! to completion before returning, and events fire in mutation order.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;
use crate::game::events::{GameEvent, Notifier};
use crate::game::tile::{Tile, TileId};
use crate::{DEFAULT_GRID_SIZE, FOUR_TILE_PERCENT};

/// Errors from board operations.
///
/// These are caller mistakes, surfaced explicitly instead of corrupting the
/// grid. Callers gate `place_tile` with [`Board::has_empty`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// `place_tile` was called with no empty cell left.
    #[error("no empty cell available for a new tile")]
    BoardFull,

    /// A position outside the grid was passed to an accessor.
    #[error("position {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// The offending position
        pos: Vec2,
        /// Grid row count
        rows: usize,
        /// Grid column count
        cols: usize,
    },

    /// `from_rows` was given a grid of the wrong shape.
    #[error("grid shape mismatch: expected {expected_rows}x{expected_cols}")]
    BadDimensions {
        /// Required row count
        expected_rows: usize,
        /// Required column count
        expected_cols: usize,
    },

    /// `slide` was given a displacement that is not a unit direction.
    #[error("displacement {dir} is not a unit direction")]
    InvalidDirection {
        /// The offending displacement
        dir: Vec2,
    },
}

/// A directional move command, as issued by a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Slide all tiles toward lower column indices
    Left,
    /// Slide all tiles toward higher column indices
    Right,
    /// Slide all tiles toward lower row indices
    Up,
    /// Slide all tiles toward higher row indices
    Down,
}

impl Move {
    /// All four moves, for iteration.
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    /// Unit displacement for this move.
    #[inline]
    pub fn delta(self) -> Vec2 {
        match self {
            Move::Left => Vec2::LEFT,
            Move::Right => Vec2::RIGHT,
            Move::Up => Vec2::UP,
            Move::Down => Vec2::DOWN,
        }
    }
}

/// Board construction parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Grid row count
    pub rows: usize,
    /// Grid column count
    pub cols: usize,
    /// Seed for the placement RNG
    pub seed: u64,
    /// Percent chance a randomly placed tile is a 4 instead of a 2
    pub four_percent: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_SIZE,
            cols: DEFAULT_GRID_SIZE,
            seed: 0,
            four_percent: FOUR_TILE_PERCENT,
        }
    }
}

/// The game grid.
///
/// Sole owner of every tile it contains; each occupied cell holds exactly one
/// tile whose stored position matches the cell's coordinates. Dimensions are
/// fixed at construction.
#[derive(Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Option<Tile>>>,
    rng: DeterministicRng,
    notifier: Notifier,
    four_percent: u32,
    next_tile_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    /// Create an empty board.
    pub fn new(config: BoardConfig) -> Self {
        let mut grid = Vec::with_capacity(config.rows);
        for _ in 0..config.rows {
            let mut row = Vec::with_capacity(config.cols);
            row.resize_with(config.cols, || None);
            grid.push(row);
        }

        Self {
            rows: config.rows,
            cols: config.cols,
            grid,
            rng: DeterministicRng::new(config.seed),
            notifier: Notifier::new(),
            four_percent: config.four_percent,
            next_tile_id: 0,
        }
    }

    /// Grid row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Register a listener for all board and tile events.
    ///
    /// Tiles share the board's channel, so one subscription receives the
    /// whole mutation-ordered stream: created, updated, removed.
    pub fn add_listener(&self, listener: impl FnMut(&GameEvent) + 'static) {
        self.notifier.add_listener(listener);
    }

    /// Is `pos` a legal position on the board?
    #[inline]
    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.rows && (pos.y as usize) < self.cols
    }

    /// Bounds-checked cell read.
    pub fn tile_at(&self, pos: Vec2) -> Result<Option<&Tile>, BoardError> {
        if !self.in_bounds(pos) {
            return Err(self.out_of_bounds(pos));
        }
        Ok(self.cell(pos))
    }

    /// Is there at least one cell without a tile?
    pub fn has_empty(&self) -> bool {
        self.grid.iter().flatten().any(Option::is_none)
    }

    /// Every unoccupied position, in row-major order.
    pub fn empty_positions(&self) -> Vec<Vec2> {
        let mut empties = Vec::new();
        for (r, row) in self.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_none() {
                    empties.push(Vec2::new(r as i32, c as i32));
                }
            }
        }
        empties
    }

    /// Place a tile on a uniformly chosen empty cell and announce it.
    ///
    /// With `value` omitted, draws 4 with probability `four_percent`/100 and
    /// 2 otherwise. Returns the chosen position. Errors with
    /// [`BoardError::BoardFull`] when no cell is empty; callers gate on
    /// [`Board::has_empty`].
    pub fn place_tile(&mut self, value: Option<u32>) -> Result<Vec2, BoardError> {
        let empties = self.empty_positions();
        let pos = self
            .rng
            .choose(&empties)
            .copied()
            .ok_or(BoardError::BoardFull)?;

        let four_percent = self.four_percent;
        let value =
            value.unwrap_or_else(|| if self.rng.next_percent(four_percent) { 4 } else { 2 });

        let tile = Tile::new(self.alloc_tile_id(), pos, value, self.notifier.clone());
        let snapshot = tile.snapshot();
        self.grid[pos.x as usize][pos.y as usize] = Some(tile);
        debug!(pos = %pos, value, "tile placed");
        self.notifier.notify_all(&GameEvent::tile_created(snapshot));
        Ok(pos)
    }

    /// Sum of all tile values currently on the board.
    ///
    /// Differs from classic 2048 scoring, which accumulates over the move
    /// history rather than reading board state.
    pub fn score(&self) -> u32 {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .map(Tile::value)
            .sum()
    }

    /// Export the board as a grid of integers, 0 for empty.
    ///
    /// Interchange/testing format only; tile identity is not preserved.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map_or(0, Tile::value))
                    .collect()
            })
            .collect()
    }

    /// Replace the entire board content from a grid of integers, 0 = empty.
    ///
    /// Bulk test scaffolding: every nonzero entry becomes a fresh tile, and
    /// no events are emitted. The shape must match the board's dimensions.
    pub fn from_rows(&mut self, values: &[Vec<u32>]) -> Result<(), BoardError> {
        if values.len() != self.rows || values.iter().any(|row| row.len() != self.cols) {
            return Err(BoardError::BadDimensions {
                expected_rows: self.rows,
                expected_cols: self.cols,
            });
        }

        for (r, row) in values.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let pos = Vec2::new(r as i32, c as i32);
                self.grid[r][c] = if value > 0 {
                    Some(Tile::new(
                        self.alloc_tile_id(),
                        pos,
                        value,
                        self.notifier.clone(),
                    ))
                } else {
                    None
                };
            }
        }
        Ok(())
    }

    /// Slide the tile at `pos` (if any) in direction `dir` until it bumps
    /// into another tile or the edge of the board.
    ///
    /// On meeting a tile of equal value the sliding tile absorbs it, takes
    /// its cell, and stops: a tile merges at most once per slide call, which
    /// is what prevents three equal tiles from collapsing in one pass.
    pub fn slide(&mut self, pos: Vec2, dir: Vec2) -> Result<(), BoardError> {
        if !self.in_bounds(pos) {
            return Err(self.out_of_bounds(pos));
        }
        if !dir.is_unit_direction() {
            return Err(BoardError::InvalidDirection { dir });
        }
        self.slide_tile(pos, dir);
        Ok(())
    }

    /// Slide all tiles left.
    pub fn left(&mut self) {
        self.shift(Move::Left);
    }

    /// Slide all tiles right.
    pub fn right(&mut self) {
        self.shift(Move::Right);
    }

    /// Slide all tiles up.
    pub fn up(&mut self) {
        self.shift(Move::Up);
    }

    /// Slide all tiles down.
    pub fn down(&mut self) {
        self.shift(Move::Down);
    }

    /// Apply a directional move command.
    pub fn apply(&mut self, mv: Move) {
        self.shift(mv);
    }

    /// Can any move still change the board?
    ///
    /// True if a cell is empty or any orthogonally adjacent pair of tiles
    /// has equal values. False means game over.
    pub fn has_moves(&self) -> bool {
        if self.has_empty() {
            return true;
        }
        for r in 0..self.rows {
            for c in 0..self.cols {
                let pos = Vec2::new(r as i32, c as i32);
                let Some(tile) = self.cell(pos) else { continue };
                for neighbor in [pos + Vec2::RIGHT, pos + Vec2::DOWN] {
                    if self.in_bounds(neighbor) {
                        if let Some(other) = self.cell(neighbor) {
                            if tile.same_value_as(other) {
                                return true;
                            }
                        }
                    }
                }
            }
        }
        false
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn out_of_bounds(&self, pos: Vec2) -> BoardError {
        BoardError::OutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn alloc_tile_id(&mut self) -> TileId {
        let id = TileId::new(self.next_tile_id);
        self.next_tile_id += 1;
        id
    }

    #[inline]
    fn cell(&self, pos: Vec2) -> Option<&Tile> {
        self.grid[pos.x as usize][pos.y as usize].as_ref()
    }

    /// Run every occupied cell through `slide` in an order compatible with
    /// the movement direction, so each tile slides into already-resolved
    /// space and is processed exactly once.
    fn shift(&mut self, mv: Move) {
        debug!(?mv, "applying move");
        let dir = mv.delta();
        for r in 0..self.rows {
            let r = if mv == Move::Down { self.rows - 1 - r } else { r };
            for c in 0..self.cols {
                let c = if mv == Move::Right { self.cols - 1 - c } else { c };
                let pos = Vec2::new(r as i32, c as i32);
                if self.cell(pos).is_some() {
                    self.slide_tile(pos, dir);
                }
            }
        }
    }

    /// The slide loop proper. `pos` is in bounds and `dir` is a unit step.
    fn slide_tile(&mut self, mut pos: Vec2, dir: Vec2) {
        let Some(value) = self.cell(pos).map(Tile::value) else {
            return;
        };

        loop {
            let next = pos + dir;
            if !self.in_bounds(next) {
                // Reached the edge
                break;
            }
            match self.cell(next).map(Tile::value) {
                None => {
                    self.move_tile(pos, next);
                    pos = next;
                }
                Some(neighbor) if neighbor == value => {
                    self.merge_tiles(pos, next);
                    // Stop moving when we merge with another tile
                    break;
                }
                Some(_) => {
                    // Stuck against another tile
                    break;
                }
            }
        }
    }

    /// Move the tile at `from` into the empty cell `to`.
    fn move_tile(&mut self, from: Vec2, to: Vec2) {
        debug_assert!(self.cell(to).is_none());
        if let Some(mut tile) = self.grid[from.x as usize][from.y as usize].take() {
            trace!(from = %from, to = %to, "tile moved");
            tile.move_to(to);
            self.grid[to.x as usize][to.y as usize] = Some(tile);
        }
    }

    /// Merge the sliding tile at `from` into the equal-valued tile at `into`,
    /// leaving the survivor in `into`'s cell.
    ///
    /// Both cells hand over ownership: the absorbed tile cannot be referenced
    /// again, which is the merge precondition enforced structurally.
    fn merge_tiles(&mut self, from: Vec2, into: Vec2) {
        debug_assert!(from != into);
        let absorbed = self.grid[into.x as usize][into.y as usize].take();
        let moving = self.grid[from.x as usize][from.y as usize].take();
        if let (Some(mut moving), Some(absorbed)) = (moving, absorbed) {
            moving.merge(absorbed);
            moving.move_to(into);
            debug!(at = %into, value = moving.value(), "tiles merged");
            self.grid[into.x as usize][into.y as usize] = Some(moving);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
