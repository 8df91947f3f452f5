//! Integer 2D Vector
//!
//! A `Vec2` is an (row, col) pair that represents distance along two
//! orthogonal axes. Interpreted as a position, it represents distance from
//! (0, 0). Interpreted as movement, it represents distance from another
//! position. Adding two `Vec2`s therefore yields a `Vec2` — the movement
//! algorithm relies on this dual reading, so there is deliberately one type
//! for both roles.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// 2D vector with integer components, serving as both an absolute grid
/// coordinate and a relative displacement.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Row component (or row delta)
    pub x: i32,
    /// Column component (or column delta)
    pub y: i32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Unit displacement toward lower column indices
    pub const LEFT: Self = Self { x: 0, y: -1 };

    /// Unit displacement toward higher column indices
    pub const RIGHT: Self = Self { x: 0, y: 1 };

    /// Unit displacement toward lower row indices
    pub const UP: Self = Self { x: -1, y: 0 };

    /// Unit displacement toward higher row indices
    pub const DOWN: Self = Self { x: 1, y: 0 };

    /// Create a new vector from components.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Add another vector componentwise.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtract another vector componentwise.
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Negate both components.
    #[inline]
    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Is this one of the four unit direction deltas?
    #[inline]
    pub fn is_unit_direction(self) -> bool {
        matches!(self, Self::LEFT | Self::RIGHT | Self::UP | Self::DOWN)
    }
}

// Operator overloads for ergonomics
impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.add(rhs)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.sub(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_add() {
        let pos = Vec2::new(2, 3);
        let delta = Vec2::new(0, -1);
        let result = pos + delta;
        assert_eq!(result, Vec2::new(2, 2));
    }

    #[test]
    fn test_vec2_sub() {
        let a = Vec2::new(5, 7);
        let b = Vec2::new(2, 3);
        assert_eq!(a - b, Vec2::new(3, 4));
    }

    #[test]
    fn test_vec2_equality_is_componentwise() {
        assert_eq!(Vec2::new(1, 2), Vec2::new(1, 2));
        assert_ne!(Vec2::new(1, 2), Vec2::new(2, 1));
    }

    #[test]
    fn test_vec2_neg() {
        assert_eq!(-Vec2::DOWN, Vec2::UP);
        assert_eq!(-Vec2::RIGHT, Vec2::LEFT);
    }

    #[test]
    fn test_direction_constants_are_unit() {
        for dir in [Vec2::LEFT, Vec2::RIGHT, Vec2::UP, Vec2::DOWN] {
            assert!(dir.is_unit_direction());
        }
        assert!(!Vec2::ZERO.is_unit_direction());
        assert!(!Vec2::new(1, 1).is_unit_direction());
    }

    #[test]
    fn test_position_plus_direction_walks_grid() {
        // Sliding left from (1, 3) visits (1, 2), (1, 1), (1, 0)
        let mut pos = Vec2::new(1, 3);
        let mut visited = Vec::new();
        for _ in 0..3 {
            pos = pos + Vec2::LEFT;
            visited.push(pos);
        }
        assert_eq!(
            visited,
            vec![Vec2::new(1, 2), Vec2::new(1, 1), Vec2::new(1, 0)]
        );
    }
}
