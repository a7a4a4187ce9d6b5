//! Axis-aligned rectangles and facing.
//!
//! All world coordinates are integer pixels with the origin at the top-left of
//! the arena and `y` growing downward, so "ground" is a large `y` value.

use std::fmt;

/// Axis-aligned rectangle in arena coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle of the given size whose center sits on `(cx, cy)`.
    pub const fn centered_on(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        Self::new(cx - width / 2, cy - height / 2, width, height)
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    #[inline]
    pub const fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    /// Moves the rectangle so its bottom edge lies on `bottom`.
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// Moves the rectangle so its left edge lies on `left`.
    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    /// Moves the rectangle so its right edge lies on `right`.
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    /// Returns true when the rectangles share interior area.
    ///
    /// Touching edges do not count, and a rectangle with no area never
    /// intersects anything.
    pub const fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{} {}x{}]",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Horizontal direction a fighter is looking toward.
///
/// Renderers mirror sprites when the fighter faces [`Facing::Left`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Unit sign along the x axis (`+1` right, `-1` left).
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Right => 1,
            Self::Left => -1,
        }
    }

    /// Sprite flip flag consumed by renderers.
    #[inline]
    pub const fn is_flipped(self) -> bool {
        matches!(self, Self::Left)
    }

    /// Facing that looks from `own_center_x` toward `target_center_x`.
    ///
    /// Ties resolve to [`Facing::Left`].
    pub const fn toward(own_center_x: i32, target_center_x: i32) -> Self {
        if target_center_x > own_center_x {
            Self::Right
        } else {
            Self::Left
        }
    }

    /// Places a box of `width` in front of `anchor_x`: starting at the anchor
    /// when facing right, ending at it when facing left.
    #[inline]
    pub const fn frontal_x(self, anchor_x: i32, width: i32) -> i32 {
        match self {
            Self::Right => anchor_x,
            Self::Left => anchor_x - width,
        }
    }
}
