//! Arena bounds and the clamping rules shared by movement and knockback.

use crate::config::SimConfig;
use crate::error::SetupError;
use crate::geometry::{Facing, Rect};

/// Playfield dimensions plus the physics constants tied to them.
///
/// Horizontal limits are `[0, width]`. The ground line sits `ground_offset`
/// pixels above the bottom edge and no body may sink below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    width: i32,
    height: i32,
    ground_offset: i32,
    gravity: i32,
}

impl Arena {
    pub fn new(width: i32, height: i32) -> Result<Self, SetupError> {
        Self::with_physics(
            width,
            height,
            SimConfig::DEFAULT_GROUND_OFFSET,
            SimConfig::DEFAULT_GRAVITY,
        )
    }

    pub fn with_physics(
        width: i32,
        height: i32,
        ground_offset: i32,
        gravity: i32,
    ) -> Result<Self, SetupError> {
        if width <= 0 || height <= 0 {
            return Err(SetupError::InvalidArena { width, height });
        }
        if ground_offset < 0 || ground_offset >= height {
            return Err(SetupError::GroundOutsideArena {
                offset: ground_offset,
                height,
            });
        }
        if gravity <= 0 {
            return Err(SetupError::NonPositiveGravity(gravity));
        }
        Ok(Self {
            width,
            height,
            ground_offset,
            gravity,
        })
    }

    pub fn from_config(config: &SimConfig) -> Result<Self, SetupError> {
        Self::with_physics(
            config.arena_width,
            config.arena_height,
            config.ground_offset,
            config.gravity,
        )
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub const fn gravity(&self) -> i32 {
        self.gravity
    }

    /// Y coordinate of the ground line.
    #[inline]
    pub const fn ground(&self) -> i32 {
        self.height - self.ground_offset
    }

    /// Shrinks a horizontal step so `rect` stays within `[0, width]`.
    pub fn clamp_horizontal_delta(&self, rect: &Rect, dx: i32) -> i32 {
        let mut dx = dx;
        if rect.left() + dx < 0 {
            dx = -rect.left();
        }
        if rect.right() + dx > self.width {
            dx = self.width - rect.right();
        }
        dx
    }

    /// Shrinks a vertical step so the bottom of `rect` never passes the
    /// ground. Returns the allowed step and whether the body touched down.
    pub fn clamp_vertical(&self, rect: &Rect, dy: i32) -> (i32, bool) {
        let ground = self.ground();
        if rect.bottom() + dy > ground {
            (ground - rect.bottom(), true)
        } else {
            (dy, false)
        }
    }

    /// Pushes `rect` back inside the horizontal bounds.
    pub fn clamp_into(&self, rect: &mut Rect) {
        if rect.left() < 0 {
            rect.set_left(0);
        } else if rect.right() > self.width {
            rect.set_right(self.width);
        }
    }

    /// Displaces `rect` by `force` pixels along `facing`, then clamps.
    pub fn knockback(&self, rect: &mut Rect, facing: Facing, force: i32) {
        rect.x += facing.sign() * force;
        self.clamp_into(rect);
    }

    /// Grounded body of the given size with its left edge at `x`.
    pub fn spawn_rect(&self, x: i32, width: i32, height: i32) -> Result<Rect, SetupError> {
        if width <= 0 || height <= 0 || width > self.width || height > self.ground() {
            return Err(SetupError::BodyTooLarge { width, height });
        }
        if x < 0 || x + width > self.width {
            return Err(SetupError::SpawnOutsideArena {
                x,
                width,
                arena_width: self.width,
            });
        }
        let mut rect = Rect::new(x, 0, width, height);
        rect.set_bottom(self.ground());
        Ok(rect)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: SimConfig::DEFAULT_ARENA_WIDTH,
            height: SimConfig::DEFAULT_ARENA_HEIGHT,
            ground_offset: SimConfig::DEFAULT_GROUND_OFFSET,
            gravity: SimConfig::DEFAULT_GRAVITY,
        }
    }
}
