//! Player state
//!
//! Thin state holder: position, heading, per-frame speeds, collision radius.
//! Every state transition goes through [`crate::sim::physics`]; the struct
//! itself never touches the map directly.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MOVE_SPEED, DEFAULT_PLAYER_RADIUS, DEFAULT_TURN_SPEED};
use crate::map::GridMap;
use crate::sim::physics;
use crate::vec2::Vec2f;

/// Input intents for a single frame
///
/// Four booleans; the magnitude of each intent comes from the player's fixed
/// per-frame speed constants rather than a delta-time term (a deliberate
/// fixed-cadence simplification).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub forward: bool,
    pub backward: bool,
    /// Subtracts the turn speed from the heading
    pub turn_left: bool,
    /// Adds the turn speed to the heading
    pub turn_right: bool,
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    position: Vec2f,
    /// Heading in radians. May drift out of `[0, 2*pi)` across updates;
    /// consumers call [`Player::normalize_angle`] before reading it.
    angle: f32,
    move_speed: f32,
    turn_speed: f32,
    radius: f32,
}

impl Player {
    /// Player at a position and heading with the default motion constants
    pub fn new(position: Vec2f, angle: f32) -> Self {
        Self::with_motion(
            position,
            angle,
            DEFAULT_MOVE_SPEED,
            DEFAULT_TURN_SPEED,
            DEFAULT_PLAYER_RADIUS,
        )
    }

    /// Fully configured player. A non-positive radius is a construction
    /// error the caller must not produce.
    pub fn with_motion(
        position: Vec2f,
        angle: f32,
        move_speed: f32,
        turn_speed: f32,
        radius: f32,
    ) -> Self {
        assert!(radius > 0.0, "player radius must be positive");
        Self {
            position,
            angle,
            move_speed,
            turn_speed,
            radius,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2f {
        self.position
    }

    /// Raw heading. In `[0, 2*pi)` only after [`Player::normalize_angle`].
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    #[inline]
    pub fn turn_speed(&self) -> f32 {
        self.turn_speed
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Used by external collaborators only, e.g. a level reset. Physics-driven
    /// movement goes through [`Player::apply_input`].
    pub fn set_position(&mut self, position: Vec2f) {
        self.position = position;
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Bring the heading into `[0, 2*pi)`. Mutators skip this on purpose so
    /// several small rotations in one logical update normalize once, not per
    /// step; any consumer of the heading runs it first.
    pub fn normalize_angle(&mut self) {
        self.angle = physics::normalize_angle(self.angle);
    }

    /// Apply one frame of input intents. More than one intent can be active
    /// in the same frame, so each is checked separately.
    pub fn apply_input(&mut self, input: &FrameInput, map: &GridMap) {
        if input.forward {
            self.position =
                physics::update_position(self.position, self.move_speed, self.angle, map, self.radius);
        }

        if input.backward {
            self.position = physics::update_position(
                self.position,
                -self.move_speed,
                self.angle,
                map,
                self.radius,
            );
        }

        if input.turn_left {
            self.angle = physics::update_angle(self.angle, -self.turn_speed);
        }

        if input.turn_right {
            self.angle = physics::update_angle(self.angle, self.turn_speed);
        }
    }
}
