//! Gridcaster - a grid-based first-person raycasting engine core
//!
//! Core modules:
//! - `vec2`: 2D vector primitive the simulation is built on
//! - `map`: rectangular tile map queried by integer cell coordinate
//! - `sim`: deterministic simulation (raycasting, physics, player, session)
//! - `settings`: view configuration (field of view, ray fan, projection policy)
//!
//! The crate is the in-process core a driver links against: the driver samples
//! input, hands a [`FrameInput`] to [`Session::advance`], then paints the
//! per-ray results of [`Session::cast_view_into`]. Windowing, key polling and
//! pixel drawing stay on the driver's side of that boundary.

pub mod map;
pub mod settings;
pub mod sim;
pub mod vec2;

pub use map::{GridMap, Tile};
pub use settings::ViewConfig;
pub use sim::player::{FrameInput, Player};
pub use sim::raycast::RayHit;
pub use sim::session::Session;
pub use vec2::{Vec2f, Vector2};

/// Engine tuning constants
pub mod consts {
    use std::f32::consts::PI;

    /// Per-frame linear step, in grid cells (fixed-step, no delta-time scaling)
    pub const DEFAULT_MOVE_SPEED: f32 = 0.045;
    /// Per-frame rotation step, in radians
    pub const DEFAULT_TURN_SPEED: f32 = 0.03;
    /// Player collision disk radius, in grid cells
    pub const DEFAULT_PLAYER_RADIUS: f32 = 0.2;
    /// Total angular width of the ray fan
    pub const DEFAULT_FOV: f32 = PI / 2.7;
    /// Rays cast per frame (one per screen column at the reference resolution)
    pub const DEFAULT_RAY_COUNT: u32 = 160;
}

/// Unit direction vector for a heading angle in radians
#[inline]
pub fn direction_from_angle(angle: f32) -> Vec2f {
    Vector2::new(angle.cos(), angle.sin())
}
