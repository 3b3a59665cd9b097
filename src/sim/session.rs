//! Frame orchestration
//!
//! One [`Session`] owns the map, the player, and the view configuration, and
//! is handed down to whoever drives the frame loop. No shared instance, no
//! global access point: the driver constructs a session and passes it.
//!
//! Per frame the driver calls [`Session::advance`] with the sampled input,
//! then [`Session::cast_view_into`] and paints one column or line per
//! returned ray.

use crate::map::GridMap;
use crate::settings::ViewConfig;
use crate::sim::player::{FrameInput, Player};
use crate::sim::raycast::{self, RayHit};

/// An engine session: map, player and view configuration under one owner
#[derive(Debug, Clone)]
pub struct Session {
    map: GridMap,
    player: Player,
    view: ViewConfig,
}

impl Session {
    pub fn new(map: GridMap, player: Player, view: ViewConfig) -> Self {
        Self { map, player, view }
    }

    #[inline]
    pub fn map(&self) -> &GridMap {
        &self.map
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable player access for external collaborators (level resets,
    /// teleports). Frame-to-frame movement goes through [`Session::advance`].
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[inline]
    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Run one frame of simulation: apply the input intents, then bring the
    /// heading back into its canonical range so every consumer of the angle
    /// reads `[0, 2*pi)`.
    pub fn advance(&mut self, input: &FrameInput) {
        self.player.apply_input(input, &self.map);
        self.player.normalize_angle();
    }

    /// Direction of ray `index` in the fan, left to right:
    /// `angle - fov/2 + index * fov / (ray_count - 1)`.
    #[inline]
    pub fn ray_angle(&self, index: u32) -> f32 {
        self.player.angle() + self.view.ray_offset(index)
    }

    /// Cast the full fan into `out`, one [`RayHit`] per ray index. The buffer
    /// is cleared and refilled so a driver can reuse one allocation for the
    /// life of the session.
    ///
    /// Distances are raw Euclidean unless the view config opts into the
    /// perpendicular (fish-eye corrected) form. Assumes the heading is
    /// normalized, which [`Session::advance`] maintains.
    pub fn cast_view_into(&self, out: &mut Vec<RayHit>) {
        out.clear();
        out.reserve(self.view.ray_count as usize);

        let facing = self.player.angle();
        for index in 0..self.view.ray_count {
            let ray_angle = self.ray_angle(index);
            let mut hit = raycast::cast(self.player.position(), ray_angle, &self.map);
            if self.view.fisheye_correction {
                hit.distance = raycast::perpendicular_distance(hit.distance, ray_angle, facing);
            }
            out.push(hit);
        }
    }

    /// Allocating convenience wrapper around [`Session::cast_view_into`]
    pub fn cast_view(&self) -> Vec<RayHit> {
        let mut hits = Vec::with_capacity(self.view.ray_count as usize);
        self.cast_view_into(&mut hits);
        hits
    }
}
