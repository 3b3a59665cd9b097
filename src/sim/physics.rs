//! Movement physics
//!
//! Pure functions from (current state, desired change, map, radius) to the
//! next legal state. The player body is a disk; a candidate position is legal
//! only if that disk overlaps no wall cell. Blocked moves degrade axis by
//! axis instead of stopping dead, which is what makes walls feel slidable.

use std::f32::consts::TAU;

use crate::direction_from_angle;
use crate::map::GridMap;
use crate::vec2::{Vec2f, Vector2};

/// Apply a rotation delta. Deliberately does not normalize; callers run
/// [`normalize_angle`] once before the angle is consumed, not after every
/// small adjustment.
#[inline]
pub fn update_angle(angle: f32, delta: f32) -> f32 {
    angle + delta
}

/// Bring an angle into `[0, 2*pi)`.
///
/// Loop-based light normalization for headings that drift by bounded
/// per-frame deltas, not a general modulo for arbitrary magnitudes.
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    while angle < 0.0 {
        angle += TAU;
    }
    while angle >= TAU {
        angle -= TAU;
    }
    angle
}

/// Whether a disk at `center` overlaps any wall cell.
///
/// Tests the disk against the axis-aligned box of every wall cell its
/// bounding box touches, by clamping the center onto the box and comparing
/// squared distances. Cell-center containment alone would cut corners at
/// shallow incidence angles; the clamp test does not. Touching a wall
/// exactly at the radius does not count as overlap, so a body can sit flush
/// against a wall and still slide along it.
pub fn disk_overlaps_wall(center: Vec2f, radius: f32, map: &GridMap) -> bool {
    let min_column = (center.x - radius).floor() as i32;
    let max_column = (center.x + radius).floor() as i32;
    let min_row = (center.y - radius).floor() as i32;
    let max_row = (center.y + radius).floor() as i32;

    let radius_squared = radius * radius;

    for row in min_row..=max_row {
        for column in min_column..=max_column {
            if !map.is_wall(column, row) {
                continue;
            }
            let closest = Vector2::new(
                center.x.clamp(column as f32, column as f32 + 1.0),
                center.y.clamp(row as f32, row as f32 + 1.0),
            );
            if (center - closest).length_squared() < radius_squared {
                return true;
            }
        }
    }
    false
}

/// Advance a position by `speed` along `angle`, collision-resolved.
///
/// Resolution attempts, in order: the full displacement, then X-only, then
/// Y-only, and finally no move at all. The first legal candidate wins. The
/// order is contractual: it is what turns a blocked diagonal into a slide
/// along the wall instead of a hard stop, and reordering the attempts
/// changes observable behavior.
pub fn update_position(
    position: Vec2f,
    speed: f32,
    angle: f32,
    map: &GridMap,
    radius: f32,
) -> Vec2f {
    let displacement = direction_from_angle(angle) * speed;
    let full = position + displacement;
    if !disk_overlaps_wall(full, radius, map) {
        return full;
    }

    let x_only = position.with_x(full.x);
    if !disk_overlaps_wall(x_only, radius, map) {
        return x_only;
    }

    let y_only = position.with_y(full.y);
    if !disk_overlaps_wall(y_only, radius, map) {
        return y_only;
    }

    position
}
