//! Ray casting against the tile grid
//!
//! Finds the first wall boundary a ray crosses by walking the grid one cell
//! at a time (DDA), never by fixed-step marching: the ray advances along
//! whichever axis has the nearer upcoming grid line, so it visits every cell
//! it passes through and cannot tunnel past a thin wall or leak through a
//! corner at a shallow angle.

use crate::direction_from_angle;
use crate::map::GridMap;
use crate::vec2::Vec2f;

/// Where a ray stopped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Point on the wall boundary, in grid space
    pub point: Vec2f,
    /// Euclidean distance from the origin to the boundary. Not corrected for
    /// the viewer's facing angle; see [`perpendicular_distance`].
    pub distance: f32,
}

/// Cast a ray from `origin` at `angle` and return the first wall boundary it
/// crosses.
///
/// Out-of-range cells read as wall, so every ray terminates at the map bounds
/// at the latest and the loop needs no step cap. An origin already inside a
/// wall cell reports the origin itself at distance zero.
///
/// O(cells traversed), no allocation.
pub fn cast(origin: Vec2f, angle: f32, map: &GridMap) -> RayHit {
    let dir = direction_from_angle(angle);

    let mut column = origin.x.floor() as i32;
    let mut row = origin.y.floor() as i32;

    if map.is_wall(column, row) {
        return RayHit {
            point: origin,
            distance: 0.0,
        };
    }

    // Distance travelled along the ray while crossing one full cell on each
    // axis. A zero component divides to infinity, which parks that axis: the
    // comparison below then always advances the other one.
    let delta_x = 1.0 / dir.x.abs();
    let delta_y = 1.0 / dir.y.abs();

    // Distance to the first grid line on each axis, and the cell step sign.
    let step_x: i32;
    let mut side_x: f32;
    if dir.x < 0.0 {
        step_x = -1;
        side_x = (origin.x - column as f32) * delta_x;
    } else {
        step_x = 1;
        side_x = (column as f32 + 1.0 - origin.x) * delta_x;
    }

    let step_y: i32;
    let mut side_y: f32;
    if dir.y < 0.0 {
        step_y = -1;
        side_y = (origin.y - row as f32) * delta_y;
    } else {
        step_y = 1;
        side_y = (row as f32 + 1.0 - origin.y) * delta_y;
    }

    let distance = loop {
        let crossing;
        if side_x < side_y {
            crossing = side_x;
            side_x += delta_x;
            column += step_x;
        } else {
            crossing = side_y;
            side_y += delta_y;
            row += step_y;
        }

        if map.is_wall(column, row) {
            break crossing;
        }
    };

    RayHit {
        point: origin + dir * distance,
        distance,
    }
}

/// Project a raw hit distance onto the viewer's facing direction.
///
/// Column heights derived from raw Euclidean distances bow outward at the
/// edges of the view (fish-eye); multiplying by `cos(ray_angle - facing)`
/// flattens the projection plane. Opt-in for projection callers.
#[inline]
pub fn perpendicular_distance(distance: f32, ray_angle: f32, facing: f32) -> f32 {
    distance * (ray_angle - facing).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::GridMap;
    use crate::vec2::Vector2;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn open_10x10_with_wall_column_at_5() -> GridMap {
        GridMap::from_ascii(&[
            ".....#....",
            ".....#....",
            ".....#....",
            ".....#....",
            ".....#....",
            ".....#....",
            ".....#....",
            ".....#....",
            ".....#....",
            ".....#....",
        ])
    }

    #[test]
    fn test_axis_aligned_hit_on_wall_column() {
        let map = open_10x10_with_wall_column_at_5();
        let hit = cast(Vector2::new(0.0, 0.0), 0.0, &map);

        assert!((hit.distance - 5.0).abs() < 1e-5);
        assert!((hit.point.x - 5.0).abs() < 1e-5);
        assert!(hit.point.y.abs() < 1e-5);
    }

    #[test]
    fn test_cast_is_deterministic() {
        let map = open_10x10_with_wall_column_at_5();
        let origin = Vector2::new(1.3, 7.2);
        let a = cast(origin, 0.37, &map);
        let b = cast(origin, 0.37, &map);
        assert_eq!(a, b);
    }

    #[test]
    fn test_origin_inside_wall_reports_zero() {
        let map = open_10x10_with_wall_column_at_5();
        let origin = Vector2::new(5.5, 3.5);
        let hit = cast(origin, 1.1, &map);
        assert_eq!(hit.distance, 0.0);
        assert_eq!(hit.point, origin);
    }

    #[test]
    fn test_boundary_exit_hits_map_edge() {
        // fully open map: the implicit wall outside the rectangle stops the ray
        let map = GridMap::from_ascii(&["....", "....", "....", "...."]);
        let hit = cast(Vector2::new(2.0, 2.5), 0.0, &map);
        assert!((hit.distance - 2.0).abs() < 1e-5);
        assert!((hit.point.x - 4.0).abs() < 1e-5);

        let hit_up = cast(Vector2::new(2.5, 2.0), -FRAC_PI_2, &map);
        assert!((hit_up.distance - 2.0).abs() < 1e-5);
        assert!(hit_up.point.y.abs() < 1e-5);
    }

    #[test]
    fn test_vertical_ray_with_zero_x_component() {
        let map = GridMap::from_ascii(&[
            "....", //
            "....", //
            "####",
        ]);
        let hit = cast(Vector2::new(1.5, 0.5), FRAC_PI_2, &map);
        assert!((hit.distance - 1.5).abs() < 1e-5);
        assert!((hit.point.x - 1.5).abs() < 1e-5);
        assert!((hit.point.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_negative_direction_from_gridline_origin() {
        // origin exactly on a vertical grid line, heading -x: the crossing at
        // the origin itself is at distance zero, so the walk starts in the
        // cell to the left
        let map = GridMap::from_ascii(&["#...."]);
        let hit = cast(Vector2::new(3.0, 0.5), PI, &map);
        assert!((hit.distance - 2.0).abs() < 1e-4);
        assert!((hit.point.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_diagonal_hit_distance() {
        // 45 degrees across open cells into the wall ring of a bordered map
        let map = GridMap::from_ascii(&[
            "#####", //
            "#...#", //
            "#...#", //
            "#...#", //
            "#####",
        ]);
        let hit = cast(Vector2::new(1.5, 1.5), PI / 4.0, &map);
        // first boundary of the border ring along the diagonal is x = y = 4
        let expected = (2.5_f32 * 2.5 + 2.5 * 2.5).sqrt();
        assert!((hit.distance - expected).abs() < 1e-4);
    }

    #[test]
    fn test_perpendicular_distance_center_ray_unchanged() {
        let d = 7.5;
        assert_eq!(perpendicular_distance(d, 1.2, 1.2), d);
        let corrected = perpendicular_distance(d, 1.2 + PI / 4.0, 1.2);
        assert!((corrected - d * (PI / 4.0).cos()).abs() < 1e-5);
    }
}
