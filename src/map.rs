//! Rectangular tile map
//!
//! A level is a fixed `width x height` grid of tiles, built once at load time
//! and read-only during gameplay. Queries take integer cell coordinates and
//! treat everything outside the rectangle as wall, so rays terminate at the
//! bounds and movement cannot leave the map. Raycasting and physics share
//! that policy through this one query path.

use serde::{Deserialize, Serialize};

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Open,
    Wall,
}

/// Immutable-during-play grid of tiles, row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridMap {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl GridMap {
    /// Build a map from row-major tiles. Zero-sized maps and mismatched tile
    /// counts are construction errors the level loader must not produce.
    pub fn new(width: u32, height: u32, tiles: Vec<Tile>) -> Self {
        assert!(width > 0 && height > 0, "map must have a non-zero size");
        assert_eq!(
            tiles.len(),
            (width * height) as usize,
            "tile count must match map dimensions"
        );
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Parse a textual level: space and `.` are open, anything else is wall.
    /// All rows must be the same length.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u32;

        let mut tiles = Vec::with_capacity((width * height) as usize);
        for row in rows {
            assert_eq!(
                row.chars().count(),
                width as usize,
                "all map rows must have the same length"
            );
            for ch in row.chars() {
                tiles.push(match ch {
                    ' ' | '.' => Tile::Open,
                    _ => Tile::Wall,
                });
            }
        }

        log::debug!("Built {}x{} map from ascii rows", width, height);
        Self::new(width, height, tiles)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile at `(column, row)`. Out-of-range coordinates read as [`Tile::Wall`].
    #[inline]
    pub fn tile(&self, column: i32, row: i32) -> Tile {
        if column < 0 || row < 0 || column >= self.width as i32 || row >= self.height as i32 {
            return Tile::Wall;
        }
        self.tiles[(row as u32 * self.width + column as u32) as usize]
    }

    #[inline]
    pub fn is_wall(&self, column: i32, row: i32) -> bool {
        self.tile(column, row) == Tile::Wall
    }
}
