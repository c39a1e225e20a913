//! Integer grid primitives shared by the track generator and layout code.

use glam::{IVec2, Vec2};

pub mod direction;

pub use direction::Direction;

/// Returns `true` if `cell` lies on a square grid of side `grid_size`.
pub fn in_bounds(cell: IVec2, grid_size: u32) -> bool {
    let size = grid_size as i64;
    (0..size).contains(&(cell.x as i64)) && (0..size).contains(&(cell.y as i64))
}

/// The cell at the centre of a square grid, rounding down for even sizes.
pub fn center_cell(grid_size: u32) -> IVec2 {
    IVec2::splat((grid_size / 2) as i32)
}

/// Manhattan distance between two cells.
pub fn manhattan(a: IVec2, b: IVec2) -> u32 {
    let delta = (a - b).abs();
    (delta.x + delta.y) as u32
}

/// Packs a cell into a single integer key.
///
/// Both coordinates keep their full 32 bits, so distinct cells never collide.
pub fn cell_key(cell: IVec2) -> u64 {
    ((cell.x as u32 as u64) << 32) | cell.y as u32 as u64
}

/// The world-space centre of a cell for a given tile size.
pub fn cell_center(cell: IVec2, tile_size: f32) -> Vec2 {
    cell.as_vec2() * tile_size + Vec2::splat(tile_size / 2.0)
}
