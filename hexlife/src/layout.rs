// layout.rs - Hex geometry for drawing a grid
//
// Flat-topped hexagons in grid units: columns step 1.5 apart, odd columns
// drop by half a hex height.

use std::f32::consts::PI;

pub const HEX_RADIUS: f32 = 0.7;
const SQRT_3: f32 = 1.732_050_8;

/// Center of the hexagon for (row, col).
pub fn center(row: usize, col: usize) -> (f32, f32) {
    let x = col as f32 * 1.5;
    let y = row as f32 * SQRT_3 + (col % 2) as f32 * SQRT_3 / 2.0;
    (x, y)
}

/// The six corners of the hexagon for (row, col), counter-clockwise from
/// the rightmost one.
pub fn corners(row: usize, col: usize) -> [(f32, f32); 6] {
    let (cx, cy) = center(row, col);
    std::array::from_fn(|i| {
        let angle = PI / 3.0 * i as f32;
        (cx + HEX_RADIUS * angle.cos(), cy + HEX_RADIUS * angle.sin())
    })
}

/// Drawing extent as ((min_x, min_y), (max_x, max_y)).
pub fn bounds(rows: usize, cols: usize) -> ((f32, f32), (f32, f32)) {
    ((-1.0, -1.0), (cols as f32 * 1.5, rows as f32 * SQRT_3 + 1.0))
}
