//! Supercover traversal of the tile grid.
//!
//! Given a segment in fractional grid units (integer part = tile column/row, fraction =
//! position inside the tile), [`line_between`] lists every tile the segment touches, in
//! order, each one sharing an edge with its predecessor.

use crate::{Tile, TileError};
use anyhow::{Context, Result, bail};
use log::trace;

/// A tile column/row pair on the grid. Signed so that segments may start off-grid.
pub type GridCell = (i64, i64);

/// Lists the grid cells crossed by the segment from `(x1, y1)` to `(x2, y2)`.
///
/// The result always starts with the start cell and ends with the end cell, and it holds
/// `|Δx| + |Δy| + 1` cells where `Δ` is measured in whole cells. When the segment passes
/// exactly through a corner, the intermediate cell is the one with the smaller y.
/// Swapping the endpoints reverses the result.
///
/// ```
/// use vectile_core::traversal::line_between;
///
/// let cells = line_between(0.5, 0.5, 2.5, 1.5).unwrap();
/// assert_eq!(cells, vec![(0, 0), (1, 0), (1, 1), (2, 1)]);
/// ```
///
/// # Errors
/// Fails with [`TileError::CoordinateOutOfRange`] if any input is not finite.
pub fn line_between(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Vec<GridCell>> {
	for (x, y) in [(x1, y1), (x2, y2)] {
		if !x.is_finite() || !y.is_finite() {
			bail!(TileError::CoordinateOutOfRange { lat: y, lon: x });
		}
	}

	// always walk from the lexicographically smaller endpoint, so reversal is exact
	let cells = if (x1, y1) > (x2, y2) {
		let mut cells = walk(x2, y2, x1, y1);
		cells.reverse();
		cells
	} else {
		walk(x1, y1, x2, y2)
	};

	trace!("segment ({x1}, {y1}) -> ({x2}, {y2}) crosses {} cells", cells.len());
	Ok(cells)
}

/// Lists the tiles at `zoom` crossed by the straight Mercator segment between two locations.
///
/// Locations are `[lat, lon]` in degrees.
///
/// # Errors
/// Fails if a location lies outside the Web Mercator band.
pub fn tiles_between(zoom: u8, from: [f64; 2], to: [f64; 2]) -> Result<Vec<Tile>> {
	let grid = Tile::new(0, 0, zoom)?;
	// the eastern and southern world edges belong to the last column and row
	let last = (1u64 << zoom) as f64 * (1.0 - f64::EPSILON);
	let on_grid = |[x, y]: [f64; 2]| [x.clamp(0.0, last), y.clamp(0.0, last)];
	let [x1, y1] = on_grid(grid.sub_coordinates(from[0], from[1])?);
	let [x2, y2] = on_grid(grid.sub_coordinates(to[0], to[1])?);

	line_between(x1, y1, x2, y2)?
		.into_iter()
		.map(|(x, y)| {
			let column = u32::try_from(x).with_context(|| format!("column {x} is not on the grid"))?;
			let row = u32::try_from(y).with_context(|| format!("row {y} is not on the grid"))?;
			Tile::new(column, row, zoom)
		})
		.collect()
}

fn walk(x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<GridCell> {
	let mut cell = (x1.floor() as i64, y1.floor() as i64);
	let end = (x2.floor() as i64, y2.floor() as i64);

	let step_x = (end.0 - cell.0).signum();
	let step_y = (end.1 - cell.1).signum();

	let dx = (x2 - x1).abs();
	let dy = (y2 - y1).abs();

	// parametric distance along the segment to the next vertical / horizontal grid line
	let (mut t_max_x, t_delta_x) = match step_x {
		0 => (f64::INFINITY, f64::INFINITY),
		1 => ((cell.0 as f64 + 1.0 - x1) / dx, 1.0 / dx),
		_ => ((x1 - cell.0 as f64) / dx, 1.0 / dx),
	};
	let (mut t_max_y, t_delta_y) = match step_y {
		0 => (f64::INFINITY, f64::INFINITY),
		1 => ((cell.1 as f64 + 1.0 - y1) / dy, 1.0 / dy),
		_ => ((y1 - cell.1 as f64) / dy, 1.0 / dy),
	};

	let steps = (end.0 - cell.0).unsigned_abs() + (end.1 - cell.1).unsigned_abs();
	let mut cells = Vec::with_capacity(steps as usize + 1);
	cells.push(cell);

	for _ in 0..steps {
		let x_left = cell.0 != end.0;
		let y_left = cell.1 != end.1;

		let move_x = if !y_left {
			true
		} else if !x_left {
			false
		} else if t_max_x == t_max_y {
			// exact corner: visit the neighbour with the smaller y first
			step_y > 0
		} else {
			t_max_x < t_max_y
		};

		if move_x {
			cell.0 += step_x;
			t_max_x += t_delta_x;
		} else {
			cell.1 += step_y;
			t_max_y += t_delta_y;
		}
		cells.push(cell);
	}

	cells
}
