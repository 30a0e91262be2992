//! Mapping between WGS84 and the local pixel grid of one tile layer.
//!
//! Local coordinates start at the tile's north-west corner and grow east (x) and south (y),
//! running from `0` to `extent` across the tile.

use anyhow::{Result, bail};
use vectile_core::{Tile, TileError, mercator};

use crate::geo::Coordinates;

/// Absolute position in local tile pixels, as accumulated from command stream deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalCursor {
	pub x: i64,
	pub y: i64,
}

impl LocalCursor {
	#[must_use]
	pub fn new(x: i64, y: i64) -> Self {
		LocalCursor { x, y }
	}

	/// Moves the cursor by a decoded delta.
	#[must_use]
	pub fn offset(self, dx: i64, dy: i64) -> Self {
		LocalCursor {
			x: self.x + dx,
			y: self.y + dy,
		}
	}
}

/// Converts between WGS84 and local pixels of a tile at a given layer extent.
#[derive(Clone, Debug, PartialEq)]
pub struct TileTransform {
	zoom: u8,
	extent: u32,
	left: f64,
	top: f64,
}

impl TileTransform {
	/// Builds the transform for `tile` with `extent` pixels per tile side.
	///
	/// # Errors
	/// Fails with [`TileError::InvalidLayer`] if `extent` is 0.
	pub fn new(tile: &Tile, extent: u32) -> Result<TileTransform> {
		if extent == 0 {
			bail!(TileError::InvalidLayer {
				reason: "extent must be greater than 0".to_string(),
			});
		}
		let meters = mercator::lat_lon_to_meters(tile.top(), tile.left())?;
		let [left, top] = mercator::meters_to_pixels(meters, tile.zoom(), extent);
		// tile corners sit on whole pixels; rounding drops the float noise of the round trip
		Ok(TileTransform {
			zoom: tile.zoom(),
			extent,
			left: left.round(),
			top: top.round(),
		})
	}

	#[must_use]
	pub fn zoom(&self) -> u8 {
		self.zoom
	}

	#[must_use]
	pub fn extent(&self) -> u32 {
		self.extent
	}

	/// Global pixel position of the tile's north-west corner, with y growing northward.
	#[must_use]
	pub fn origin(&self) -> [f64; 2] {
		[self.left, self.top]
	}

	/// Converts a local pixel position into `(lon, lat)`.
	#[must_use]
	pub fn transform_inverse(&self, local: [f64; 2]) -> Coordinates {
		let pixels = [self.left + local[0], self.top - local[1]];
		let meters = mercator::pixels_to_meters(pixels, self.zoom, self.extent);
		let [lat, lon] = mercator::meters_to_lat_lon(meters);
		Coordinates::new(lon, lat)
	}

	/// Projects a `(lon, lat)` point into local pixels, rounded to whole pixels.
	///
	/// Returns the new cursor together with its delta from `cursor`, which is what the
	/// command stream stores.
	///
	/// # Errors
	/// Fails with [`TileError::CoordinateOutOfRange`] outside the Web Mercator band.
	pub fn transform(&self, point: &Coordinates, cursor: LocalCursor) -> Result<(LocalCursor, [i64; 2])> {
		let meters = mercator::lat_lon_to_meters(point.y(), point.x())?;
		let [px, py] = mercator::meters_to_pixels(meters, self.zoom, self.extent);
		let local = LocalCursor::new((px - self.left).round() as i64, (self.top - py).round() as i64);
		Ok((local, [local.x - cursor.x, local.y - cursor.y]))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;

	fn tile(x: u32, y: u32, zoom: u8) -> Tile {
		Tile::new(x, y, zoom).unwrap()
	}

	#[test]
	fn rejects_zero_extent() {
		let err = TileTransform::new(&tile(0, 0, 0), 0).unwrap_err();
		assert!(matches!(
			err.downcast_ref::<TileError>(),
			Some(TileError::InvalidLayer { .. })
		));
	}

	#[rstest]
	#[case(tile(0, 0, 0), 4096, [0.0, 4096.0])]
	#[case(tile(1, 0, 1), 4096, [4096.0, 8192.0])]
	#[case(tile(3, 4, 5), 256, [768.0, 7168.0])]
	#[case(tile(550, 335, 10), 4096, [2_252_800.0, 2_822_144.0])]
	fn origin(#[case] tile: Tile, #[case] extent: u32, #[case] expected: [f64; 2]) -> Result<()> {
		assert_eq!(TileTransform::new(&tile, extent)?.origin(), expected);
		Ok(())
	}

	#[rstest]
	#[case(tile(0, 0, 0))]
	#[case(tile(1, 1, 1))]
	#[case(tile(550, 335, 10))]
	#[case(tile(140_821, 85_975, 18))]
	fn corners_map_to_tile_bounds(#[case] tile: Tile) -> Result<()> {
		let transform = TileTransform::new(&tile, 4096)?;

		let nw = transform.transform_inverse([0.0, 0.0]);
		assert_abs_diff_eq!(nw.x(), tile.left(), epsilon = 1e-9);
		assert_abs_diff_eq!(nw.y(), tile.top(), epsilon = 1e-9);

		let se = transform.transform_inverse([4096.0, 4096.0]);
		assert_abs_diff_eq!(se.x(), tile.right(), epsilon = 1e-9);
		assert_abs_diff_eq!(se.y(), tile.bottom(), epsilon = 1e-9);
		Ok(())
	}

	#[test]
	fn forward_then_inverse() -> Result<()> {
		let t = tile(550, 335, 10);
		let transform = TileTransform::new(&t, 4096)?;
		let berlin = Coordinates::new(13.405, 52.52);

		let (cursor, delta) = transform.transform(&berlin, LocalCursor::default())?;
		assert_eq!(delta, [cursor.x, cursor.y]);
		assert!((0..4096).contains(&cursor.x));
		assert!((0..4096).contains(&cursor.y));

		let back = transform.transform_inverse([cursor.x as f64, cursor.y as f64]);
		// one pixel at zoom 10 with extent 4096 is well below 1e-4 degrees
		assert_abs_diff_eq!(back.x(), berlin.x(), epsilon = 1e-4);
		assert_abs_diff_eq!(back.y(), berlin.y(), epsilon = 1e-4);
		Ok(())
	}

	#[test]
	fn forward_returns_delta_from_cursor() -> Result<()> {
		let transform = TileTransform::new(&tile(0, 0, 0), 4096)?;
		let center = Coordinates::new(0.0, 0.0);
		let (cursor, delta) = transform.transform(&center, LocalCursor::new(2000, 2100))?;
		assert_eq!(cursor, LocalCursor::new(2048, 2048));
		assert_eq!(delta, [48, -52]);

		assert!(transform.transform(&Coordinates::new(0.0, 89.0), cursor).is_err());
		Ok(())
	}

	#[test]
	fn cursor_offset() {
		assert_eq!(LocalCursor::new(1, 2).offset(-3, 4), LocalCursor::new(-2, 6));
	}
}
