//! Spherical Web Mercator (EPSG:3857) projection.
//!
//! Three coordinate spaces are involved:
//! - WGS84 degrees, always passed as `(lat, lon)` and returned as `[lat, lon]`
//! - Mercator meters `[x, y]`, with the origin at (0°, 0°)
//! - global pixels `[x, y]` at a zoom level and tile size, with the origin in the south-west
//!   corner of the world and y growing northward
//!
//! ```
//! use vectile_core::mercator;
//!
//! let meters = mercator::lat_lon_to_meters(52.52, 13.405).unwrap();
//! let [lat, lon] = mercator::meters_to_lat_lon(meters);
//! assert!((lat - 52.52).abs() < 1e-9);
//! assert!((lon - 13.405).abs() < 1e-9);
//! ```

use crate::{
	TileError,
	constants::{EARTH_RADIUS, MAX_LAT, ORIGIN_SHIFT, WORLD_SIZE},
};
use anyhow::{Result, bail};
use std::f64::consts::PI;

/// Accepts latitudes a hair outside the band so that the exact tile edges still project.
const LAT_TOLERANCE: f64 = 1e-9;

/// Projects a WGS84 location into Mercator meters.
///
/// # Errors
/// Fails with [`TileError::CoordinateOutOfRange`] if the latitude lies outside
/// ±[`MAX_LAT`] or if either input is not finite.
pub fn lat_lon_to_meters(lat: f64, lon: f64) -> Result<[f64; 2]> {
	if !lat.is_finite() || !lon.is_finite() || lat.abs() > MAX_LAT + LAT_TOLERANCE {
		bail!(TileError::CoordinateOutOfRange { lat, lon });
	}
	let x = lon * ORIGIN_SHIFT / 180.0;
	let y = ((90.0 + lat) * PI / 360.0).tan().ln() * EARTH_RADIUS;
	Ok([x, y])
}

/// Inverse of [`lat_lon_to_meters`], returns `[lat, lon]`.
#[must_use]
pub fn meters_to_lat_lon(meters: [f64; 2]) -> [f64; 2] {
	let lon = meters[0] / ORIGIN_SHIFT * 180.0;
	let lat = (2.0 * (meters[1] / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
	[lat, lon]
}

/// Meters per pixel at the equator for the given zoom level and tile size.
#[must_use]
pub fn resolution(zoom: u8, tile_size: u32) -> f64 {
	WORLD_SIZE / f64::from(tile_size) / 2f64.powi(i32::from(zoom))
}

#[must_use]
pub fn meters_to_pixels(meters: [f64; 2], zoom: u8, tile_size: u32) -> [f64; 2] {
	let res = resolution(zoom, tile_size);
	[(meters[0] + ORIGIN_SHIFT) / res, (meters[1] + ORIGIN_SHIFT) / res]
}

#[must_use]
pub fn pixels_to_meters(pixels: [f64; 2], zoom: u8, tile_size: u32) -> [f64; 2] {
	let res = resolution(zoom, tile_size);
	[pixels[0] * res - ORIGIN_SHIFT, pixels[1] * res - ORIGIN_SHIFT]
}
