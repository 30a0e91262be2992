//! Web Mercator constants shared by the projector and the tile math.

use std::f64::consts::PI;

/// WGS84 semi-major axis (equatorial radius) in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the Mercator circumference (`PI * EARTH_RADIUS`): the meter offset of the world's edge.
pub const ORIGIN_SHIFT: f64 = PI * EARTH_RADIUS;

/// Earth circumference in meters at the equator.
pub const WORLD_SIZE: f64 = 2.0 * ORIGIN_SHIFT;

/// Maximum latitude in degrees for the Web Mercator projection (EPSG:3857).
///
/// Equals `atan(sinh(PI))` in degrees.
pub const MAX_LAT: f64 = 85.051_128_779_806_59;

/// Maximum longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Deepest zoom level whose tile ids still fit into a `u64`.
pub const MAX_ZOOM: u8 = 31;

/// Pixel extent of a layer when nothing else is declared.
pub const DEFAULT_EXTENT: u32 = 4096;
