//! Tile identity in the XYZ Web Mercator pyramid.
//!
//! Every tile `(x, y, zoom)` has a single 64-bit id. Ids are ordered by zoom first, then
//! row, then column, and each zoom level occupies a contiguous id range:
//!
//! ```text
//! id = base(zoom) + y * 2^zoom + x        base(zoom) = (4^zoom - 1) / 3
//! ```
//!
//! ```
//! use vectile_core::Tile;
//!
//! let tile = Tile::new(3, 4, 5).unwrap();
//! assert_eq!(tile.id(), 472);
//! assert_eq!(Tile::from_id(472).unwrap(), tile);
//! assert_eq!(tile.to_string(), "3x-4y@5z");
//! ```

use crate::{TileError, TileRange, constants::MAX_ZOOM, mercator};
use anyhow::{Result, bail};
use std::{
	cmp::Ordering,
	f64::consts::PI,
	fmt::{self, Debug, Display},
	hash::{Hash, Hasher},
};

/// Latitude limit used when locating tiles around a point.
const LOCATION_MAX_LAT: f64 = 85.0511;

/// First id of the given zoom level, i.e. the number of tiles in all lower levels.
#[must_use]
pub fn base_id(zoom: u8) -> u64 {
	((1u64 << (2 * u32::from(zoom))) - 1) / 3
}

/// Number of tiles along one axis at `zoom`.
fn axis_size(zoom: u8) -> u64 {
	1u64 << zoom
}

/// Largest valid tile id (the last tile of zoom level 31).
#[must_use]
pub fn max_id() -> u64 {
	base_id(MAX_ZOOM) + axis_size(MAX_ZOOM) * axis_size(MAX_ZOOM) - 1
}

/// A tile of the pyramid together with its id and its geographic bounds.
///
/// Tiles are immutable. Equality, hashing and ordering all follow the id.
#[derive(Clone, Copy)]
pub struct Tile {
	x: u32,
	y: u32,
	zoom: u8,
	id: u64,
	top: f64,
	bottom: f64,
	left: f64,
	right: f64,
}

impl Tile {
	/// Creates the tile at column `x`, row `y` of zoom level `zoom`.
	///
	/// # Errors
	/// Fails with [`TileError::TileOutOfBounds`] if `zoom > 31` or `x`/`y` lie outside `[0, 2^zoom)`.
	pub fn new(x: u32, y: u32, zoom: u8) -> Result<Tile> {
		if !Tile::is_valid(i64::from(x), i64::from(y), i64::from(zoom)) {
			bail!(TileError::TileOutOfBounds {
				x: i64::from(x),
				y: i64::from(y),
				zoom: i64::from(zoom),
			});
		}
		Ok(Tile::from_valid(x, y, zoom))
	}

	/// Builds a tile whose coordinates are already known to be valid.
	pub(crate) fn from_valid(x: u32, y: u32, zoom: u8) -> Tile {
		let size = axis_size(zoom) as f64;
		let lat = |row: u32| {
			let n = PI - 2.0 * PI * f64::from(row) / size;
			n.sinh().atan().to_degrees()
		};
		let lon = |column: u32| f64::from(column) / size * 360.0 - 180.0;

		Tile {
			x,
			y,
			zoom,
			id: base_id(zoom) + axis_size(zoom) * u64::from(y) + u64::from(x),
			top: lat(y),
			bottom: lat(y + 1),
			left: lon(x),
			right: lon(x + 1),
		}
	}

	/// Recovers a tile from its id.
	///
	/// # Errors
	/// Fails with [`TileError::InvalidTileId`] for ids beyond the last tile of zoom level 31.
	pub fn from_id(id: u64) -> Result<Tile> {
		if id > max_id() {
			bail!(TileError::InvalidTileId(id));
		}
		let mut zoom = 0;
		while zoom < MAX_ZOOM && base_id(zoom + 1) <= id {
			zoom += 1;
		}
		let offset = id - base_id(zoom);
		let size = axis_size(zoom);
		Ok(Tile::from_valid((offset % size) as u32, (offset / size) as u32, zoom))
	}

	/// Checks whether the signed triple addresses a tile of the pyramid.
	#[must_use]
	pub fn is_valid(x: i64, y: i64, zoom: i64) -> bool {
		if x < 0 || y < 0 || !(0..=i64::from(MAX_ZOOM)).contains(&zoom) {
			return false;
		}
		let size = 1i64 << zoom;
		x < size && y < size
	}

	#[must_use]
	pub fn x(&self) -> u32 {
		self.x
	}

	#[must_use]
	pub fn y(&self) -> u32 {
		self.y
	}

	#[must_use]
	pub fn zoom(&self) -> u8 {
		self.zoom
	}

	#[must_use]
	pub fn id(&self) -> u64 {
		self.id
	}

	/// Northern edge in degrees latitude.
	#[must_use]
	pub fn top(&self) -> f64 {
		self.top
	}

	/// Southern edge in degrees latitude.
	#[must_use]
	pub fn bottom(&self) -> f64 {
		self.bottom
	}

	/// Western edge in degrees longitude.
	#[must_use]
	pub fn left(&self) -> f64 {
		self.left
	}

	/// Eastern edge in degrees longitude.
	#[must_use]
	pub fn right(&self) -> f64 {
		self.right
	}

	#[must_use]
	pub fn center_lat(&self) -> f64 {
		(self.top + self.bottom) / 2.0
	}

	#[must_use]
	pub fn center_lon(&self) -> f64 {
		(self.left + self.right) / 2.0
	}

	/// Returns `[west, south, east, north]` in degrees.
	#[must_use]
	pub fn bounds(&self) -> [f64; 4] {
		[self.left, self.bottom, self.right, self.top]
	}

	/// Returns the tile one level up that contains this one.
	///
	/// # Errors
	/// Fails with [`TileError::InvalidZoomRequest`] at zoom level 0.
	pub fn parent(&self) -> Result<Tile> {
		if self.zoom == 0 {
			bail!(TileError::InvalidZoomRequest {
				zoom: 0,
				requested: -1
			});
		}
		Ok(Tile::from_valid(self.x / 2, self.y / 2, self.zoom - 1))
	}

	/// Returns the range of tiles at `zoom` that cover this tile's footprint.
	///
	/// # Errors
	/// Fails with [`TileError::InvalidZoomRequest`] if `zoom` is lower than this tile's zoom or above 31.
	pub fn sub_tiles(&self, zoom: u8) -> Result<TileRange> {
		if zoom < self.zoom || zoom > MAX_ZOOM {
			bail!(TileError::InvalidZoomRequest {
				zoom: self.zoom,
				requested: i64::from(zoom),
			});
		}
		let factor = 1u32 << (zoom - self.zoom);
		TileRange::new(
			zoom,
			self.x * factor,
			self.y * factor,
			(self.x + 1) * factor - 1,
			(self.y + 1) * factor - 1,
		)
	}

	/// Picks the child at `zoom + 1` whose quadrant contains the location.
	///
	/// Locations on or north of the center pick the northern (smaller y) children, locations on
	/// or east of it pick the eastern ones.
	///
	/// # Errors
	/// Fails with [`TileError::InvalidZoomRequest`] at zoom level 31.
	pub fn sub_tile_id_for(&self, lat: f64, lon: f64) -> Result<u64> {
		if self.zoom >= MAX_ZOOM {
			bail!(TileError::InvalidZoomRequest {
				zoom: self.zoom,
				requested: i64::from(self.zoom) + 1,
			});
		}
		let x = if lon >= self.center_lon() { 2 * self.x + 1 } else { 2 * self.x };
		let y = if lat >= self.center_lat() { 2 * self.y } else { 2 * self.y + 1 };
		Ok(Tile::from_valid(x, y, self.zoom + 1).id)
	}

	/// Mirrors the tile horizontally across the pyramid.
	#[must_use]
	pub fn invert_x(&self) -> Tile {
		let max = (axis_size(self.zoom) - 1) as u32;
		Tile::from_valid(max - self.x, self.y, self.zoom)
	}

	/// Mirrors the tile vertically across the pyramid, which also converts between XYZ and TMS rows.
	#[must_use]
	pub fn invert_y(&self) -> Tile {
		let max = (axis_size(self.zoom) - 1) as u32;
		Tile::from_valid(self.x, max - self.y, self.zoom)
	}

	/// Finds the tile at `zoom` that contains the location.
	///
	/// Returns `None` for latitudes beyond ±85.0511°, non-finite input or `zoom > 31`.
	#[must_use]
	pub fn create_around_location(lat: f64, lon: f64, zoom: u8) -> Option<Tile> {
		if !lat.is_finite() || !lon.is_finite() || lat.abs() > LOCATION_MAX_LAT || zoom > MAX_ZOOM {
			return None;
		}
		// 180° belongs to the last column, not to a wrapped column 2^zoom
		let lon = if lon == 180.0 { 180.0 - 1e-6 } else { lon };

		let size = axis_size(zoom) as f64;
		let lat_rad = lat.to_radians();
		let x = ((lon + 180.0) / 360.0 * size).floor();
		let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * size).floor();

		let clamp = |v: f64| v.clamp(0.0, size - 1.0) as u32;
		Some(Tile::from_valid(clamp(x), clamp(y), zoom))
	}

	/// Same as [`Tile::create_around_location`], but returns only the id.
	#[must_use]
	pub fn create_around_location_id(lat: f64, lon: f64, zoom: u8) -> Option<u64> {
		Tile::create_around_location(lat, lon, zoom).map(|tile| tile.id)
	}

	/// True if both ids are tiles of the same zoom that share an edge.
	#[must_use]
	pub fn is_direct_neighbour(id1: u64, id2: u64) -> bool {
		if id1 == id2 {
			return false;
		}
		let (Ok(a), Ok(b)) = (Tile::from_id(id1), Tile::from_id(id2)) else {
			return false;
		};
		if a.zoom != b.zoom {
			return false;
		}
		let dx = a.x.abs_diff(b.x);
		let dy = a.y.abs_diff(b.y);
		dx + dy == 1
	}

	/// Converts a location into fractional grid coordinates at this tile's zoom level.
	///
	/// The integer part is the tile column/row, the fractional part the position inside
	/// the tile, with y growing southward. Points inside this tile therefore land in
	/// `[x, x + 1) × [y, y + 1)`. The result feeds [`crate::traversal::line_between`].
	///
	/// # Errors
	/// Fails with [`TileError::CoordinateOutOfRange`] outside the Web Mercator band.
	pub fn sub_coordinates(&self, lat: f64, lon: f64) -> Result<[f64; 2]> {
		let meters = mercator::lat_lon_to_meters(lat, lon)?;
		let [x, y] = mercator::meters_to_pixels(meters, self.zoom, 1);
		Ok([x, axis_size(self.zoom) as f64 - y])
	}
}

impl PartialEq for Tile {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for Tile {}

impl Hash for Tile {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

/// Ordering by id, i.e. by zoom, then y, then x.
impl PartialOrd for Tile {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Tile {
	fn cmp(&self, other: &Self) -> Ordering {
		self.id.cmp(&other.id)
	}
}

impl Debug for Tile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Tile({}, [{}, {}])", self.zoom, self.x, self.y)
	}
}

impl Display for Tile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x-{}y@{}z", self.x, self.y, self.zoom)
	}
}

impl From<Tile> for u64 {
	fn from(tile: Tile) -> Self {
		tile.id
	}
}

impl TryFrom<u64> for Tile {
	type Error = anyhow::Error;

	fn try_from(id: u64) -> Result<Self> {
		Tile::from_id(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;
	use std::collections::HashSet;

	fn tile(x: u32, y: u32, zoom: u8) -> Tile {
		Tile::new(x, y, zoom).unwrap()
	}

	fn error_of<T: Debug>(result: Result<T>) -> TileError {
		result.unwrap_err().downcast::<TileError>().unwrap()
	}

	#[rstest]
	#[case(0, 0, 0, 0)]
	#[case(0, 0, 1, 1)]
	#[case(1, 0, 1, 2)]
	#[case(0, 1, 1, 3)]
	#[case(1, 1, 1, 4)]
	#[case(0, 0, 2, 5)]
	#[case(3, 3, 2, 20)]
	#[case(3, 4, 5, 472)]
	#[case(0, 0, 31, 1_537_228_672_809_129_301)]
	fn id_and_back(#[case] x: u32, #[case] y: u32, #[case] zoom: u8, #[case] id: u64) -> Result<()> {
		let t = Tile::new(x, y, zoom)?;
		assert_eq!(t.id(), id);
		let back = Tile::from_id(id)?;
		assert_eq!((back.x(), back.y(), back.zoom()), (x, y, zoom));
		Ok(())
	}

	#[test]
	fn every_id_of_low_zoom_levels_round_trips() -> Result<()> {
		let mut expected = 0;
		for zoom in 0..=6u8 {
			let size = 1u32 << zoom;
			for y in 0..size {
				for x in 0..size {
					let t = Tile::new(x, y, zoom)?;
					assert_eq!(t.id(), expected);
					assert_eq!(Tile::from_id(expected)?, t);
					expected += 1;
				}
			}
		}
		Ok(())
	}

	#[test]
	fn base_id_grows_by_tile_count() {
		for zoom in 0..MAX_ZOOM {
			assert_eq!(base_id(zoom + 1) - base_id(zoom), 1u64 << (2 * u32::from(zoom)));
		}
	}

	#[test]
	fn last_tile_of_the_pyramid() -> Result<()> {
		let last = Tile::from_id(max_id())?;
		assert_eq!(last, tile((1 << 31) - 1, (1 << 31) - 1, 31));
		assert_eq!(error_of(Tile::from_id(max_id() + 1)), TileError::InvalidTileId(max_id() + 1));
		assert_eq!(error_of(Tile::from_id(u64::MAX)), TileError::InvalidTileId(u64::MAX));
		Ok(())
	}

	#[rstest]
	#[case(1, 0, 0)]
	#[case(0, 2, 1)]
	#[case(8, 0, 3)]
	#[case(0, 0, 32)]
	fn new_rejects_out_of_bounds(#[case] x: u32, #[case] y: u32, #[case] zoom: u8) {
		assert_eq!(
			error_of(Tile::new(x, y, zoom)),
			TileError::TileOutOfBounds {
				x: i64::from(x),
				y: i64::from(y),
				zoom: i64::from(zoom)
			}
		);
	}

	#[rstest]
	#[case(0, 0, 0, true)]
	#[case(1, 1, 1, true)]
	#[case(-1, 0, 1, false)]
	#[case(0, -1, 1, false)]
	#[case(0, 0, -1, false)]
	#[case(2, 0, 1, false)]
	#[case(0, 0, 32, false)]
	#[case(2_147_483_647, 0, 31, true)]
	fn is_valid(#[case] x: i64, #[case] y: i64, #[case] zoom: i64, #[case] expected: bool) {
		assert_eq!(Tile::is_valid(x, y, zoom), expected);
	}

	#[test]
	fn bounds() {
		let t = tile(3, 4, 5);
		let [west, south, east, north] = t.bounds();
		assert_abs_diff_eq!(west, -146.25, epsilon = 1e-12);
		assert_abs_diff_eq!(south, 76.840_816_414_430_98, epsilon = 1e-9);
		assert_abs_diff_eq!(east, -135.0, epsilon = 1e-12);
		assert_abs_diff_eq!(north, 79.171_334_640_819_45, epsilon = 1e-9);
		assert_abs_diff_eq!(t.center_lon(), -140.625, epsilon = 1e-12);
	}

	#[test]
	fn world_tile_bounds() {
		let t = tile(0, 0, 0);
		assert_abs_diff_eq!(t.top(), crate::constants::MAX_LAT, epsilon = 1e-9);
		assert_abs_diff_eq!(t.bottom(), -crate::constants::MAX_LAT, epsilon = 1e-9);
		assert_eq!(t.left(), -180.0);
		assert_eq!(t.right(), 180.0);
		assert_abs_diff_eq!(t.center_lat(), 0.0, epsilon = 1e-9);
	}

	#[rstest]
	#[case(tile(0, 0, 1), tile(0, 0, 0))]
	#[case(tile(1, 1, 1), tile(0, 0, 0))]
	#[case(tile(5, 6, 3), tile(2, 3, 2))]
	#[case(tile(16, 20, 5), tile(8, 10, 4))]
	fn parent(#[case] child: Tile, #[case] expected: Tile) -> Result<()> {
		assert_eq!(child.parent()?, expected);
		Ok(())
	}

	#[test]
	fn parent_of_root_fails() {
		assert_eq!(
			error_of(tile(0, 0, 0).parent()),
			TileError::InvalidZoomRequest { zoom: 0, requested: -1 }
		);
	}

	#[test]
	fn sub_tiles() -> Result<()> {
		let t = tile(1, 2, 2);
		let same = t.sub_tiles(2)?;
		assert_eq!(same.count(), 1);
		assert!(same.contains(&t));

		let range = t.sub_tiles(4)?;
		assert_eq!(
			(range.zoom(), range.x_min(), range.y_min(), range.x_max(), range.y_max()),
			(4, 4, 8, 7, 11)
		);
		assert_eq!(range.count(), 16);
		assert!(range.iter_tiles().all(|child| {
			let mut up = child;
			while up.zoom() > 2 {
				up = up.parent().unwrap();
			}
			up == t
		}));

		assert_eq!(
			error_of(t.sub_tiles(1)),
			TileError::InvalidZoomRequest { zoom: 2, requested: 1 }
		);
		assert!(t.sub_tiles(32).is_err());
		Ok(())
	}

	#[rstest]
	#[case(10.0, 10.0, tile(1, 0, 1))]
	#[case(10.0, -10.0, tile(0, 0, 1))]
	#[case(-10.0, 10.0, tile(1, 1, 1))]
	#[case(-10.0, -10.0, tile(0, 1, 1))]
	#[case(10.0, 0.0, tile(1, 0, 1))]
	fn sub_tile_id_for_world(#[case] lat: f64, #[case] lon: f64, #[case] expected: Tile) -> Result<()> {
		assert_eq!(tile(0, 0, 0).sub_tile_id_for(lat, lon)?, expected.id());
		Ok(())
	}

	#[test]
	fn sub_tile_id_for_is_a_child() -> Result<()> {
		let t = tile(550, 335, 10);
		let child = Tile::from_id(t.sub_tile_id_for(52.52, 13.405)?)?;
		assert_eq!(child.parent()?, t);
		assert!(tile(0, 0, 31).sub_tile_id_for(0.0, 0.0).is_err());
		Ok(())
	}

	#[test]
	fn invert() {
		let t = tile(1, 2, 3);
		assert_eq!(t.invert_x(), tile(6, 2, 3));
		assert_eq!(t.invert_y(), tile(1, 5, 3));
		assert_eq!(t.invert_x().invert_x(), t);
		assert_eq!(tile(0, 0, 0).invert_y(), tile(0, 0, 0));
	}

	#[rstest]
	#[case(52.52, 13.405, 10, Some((550, 335)))]
	#[case(0.0, 0.0, 1, Some((1, 1)))]
	#[case(0.0, 180.0, 1, Some((1, 1)))]
	#[case(0.0, -180.0, 2, Some((0, 2)))]
	#[case(85.05, 0.0, 0, Some((0, 0)))]
	#[case(85.06, 0.0, 3, None)]
	#[case(-90.0, 0.0, 3, None)]
	#[case(0.0, 0.0, 32, None)]
	fn create_around_location(
		#[case] lat: f64,
		#[case] lon: f64,
		#[case] zoom: u8,
		#[case] expected: Option<(u32, u32)>,
	) {
		let found = Tile::create_around_location(lat, lon, zoom);
		assert_eq!(found.map(|t| (t.x(), t.y())), expected);
		assert_eq!(
			Tile::create_around_location_id(lat, lon, zoom),
			found.map(|t| t.id())
		);
	}

	#[test]
	fn created_tile_contains_location() {
		let t = Tile::create_around_location(-33.8688, 151.2093, 12).unwrap();
		assert!(t.left() <= 151.2093 && 151.2093 < t.right());
		assert!(t.bottom() <= -33.8688 && -33.8688 < t.top());
	}

	#[rstest]
	#[case(tile(1, 1, 2), tile(2, 1, 2), true)]
	#[case(tile(1, 1, 2), tile(0, 1, 2), true)]
	#[case(tile(1, 1, 2), tile(1, 2, 2), true)]
	#[case(tile(1, 1, 2), tile(1, 0, 2), true)]
	#[case(tile(1, 1, 2), tile(2, 2, 2), false)]
	#[case(tile(1, 1, 2), tile(0, 0, 2), false)]
	#[case(tile(1, 1, 2), tile(1, 1, 2), false)]
	#[case(tile(1, 1, 2), tile(3, 1, 2), false)]
	#[case(tile(0, 0, 1), tile(1, 0, 2), false)]
	fn is_direct_neighbour(#[case] a: Tile, #[case] b: Tile, #[case] expected: bool) {
		assert_eq!(Tile::is_direct_neighbour(a.id(), b.id()), expected);
		assert_eq!(Tile::is_direct_neighbour(b.id(), a.id()), expected);
	}

	#[test]
	fn invalid_ids_are_never_neighbours() {
		assert!(!Tile::is_direct_neighbour(u64::MAX, u64::MAX - 1));
	}

	#[test]
	fn sub_coordinates() -> Result<()> {
		let t = tile(0, 0, 1);
		let [x, y] = t.sub_coordinates(0.0, 0.0)?;
		assert_abs_diff_eq!(x, 1.0, epsilon = 1e-9);
		assert_abs_diff_eq!(y, 1.0, epsilon = 1e-9);

		let t = tile(550, 335, 10);
		let [x, y] = t.sub_coordinates(t.center_lat(), t.center_lon())?;
		assert_abs_diff_eq!(x, 550.5, epsilon = 1e-9);
		assert!(y > 335.0 && y < 336.0);

		let [x, y] = t.sub_coordinates(t.top(), t.left())?;
		assert_abs_diff_eq!(x, 550.0, epsilon = 1e-9);
		assert_abs_diff_eq!(y, 335.0, epsilon = 1e-9);

		assert!(t.sub_coordinates(89.0, 0.0).is_err());
		Ok(())
	}

	#[test]
	fn display_and_debug() {
		let t = tile(3, 4, 5);
		assert_eq!(format!("{t}"), "3x-4y@5z");
		assert_eq!(format!("{t:?}"), "Tile(5, [3, 4])");
	}

	#[test]
	fn ordering_and_hashing_follow_id() {
		let mut tiles = vec![tile(1, 0, 1), tile(0, 1, 1), tile(0, 0, 0), tile(3, 0, 2)];
		tiles.sort();
		assert_eq!(tiles, vec![tile(0, 0, 0), tile(1, 0, 1), tile(0, 1, 1), tile(3, 0, 2)]);

		let set: HashSet<Tile> = [tile(1, 1, 1), Tile::from_id(4).unwrap()].into_iter().collect();
		assert_eq!(set.len(), 1);
	}

	#[test]
	fn id_conversions() -> Result<()> {
		let t = tile(7, 9, 4);
		let id: u64 = t.into();
		assert_eq!(Tile::try_from(id)?, t);
		assert!(Tile::try_from(u64::MAX).is_err());
		Ok(())
	}
}
