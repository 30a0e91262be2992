//! Inclusive rectangular ranges of tiles on one zoom level.

use crate::{Tile, constants::MAX_ZOOM};
use anyhow::{Result, ensure};
use itertools::Itertools;
use std::fmt::{self, Debug};

/// All tiles `x_min..=x_max` × `y_min..=y_max` at `zoom`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRange {
	zoom: u8,
	x_min: u32,
	y_min: u32,
	x_max: u32,
	y_max: u32,
}

impl TileRange {
	pub fn new(zoom: u8, x_min: u32, y_min: u32, x_max: u32, y_max: u32) -> Result<TileRange> {
		ensure!(zoom <= MAX_ZOOM, "zoom ({zoom}) must be <= {MAX_ZOOM}");

		let max = ((1u64 << zoom) - 1) as u32;

		ensure!(x_max <= max, "x_max ({x_max}) must be <= max ({max})");
		ensure!(y_max <= max, "y_max ({y_max}) must be <= max ({max})");
		ensure!(x_min <= x_max, "x_min ({x_min}) must be <= x_max ({x_max})");
		ensure!(y_min <= y_max, "y_min ({y_min}) must be <= y_max ({y_max})");

		Ok(TileRange {
			zoom,
			x_min,
			y_min,
			x_max,
			y_max,
		})
	}

	#[must_use]
	pub fn zoom(&self) -> u8 {
		self.zoom
	}

	#[must_use]
	pub fn x_min(&self) -> u32 {
		self.x_min
	}

	#[must_use]
	pub fn y_min(&self) -> u32 {
		self.y_min
	}

	#[must_use]
	pub fn x_max(&self) -> u32 {
		self.x_max
	}

	#[must_use]
	pub fn y_max(&self) -> u32 {
		self.y_max
	}

	#[must_use]
	pub fn width(&self) -> u64 {
		u64::from(self.x_max - self.x_min) + 1
	}

	#[must_use]
	pub fn height(&self) -> u64 {
		u64::from(self.y_max - self.y_min) + 1
	}

	/// Number of tiles in the range.
	#[must_use]
	pub fn count(&self) -> u64 {
		self.width() * self.height()
	}

	#[must_use]
	pub fn contains(&self, tile: &Tile) -> bool {
		tile.zoom() == self.zoom
			&& (self.x_min..=self.x_max).contains(&tile.x())
			&& (self.y_min..=self.y_max).contains(&tile.y())
	}

	/// Iterates over all tiles in row-major order, which is also ascending id order.
	pub fn iter_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
		(self.y_min..=self.y_max)
			.cartesian_product(self.x_min..=self.x_max)
			.map(|(y, x)| Tile::from_valid(x, y, self.zoom))
	}
}

impl Debug for TileRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"TileRange({}, [{}, {}, {}, {}])",
			self.zoom, self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}
