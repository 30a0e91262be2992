use std::fmt::{self, Debug};

/// A 2D position. In decoded features `x` is the longitude and `y` the latitude, in degrees.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}
}

impl<T: Into<f64>> From<[T; 2]> for Coordinates {
	fn from([x, y]: [T; 2]) -> Self {
		Coordinates([x.into(), y.into()])
	}
}

impl<'a, T: Copy + Into<f64>> From<&'a [T; 2]> for Coordinates {
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<geo::Coord<f64>> for Coordinates {
	fn from(value: geo::Coord<f64>) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl From<Coordinates> for geo::Coord<f64> {
	fn from(value: Coordinates) -> Self {
		geo::Coord {
			x: value.0[0],
			y: value.0[1],
		}
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}
