use super::*;
use anyhow::Result;
use std::fmt::{self, Debug};

/// Any decoded geometry. Coordinates are `(lon, lat)` in degrees.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	pub fn new_point<T: Into<f64>>(value: [T; 2]) -> Self {
		Self::Point(PointGeometry::from(value))
	}

	pub fn new_line_string<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}

	pub fn new_polygon<T>(value: Vec<T>) -> Self
	where
		RingGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}

	pub fn new_multi_point<T>(value: Vec<T>) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}

	pub fn new_multi_line_string<T>(value: Vec<T>) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}

	pub fn new_multi_polygon<T>(value: Vec<T>) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	/// Wraps single geometries into their multi variant. Multi geometries are returned unchanged.
	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			multi => multi,
		}
	}

	#[must_use]
	pub fn area(&self) -> f64 {
		match self {
			Geometry::Point(g) => g.area(),
			Geometry::LineString(g) => g.area(),
			Geometry::Polygon(g) => g.area(),
			Geometry::MultiPoint(g) => g.area(),
			Geometry::MultiLineString(g) => g.area(),
			Geometry::MultiPolygon(g) => g.area(),
		}
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
		}
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
