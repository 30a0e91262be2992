//! Conversions into the `geo` crate, so decoded features can be fed to its algorithms.

use super::*;

fn line_string(coordinates: Vec<Coordinates>) -> geo::LineString<f64> {
	geo::LineString::new(coordinates.into_iter().map(geo::Coord::from).collect())
}

impl From<PolygonGeometry> for geo::Polygon<f64> {
	fn from(polygon: PolygonGeometry) -> Self {
		let mut rings = polygon.0.into_iter().map(|ring| line_string(ring.0));
		let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(Vec::new()));
		geo::Polygon::new(exterior, rings.collect())
	}
}

impl From<Geometry> for geo::Geometry<f64> {
	fn from(geometry: Geometry) -> Self {
		match geometry {
			Geometry::Point(g) => geo::Point::from(geo::Coord::from(g.0)).into(),
			Geometry::LineString(g) => line_string(g.0).into(),
			Geometry::Polygon(g) => geo::Polygon::from(g).into(),
			Geometry::MultiPoint(g) => {
				geo::MultiPoint::new(g.0.into_iter().map(|p| geo::Point::from(geo::Coord::from(p.0))).collect()).into()
			}
			Geometry::MultiLineString(g) => {
				geo::MultiLineString::new(g.0.into_iter().map(|l| line_string(l.0)).collect()).into()
			}
			Geometry::MultiPolygon(g) => {
				geo::MultiPolygon::new(g.0.into_iter().map(geo::Polygon::from).collect()).into()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use geo::{Area, BoundingRect};

	#[test]
	fn polygon_with_hole() {
		let geometry = Geometry::new_polygon(vec![
			vec![[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
			vec![[2, 2], [2, 4], [4, 4], [4, 2], [2, 2]],
		]);
		let converted = geo::Geometry::from(geometry);
		assert_abs_diff_eq!(converted.unsigned_area(), 96.0, epsilon = 1e-9);
	}

	#[test]
	fn multi_point_bounds() {
		let geometry = Geometry::new_multi_point(vec![[1, 5], [-2, 3]]);
		let rect = geo::Geometry::from(geometry).bounding_rect().unwrap();
		assert_eq!((rect.min().x, rect.min().y, rect.max().x, rect.max().y), (-2.0, 3.0, 1.0, 5.0));
	}

	#[test]
	fn point_and_line() {
		assert_eq!(
			geo::Geometry::from(Geometry::new_point([1.5, 2.5])),
			geo::Geometry::Point(geo::Point::new(1.5, 2.5))
		);
		let line = geo::Geometry::from(Geometry::new_line_string(vec![[0, 0], [3, 4]]));
		assert!(matches!(line, geo::Geometry::LineString(ref l) if l.0.len() == 2));
	}
}
