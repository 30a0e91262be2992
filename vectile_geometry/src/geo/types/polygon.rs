use super::{GeometryTrait, MultiPolygonGeometry, RingGeometry, SingleGeometryTrait, impl_composite, merge_bounds};
use anyhow::{Result, ensure};

/// An outer ring followed by zero or more holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	#[must_use]
	pub fn holes(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl GeometryTrait for PolygonGeometry {
	/// Outer ring area minus the area of the holes.
	fn area(&self) -> f64 {
		let mut rings = self.0.iter();
		let Some(outer) = rings.next() else {
			return 0.0;
		};
		rings.fold(outer.area(), |sum, hole| sum - hole.area().abs())
	}

	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		self.0.iter().try_for_each(RingGeometry::verify)
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.exterior().and_then(RingGeometry::compute_bounds)
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl_composite!(PolygonGeometry, RingGeometry);

/// Bounds over several polygons.
pub(crate) fn polygons_bounds(polygons: &[PolygonGeometry]) -> Option<[f64; 4]> {
	merge_bounds(polygons.iter().map(PolygonGeometry::compute_bounds))
}
