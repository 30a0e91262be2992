use super::{GeometryTrait, PolygonGeometry, impl_composite, polygon::polygons_bounds};
use anyhow::Result;

#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn area(&self) -> f64 {
		self.0.iter().map(PolygonGeometry::area).sum()
	}

	fn verify(&self) -> Result<()> {
		self.0.iter().try_for_each(PolygonGeometry::verify)
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		polygons_bounds(&self.0)
	}
}

impl_composite!(MultiPolygonGeometry, PolygonGeometry);
