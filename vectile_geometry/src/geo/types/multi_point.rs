use super::{GeometryTrait, PointGeometry, impl_composite, merge_bounds};
use anyhow::Result;

#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		anyhow::ensure!(!self.0.is_empty(), "MultiPoint must have at least one point");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(PointGeometry::compute_bounds))
	}
}

impl_composite!(MultiPointGeometry, PointGeometry);
