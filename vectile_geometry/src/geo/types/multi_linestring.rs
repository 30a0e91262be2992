use super::{GeometryTrait, LineStringGeometry, impl_composite, merge_bounds};
use anyhow::Result;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		self.0.iter().try_for_each(LineStringGeometry::verify)
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(LineStringGeometry::compute_bounds))
	}
}

impl_composite!(MultiLineStringGeometry, LineStringGeometry);
