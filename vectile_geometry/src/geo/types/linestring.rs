use super::{Coordinates, GeometryTrait, MultiLineStringGeometry, SingleGeometryTrait, impl_composite};
use anyhow::{Result, ensure};

#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "LineString must have at least 2 points");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		coordinate_bounds(&self.0)
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl_composite!(LineStringGeometry, Coordinates);

pub(crate) fn coordinate_bounds(coordinates: &[Coordinates]) -> Option<[f64; 4]> {
	let first = coordinates.first()?;
	Some(coordinates.iter().fold([first.x(), first.y(), first.x(), first.y()], |b, c| {
		[b[0].min(c.x()), b[1].min(c.y()), b[2].max(c.x()), b[3].max(c.y())]
	}))
}
