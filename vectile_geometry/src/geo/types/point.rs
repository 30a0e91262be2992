use super::{Coordinates, GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use anyhow::Result;
use std::fmt::{self, Debug};

#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
}

impl GeometryTrait for PointGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		Some([self.x(), self.y(), self.x(), self.y()])
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl From<Coordinates> for PointGeometry {
	fn from(value: Coordinates) -> Self {
		PointGeometry(value)
	}
}

impl<T: Into<f64>> From<[T; 2]> for PointGeometry {
	fn from(value: [T; 2]) -> Self {
		PointGeometry(Coordinates::from(value))
	}
}

impl<'a, T: Copy + Into<f64>> From<&'a [T; 2]> for PointGeometry {
	fn from(value: &'a [T; 2]) -> Self {
		PointGeometry(Coordinates::from(value))
	}
}
