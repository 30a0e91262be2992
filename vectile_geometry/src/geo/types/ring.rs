use super::{Coordinates, GeometryTrait, impl_composite, linestring::coordinate_bounds};
use anyhow::{Result, ensure};

/// A closed loop of coordinates, first and last point being identical.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// True if the ring winds counter-clockwise in a y-up coordinate system.
	#[must_use]
	pub fn is_ccw(&self) -> bool {
		self.area() > 0.0
	}
}

impl GeometryTrait for RingGeometry {
	/// Twice the signed shoelace area: positive for counter-clockwise rings, negative for clockwise ones.
	fn area(&self) -> f64 {
		let Some(mut previous) = self.0.last() else {
			return 0.0;
		};
		let mut sum = 0.0;
		for point in &self.0 {
			sum += (previous.x() - point.x()) * (point.y() + previous.y());
			previous = point;
		}
		sum
	}

	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points");
		ensure!(self.0.first() == self.0.last(), "Ring must be closed");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		coordinate_bounds(&self.0)
	}
}

impl_composite!(RingGeometry, Coordinates);

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> RingGeometry {
		RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]])
	}

	#[test]
	fn area_sign_follows_winding() {
		assert_eq!(square().area(), 200.0);
		assert!(square().is_ccw());

		let cw = RingGeometry::from(&[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]);
		assert_eq!(cw.area(), -200.0);
		assert!(!cw.is_ccw());

		let flat = RingGeometry::from(&[[0, 0], [5, 0], [10, 0], [0, 0]]);
		assert_eq!(flat.area(), 0.0);
		assert!(!flat.is_ccw());
	}

	#[test]
	fn verify() {
		assert!(square().verify().is_ok());
		assert!(RingGeometry::from(&[[0, 0], [1, 1], [0, 0]]).verify().is_err());
		assert!(RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 1]]).verify().is_err());
	}

	#[test]
	fn bounds() {
		assert_eq!(square().compute_bounds(), Some([0.0, 0.0, 10.0, 10.0]));
		assert_eq!(RingGeometry(Vec::new()).compute_bounds(), None);
	}
}
