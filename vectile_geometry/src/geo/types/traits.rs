use anyhow::Result;
use std::fmt::Debug;

/// Shared behaviour of all geometry primitives.
pub trait GeometryTrait: Debug + Clone {
	/// Signed area. Zero for points and lines.
	fn area(&self) -> f64;

	/// Checks structural validity, e.g. minimum point counts and closed rings.
	fn verify(&self) -> Result<()>;

	/// Returns `[x_min, y_min, x_max, y_max]`, or `None` if there are no coordinates.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}

/// Geometries that can be wrapped into their multi counterpart.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	fn into_multi(self) -> Multi;
}

/// Geometries that are an ordered list of simpler parts.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

/// Combines the bounds of several parts into one bounding box.
pub(crate) fn merge_bounds(parts: impl Iterator<Item = Option<[f64; 4]>>) -> Option<[f64; 4]> {
	parts.flatten().reduce(|a, b| {
		[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
	})
}
