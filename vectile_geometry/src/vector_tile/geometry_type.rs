use std::fmt::{self, Display};

/// Geometry type tag of a vector tile feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeomType {
	/// `0` (unset) or any number the format does not define.
	Unknown(u32),
	Point,
	LineString,
	Polygon,
}

impl GeomType {
	#[must_use]
	pub fn as_u32(&self) -> u32 {
		match self {
			GeomType::Unknown(value) => *value,
			GeomType::Point => 1,
			GeomType::LineString => 2,
			GeomType::Polygon => 3,
		}
	}
}

impl Default for GeomType {
	fn default() -> Self {
		GeomType::Unknown(0)
	}
}

impl From<u32> for GeomType {
	fn from(value: u32) -> Self {
		match value {
			1 => GeomType::Point,
			2 => GeomType::LineString,
			3 => GeomType::Polygon,
			other => GeomType::Unknown(other),
		}
	}
}

impl Display for GeomType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GeomType::Unknown(value) => write!(f, "Unknown({value})"),
			GeomType::Point => f.write_str("Point"),
			GeomType::LineString => f.write_str("LineString"),
			GeomType::Polygon => f.write_str("Polygon"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, GeomType::Unknown(0))]
	#[case(1, GeomType::Point)]
	#[case(2, GeomType::LineString)]
	#[case(3, GeomType::Polygon)]
	#[case(99, GeomType::Unknown(99))]
	fn from_and_back(#[case] value: u32, #[case] expected: GeomType) {
		assert_eq!(GeomType::from(value), expected);
		assert_eq!(expected.as_u32(), value);
	}

	#[test]
	fn default_is_unset() {
		assert_eq!(GeomType::default(), GeomType::Unknown(0));
		assert_eq!(GeomType::default().to_string(), "Unknown(0)");
	}
}
