use std::fmt::{self, Display};

/// A single attribute value of a feature.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Float(f32),
	Int(i64),
	Null,
	String(String),
	UInt(u64),
}

impl GeoValue {
	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, GeoValue::Null)
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			GeoValue::String(s) => Some(s),
			_ => None,
		}
	}

	/// Numeric view of the value. Strings, booleans and null have none.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			GeoValue::Double(v) => Some(*v),
			GeoValue::Float(v) => Some(f64::from(*v)),
			GeoValue::Int(v) => Some(*v as f64),
			GeoValue::UInt(v) => Some(*v as f64),
			GeoValue::Bool(_) | GeoValue::Null | GeoValue::String(_) => None,
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl From<f32> for GeoValue {
	fn from(value: f32) -> Self {
		GeoValue::Float(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Float(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => f.write_str("null"),
			GeoValue::String(v) => f.write_str(v),
			GeoValue::UInt(v) => write!(f, "{v}"),
		}
	}
}
