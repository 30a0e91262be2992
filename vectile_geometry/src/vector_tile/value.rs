use crate::geo::GeoValue;

/// A typed entry of a layer's value table. Exactly one field is expected to be set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTileValue {
	pub string_value: Option<String>,
	pub float_value: Option<f32>,
	pub double_value: Option<f64>,
	pub int_value: Option<i64>,
	pub uint_value: Option<u64>,
	pub sint_value: Option<i64>,
	pub bool_value: Option<bool>,
}

impl VectorTileValue {
	#[must_use]
	pub fn new_sint(value: i64) -> Self {
		VectorTileValue {
			sint_value: Some(value),
			..Default::default()
		}
	}

	/// Resolves the record into an attribute value.
	///
	/// If several fields are set, the first of bool, double, float, int, sint, string, uint wins.
	/// A record without any field becomes [`GeoValue::Null`].
	#[must_use]
	pub fn to_geo_value(&self) -> GeoValue {
		if let Some(v) = self.bool_value {
			GeoValue::Bool(v)
		} else if let Some(v) = self.double_value {
			GeoValue::Double(v)
		} else if let Some(v) = self.float_value {
			GeoValue::Float(v)
		} else if let Some(v) = self.int_value.or(self.sint_value) {
			GeoValue::Int(v)
		} else if let Some(v) = &self.string_value {
			GeoValue::String(v.clone())
		} else if let Some(v) = self.uint_value {
			GeoValue::UInt(v)
		} else {
			GeoValue::Null
		}
	}
}

impl From<&str> for VectorTileValue {
	fn from(value: &str) -> Self {
		VectorTileValue {
			string_value: Some(value.to_string()),
			..Default::default()
		}
	}
}

impl From<f32> for VectorTileValue {
	fn from(value: f32) -> Self {
		VectorTileValue {
			float_value: Some(value),
			..Default::default()
		}
	}
}

impl From<f64> for VectorTileValue {
	fn from(value: f64) -> Self {
		VectorTileValue {
			double_value: Some(value),
			..Default::default()
		}
	}
}

impl From<i64> for VectorTileValue {
	fn from(value: i64) -> Self {
		VectorTileValue {
			int_value: Some(value),
			..Default::default()
		}
	}
}

impl From<u64> for VectorTileValue {
	fn from(value: u64) -> Self {
		VectorTileValue {
			uint_value: Some(value),
			..Default::default()
		}
	}
}

impl From<bool> for VectorTileValue {
	fn from(value: bool) -> Self {
		VectorTileValue {
			bool_value: Some(value),
			..Default::default()
		}
	}
}
