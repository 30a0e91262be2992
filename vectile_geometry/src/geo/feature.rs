use super::{GeoProperties, Geometry};

/// A geometry with an optional id and its attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<u64>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_id(&mut self, id: u64) {
		self.id = Some(id);
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}
}
