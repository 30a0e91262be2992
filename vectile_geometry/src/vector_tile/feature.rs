use super::{GeomType, TileTransform, VectorTileLayer, decode_geometry};
use crate::geo::GeoFeature;
use anyhow::{Context, Result};

/// One feature as stored in a layer: geometry commands plus tag indices into the layer tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTileFeature {
	pub id: Option<u64>,
	pub geom_type: GeomType,
	/// Raw command integers, see [`decode_geometry`].
	pub geometry: Vec<u32>,
	/// Alternating key and value indices.
	pub tags: Vec<u32>,
}

impl VectorTileFeature {
	#[must_use]
	pub fn new(id: Option<u64>, geom_type: GeomType, geometry: Vec<u32>, tags: Vec<u32>) -> VectorTileFeature {
		VectorTileFeature {
			id,
			geom_type,
			geometry,
			tags,
		}
	}

	/// Decodes geometry, attributes and id into a [`GeoFeature`] in `(lon, lat)`.
	///
	/// # Errors
	/// Fails if the geometry cannot be decoded or the tags do not resolve against `layer`.
	pub fn to_feature(&self, layer: &VectorTileLayer, transform: &TileTransform) -> Result<GeoFeature> {
		let mut feature = GeoFeature::new(
			decode_geometry(self.geom_type, &self.geometry, transform).context("Failed to decode geometry")?,
		);

		if let Some(id) = self.id {
			feature.set_id(id);
		}

		feature.set_properties(layer.decode_tags(&self.tags).context("Failed to decode tags")?);

		Ok(feature)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{geo::*, vector_tile::VectorTileValue};
	use vectile_core::{Tile, TileError};

	fn layer() -> VectorTileLayer {
		VectorTileLayer {
			keys: vec!["name".to_string(), "height".to_string()],
			values: vec![VectorTileValue::from("tower"), VectorTileValue::from(42u64)],
			..VectorTileLayer::new_standard("buildings")
		}
	}

	fn transform() -> TileTransform {
		TileTransform::new(&Tile::new(0, 0, 0).unwrap(), 4096).unwrap()
	}

	#[test]
	fn decodes_id_geometry_and_properties() -> Result<()> {
		let record = VectorTileFeature::new(Some(7), GeomType::Point, vec![9, 4096, 4096], vec![0, 0, 1, 1]);
		let feature = record.to_feature(&layer(), &transform())?;

		assert_eq!(feature.id, Some(7));
		assert_eq!(
			feature.geometry,
			Geometry::Point(PointGeometry(transform().transform_inverse([2048.0, 2048.0])))
		);
		assert_eq!(feature.properties.get("name"), Some(&GeoValue::from("tower")));
		assert_eq!(feature.properties.get("height"), Some(&GeoValue::UInt(42)));
		Ok(())
	}

	#[test]
	fn feature_without_id_or_tags() -> Result<()> {
		let record = VectorTileFeature::new(None, GeomType::Point, vec![9, 0, 0], vec![]);
		let feature = record.to_feature(&layer(), &transform())?;
		assert_eq!(feature.id, None);
		assert!(feature.properties.is_empty());
		Ok(())
	}

	#[test]
	fn geometry_errors_keep_their_type() {
		let record = VectorTileFeature::new(None, GeomType::Unknown(9), vec![9, 0, 0], vec![]);
		let error = record.to_feature(&layer(), &transform()).unwrap_err();
		assert_eq!(
			error.downcast_ref::<TileError>(),
			Some(&TileError::UnsupportedGeometryType(9))
		);
		assert_eq!(error.to_string(), "Failed to decode geometry");
	}

	#[test]
	fn bad_tags_are_reported() {
		let record = VectorTileFeature::new(None, GeomType::Point, vec![9, 0, 0], vec![0, 5]);
		let error = record.to_feature(&layer(), &transform()).unwrap_err();
		assert!(matches!(
			error.downcast_ref::<TileError>(),
			Some(TileError::InvalidAttributeTags { .. })
		));
	}
}
