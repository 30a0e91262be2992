//! A single layer of a vector tile.
//!
//! Features refer to attributes through pairs of indices into the layer's shared `keys` and
//! `values` tables, see [`VectorTileLayer::decode_tags`].

use super::{VectorTileFeature, VectorTileValue};
use crate::geo::GeoProperties;
use anyhow::{Result, bail};
use itertools::Itertools;
use vectile_core::{TileError, constants::DEFAULT_EXTENT};

/// A named layer with its features and attribute tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTileLayer {
	pub name: String,
	/// Format version, 1 or 2 for tiles in the wild.
	pub version: u32,
	/// Pixels per tile side. 0 means the field was not set.
	pub extent: u32,
	pub features: Vec<VectorTileFeature>,
	pub keys: Vec<String>,
	pub values: Vec<VectorTileValue>,
}

impl VectorTileLayer {
	#[must_use]
	pub fn new(name: String, extent: u32, version: u32) -> VectorTileLayer {
		VectorTileLayer {
			name,
			version,
			extent,
			..VectorTileLayer::default()
		}
	}

	/// Empty layer with `extent = 4096` and `version = 2`.
	#[must_use]
	pub fn new_standard(name: &str) -> VectorTileLayer {
		VectorTileLayer::new(name.to_string(), DEFAULT_EXTENT, 2)
	}

	/// Resolves a feature's tag list into properties.
	///
	/// If a key appears more than once, the last pair wins.
	///
	/// # Errors
	/// Fails with [`TileError::InvalidAttributeTags`] if `tags` has odd length or an index
	/// points past the end of its table.
	pub fn decode_tags(&self, tags: &[u32]) -> Result<GeoProperties> {
		if !tags.len().is_multiple_of(2) {
			bail!(TileError::InvalidAttributeTags {
				reason: format!("tag list has odd length {}", tags.len()),
			});
		}

		let mut properties = GeoProperties::new();
		for (key_index, value_index) in tags.iter().copied().tuples() {
			let Some(key) = self.keys.get(key_index as usize) else {
				bail!(TileError::InvalidAttributeTags {
					reason: format!("key index {key_index} is out of range ({} keys)", self.keys.len()),
				});
			};
			let Some(value) = self.values.get(value_index as usize) else {
				bail!(TileError::InvalidAttributeTags {
					reason: format!("value index {value_index} is out of range ({} values)", self.values.len()),
				});
			};
			properties.insert(key.clone(), value.to_geo_value());
		}
		Ok(properties)
	}

	pub fn find_feature(&self, id: u64) -> Option<&VectorTileFeature> {
		self.features.iter().find(|feature| feature.id == Some(id))
	}
}
