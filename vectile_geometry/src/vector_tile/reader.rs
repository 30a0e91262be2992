//! Turns tile records into geographic features.

use super::{TileTransform, VectorTile, VectorTileLayer};
use crate::{DecoderConfig, geo::GeoFeature};
use anyhow::{Context, Result, bail};
use log::{debug, trace, warn};
use vectile_core::{Tile, TileError};

/// The decoded features of one layer.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedLayer {
	pub name: String,
	pub features: Vec<GeoFeature>,
}

/// All decoded layers of one tile, tagged with the tile id.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedTile {
	pub tile_id: u64,
	pub layers: Vec<DecodedLayer>,
}

impl DecodedTile {
	#[must_use]
	pub fn layer(&self, name: &str) -> Option<&DecodedLayer> {
		self.layers.iter().find(|layer| layer.name == name)
	}
}

/// Decodes [`VectorTile`] records for a known tile position.
#[derive(Clone, Debug, Default)]
pub struct VectorTileReader {
	config: DecoderConfig,
}

impl VectorTileReader {
	#[must_use]
	pub fn new(config: DecoderConfig) -> VectorTileReader {
		VectorTileReader { config }
	}

	#[must_use]
	pub fn config(&self) -> &DecoderConfig {
		&self.config
	}

	/// Decodes every layer of `record`, which holds the data of `tile`.
	///
	/// # Errors
	/// Fails on the first layer or feature that cannot be decoded. The error context names
	/// the layer and the feature index.
	pub fn read(&self, record: &VectorTile, tile: &Tile) -> Result<DecodedTile> {
		let layers = record
			.layers
			.iter()
			.map(|layer| self.read_layer(layer, tile))
			.collect::<Result<Vec<_>>>()
			.with_context(|| format!("Failed to decode tile {tile}"))?;

		debug!("decoded tile {} ({tile}) with {} layer(s)", tile.id(), layers.len());

		Ok(DecodedTile {
			tile_id: tile.id(),
			layers,
		})
	}

	/// Decodes all features of one layer.
	///
	/// # Errors
	/// Fails if the layer metadata is unusable or any feature fails to decode.
	pub fn read_layer(&self, layer: &VectorTileLayer, tile: &Tile) -> Result<DecodedLayer> {
		let transform = self.layer_transform(layer, tile)?;

		let features = layer
			.features
			.iter()
			.enumerate()
			.map(|(index, feature)| {
				trace!("decoding feature {index} of layer '{}'", layer.name);
				feature
					.to_feature(layer, &transform)
					.with_context(|| format!("Failed to decode feature {index} of layer '{}'", layer.name))
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(DecodedLayer {
			name: layer.name.clone(),
			features,
		})
	}

	/// Like [`read_layer`](Self::read_layer), but skips features that fail to decode.
	///
	/// Returns the layer together with the number of skipped features.
	///
	/// # Errors
	/// Fails only if the layer metadata is unusable.
	pub fn read_layer_lenient(&self, layer: &VectorTileLayer, tile: &Tile) -> Result<(DecodedLayer, usize)> {
		let transform = self.layer_transform(layer, tile)?;

		let mut features = Vec::with_capacity(layer.features.len());
		let mut skipped = 0;
		for (index, feature) in layer.features.iter().enumerate() {
			match feature.to_feature(layer, &transform) {
				Ok(decoded) => features.push(decoded),
				Err(error) => {
					warn!("skipping feature {index} of layer '{}' in tile {tile}: {error:#}", layer.name);
					skipped += 1;
				}
			}
		}

		Ok((
			DecodedLayer {
				name: layer.name.clone(),
				features,
			},
			skipped,
		))
	}

	fn layer_transform(&self, layer: &VectorTileLayer, tile: &Tile) -> Result<TileTransform> {
		self.check_version(layer)?;

		let extent = match layer.extent {
			0 => self.config.default_extent,
			extent => extent,
		};
		debug!(
			"layer '{}': extent {extent}, {} feature(s)",
			layer.name,
			layer.features.len()
		);

		TileTransform::new(tile, extent).with_context(|| format!("Invalid layer '{}'", layer.name))
	}

	fn check_version(&self, layer: &VectorTileLayer) -> Result<()> {
		match layer.version {
			2 => {}
			version if self.config.strict_version => bail!(TileError::InvalidLayer {
				reason: format!("layer '{}' has version {version}, expected 2", layer.name),
			}),
			1 => {}
			version => warn!("layer '{}' has unknown version {version}, decoding anyway", layer.name),
		}
		Ok(())
	}
}
