//! Decoder settings.

use vectile_core::constants::DEFAULT_EXTENT;

/// Controls how lenient the tile reader is with layer metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
	/// Extent used for layers that declare an extent of 0, i.e. leave the field unset.
	pub default_extent: u32,
	/// Only accept layers of format version 2.
	pub strict_version: bool,
}

impl Default for DecoderConfig {
	fn default() -> Self {
		DecoderConfig {
			default_extent: DEFAULT_EXTENT,
			strict_version: false,
		}
	}
}

impl DecoderConfig {
	#[must_use]
	pub fn strict() -> Self {
		DecoderConfig {
			strict_version: true,
			..DecoderConfig::default()
		}
	}
}
