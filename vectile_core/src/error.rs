//! Typed failures raised while decoding tiles or doing pyramid math.
//!
//! Every fallible function in this workspace returns [`anyhow::Result`]. The variants below
//! are raised with `bail!(TileError::...)` so callers can still recover the concrete kind,
//! even after context has been attached:
//!
//! ```
//! use vectile_core::{Tile, TileError};
//!
//! let err = Tile::new(4, 0, 1).unwrap_err();
//! assert!(matches!(
//! 	err.downcast_ref::<TileError>(),
//! 	Some(TileError::TileOutOfBounds { x: 4, y: 0, zoom: 1 })
//! ));
//! ```

use std::fmt::{self, Display};

/// The kinds of failure the decoder and the tile math can report.
///
/// All of them are deterministic for a given input. Retrying does not help.
#[derive(Clone, Debug, PartialEq)]
pub enum TileError {
	/// The geometry command stream violates the MVT command grammar.
	MalformedCommandStream { position: usize, reason: String },
	/// A clockwise ring appeared before any counter-clockwise shell.
	InvalidPolygonRingOrder { ring: usize },
	/// The feature declares a geometry type other than point, line or polygon.
	UnsupportedGeometryType(u32),
	/// The location lies outside the Web Mercator band or is not finite.
	CoordinateOutOfRange { lat: f64, lon: f64 },
	/// A zoom change was requested that the pyramid cannot satisfy.
	InvalidZoomRequest { zoom: u8, requested: i64 },
	/// The x/y/zoom triple does not address a tile.
	TileOutOfBounds { x: i64, y: i64, zoom: i64 },
	/// The id lies beyond the last tile of zoom level 31.
	InvalidTileId(u64),
	/// A feature's tag list does not resolve against its layer's key/value tables.
	InvalidAttributeTags { reason: String },
	/// Layer metadata cannot be used for decoding.
	InvalidLayer { reason: String },
}

impl Display for TileError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use TileError::*;
		match self {
			MalformedCommandStream { position, reason } => {
				write!(f, "malformed command stream at position {position}: {reason}")
			}
			InvalidPolygonRingOrder { ring } => {
				write!(f, "ring {ring} is a hole, but no outer ring precedes it")
			}
			UnsupportedGeometryType(t) => write!(f, "unsupported geometry type {t}"),
			CoordinateOutOfRange { lat, lon } => {
				write!(f, "coordinate ({lat}, {lon}) is outside the Web Mercator range")
			}
			InvalidZoomRequest { zoom, requested } => {
				write!(f, "cannot change from zoom {zoom} to zoom {requested}")
			}
			TileOutOfBounds { x, y, zoom } => write!(f, "tile {x}x-{y}y@{zoom}z is out of bounds"),
			InvalidTileId(id) => write!(f, "tile id {id} is beyond zoom level 31"),
			InvalidAttributeTags { reason } => write!(f, "invalid attribute tags: {reason}"),
			InvalidLayer { reason } => write!(f, "invalid layer: {reason}"),
		}
	}
}

impl std::error::Error for TileError {}
