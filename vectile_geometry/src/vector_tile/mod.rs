//! Vector tile (MVT) decoding.
//!
//! The protobuf layer hands over plain records ([`VectorTile`], [`VectorTileLayer`],
//! [`VectorTileFeature`], [`VectorTileValue`]). This module turns them into geographic
//! features:
//!
//! - [`transform`]: mapping between WGS84 and a tile's local pixel grid.
//! - [`decode`]: the geometry command stream decoder.
//! - [`reader`]: per-tile and per-layer decoding driven by a [`DecoderConfig`](crate::DecoderConfig).

pub mod decode;
mod feature;
mod geometry_type;
mod layer;
pub mod reader;
mod tile;
pub mod transform;
mod value;

pub use decode::{decode_geometry, zigzag_decode};
pub use feature::VectorTileFeature;
pub use geometry_type::GeomType;
pub use layer::VectorTileLayer;
pub use reader::{DecodedLayer, DecodedTile, VectorTileReader};
pub use tile::VectorTile;
pub use transform::{LocalCursor, TileTransform};
pub use value::VectorTileValue;
