//! Decoding of Mapbox Vector Tile geometries and attributes into WGS84 features.
//!
//! ```
//! use vectile_core::Tile;
//! use vectile_geometry::vector_tile::{GeomType, VectorTile, VectorTileFeature, VectorTileLayer, VectorTileReader};
//!
//! let mut layer = VectorTileLayer::new_standard("pois");
//! layer.features.push(VectorTileFeature::new(Some(1), GeomType::Point, vec![9, 4096, 4096], vec![]));
//!
//! let tile = Tile::new(0, 0, 0).unwrap();
//! let decoded = VectorTileReader::default().read(&VectorTile::new(vec![layer]), &tile).unwrap();
//! assert_eq!(decoded.layers[0].features.len(), 1);
//! ```

pub mod config;
pub mod geo;
pub mod vector_tile;

pub use config::DecoderConfig;
