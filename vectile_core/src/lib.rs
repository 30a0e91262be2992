//! Tile pyramid math for vector tile decoding.
//!
//! Contains the typed error taxonomy, the Web Mercator projector, tile identity with 64-bit
//! ids, inclusive tile ranges and supercover traversal of the tile grid.

pub mod constants;
mod error;
pub mod mercator;
mod tile;
mod tile_range;
pub mod traversal;

pub use error::TileError;
pub use tile::{Tile, base_id, max_id};
pub use tile_range::TileRange;

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_send_sync<T: Send + Sync>() {}

	#[test]
	fn public_types_are_send_and_sync() {
		assert_send_sync::<Tile>();
		assert_send_sync::<TileRange>();
		assert_send_sync::<TileError>();
	}
}
