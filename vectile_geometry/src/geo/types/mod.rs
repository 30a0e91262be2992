// Geometry primitives. Single geometries wrap into their multi counterpart through
// `SingleGeometryTrait`, list-like geometries share `CompositeGeometryTrait`.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

use macros::impl_composite;
use traits::merge_bounds;

pub use coordinates::*;
pub use linestring::LineStringGeometry;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::PolygonGeometry;
pub use ring::*;
pub use traits::{CompositeGeometryTrait, GeometryTrait, SingleGeometryTrait};
