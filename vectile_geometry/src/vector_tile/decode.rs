//! Decoding of MVT geometry command streams.
//!
//! A stream is a flat list of integers. Command integers pack an id in the lowest three bits
//! (MoveTo = 1, LineTo = 2, ClosePath = 7) and a repeat count in the rest. MoveTo and LineTo
//! are followed by `count` pairs of zigzag encoded deltas, which move a cursor that starts at
//! the tile origin. See <https://github.com/mapbox/vector-tile-spec/blob/master/2.1/README.md#43-geometry-encoding>.
//!
//! Every decoded position is passed through [`TileTransform::transform_inverse`], so the
//! resulting geometries are in `(lon, lat)`.

use super::{GeomType, LocalCursor, TileTransform};
use crate::geo::*;
use anyhow::{Result, bail};
use log::trace;
use vectile_core::TileError;

const MOVE_TO: u32 = 1;
const LINE_TO: u32 = 2;
const CLOSE_PATH: u32 = 7;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Command {
	MoveTo(u32),
	LineTo(u32),
	ClosePath,
}

/// Read position in the stream and the current cursor, threaded through every step.
#[derive(Clone, Copy, Debug, Default)]
struct DecodeState {
	index: usize,
	cursor: LocalCursor,
}

impl DecodeState {
	fn advance(self, by: usize) -> Self {
		DecodeState {
			index: self.index + by,
			..self
		}
	}
}

fn malformed(position: usize, reason: impl Into<String>) -> anyhow::Error {
	TileError::MalformedCommandStream {
		position,
		reason: reason.into(),
	}
	.into()
}

/// Undoes the zigzag encoding of a parameter integer.
#[must_use]
pub fn zigzag_decode(raw: u32) -> i64 {
	i64::from(raw >> 1) ^ -i64::from(raw & 1)
}

fn parse_command(stream: &[u32], index: usize) -> Result<Command> {
	let Some(&value) = stream.get(index) else {
		return Err(malformed(index, "expected a command, found the end of the stream"));
	};
	let count = value >> 3;
	match value & 0x7 {
		MOVE_TO => Ok(Command::MoveTo(count)),
		LINE_TO => Ok(Command::LineTo(count)),
		CLOSE_PATH => Ok(Command::ClosePath),
		other => Err(malformed(index, format!("unknown command {other}"))),
	}
}

fn read_command(stream: &[u32], state: DecodeState) -> Result<(DecodeState, Command)> {
	let command = parse_command(stream, state.index)?;
	Ok((state.advance(1), command))
}

fn peek_command(stream: &[u32], state: DecodeState) -> Result<Option<Command>> {
	if state.index >= stream.len() {
		return Ok(None);
	}
	parse_command(stream, state.index).map(Some)
}

fn read_point(stream: &[u32], state: DecodeState) -> Result<DecodeState> {
	let (Some(&dx), Some(&dy)) = (stream.get(state.index), stream.get(state.index + 1)) else {
		return Err(malformed(state.index, "missing parameter pair"));
	};
	Ok(DecodeState {
		index: state.index + 2,
		cursor: state.cursor.offset(zigzag_decode(dx), zigzag_decode(dy)),
	})
}

/// Reads `MoveTo(1)` and an optional `LineTo(n)`. Rings are closed by repeating their first
/// point, consuming the `ClosePath` that should follow.
fn read_sub_path(stream: &[u32], state: DecodeState, closed: bool) -> Result<(DecodeState, Vec<LocalCursor>)> {
	let position = state.index;
	let (state, command) = read_command(stream, state)?;
	match command {
		Command::MoveTo(1) => {}
		Command::ClosePath if !closed => return Err(malformed(position, "ClosePath is not allowed in line geometries")),
		other => return Err(malformed(position, format!("expected MoveTo(1), found {other:?}"))),
	}

	let mut state = read_point(stream, state)?;
	let mut sequence = vec![state.cursor];

	if let Some(Command::LineTo(count)) = peek_command(stream, state)? {
		state = state.advance(1);
		// the count comes from the stream, so never reserve more than the remaining pairs
		sequence.reserve((count as usize).min((stream.len() - state.index) / 2) + 1);
		for _ in 0..count {
			state = read_point(stream, state)?;
			sequence.push(state.cursor);
		}
	}

	if closed {
		if peek_command(stream, state)? == Some(Command::ClosePath) {
			state = state.advance(1);
		} else {
			trace!("ring ending at position {} lacks ClosePath, closing it anyway", state.index);
		}
		sequence.push(sequence[0]);
	}

	Ok((state, sequence))
}

fn decode_points(stream: &[u32]) -> Result<Vec<LocalCursor>> {
	let mut state = DecodeState::default();
	let mut points = Vec::new();

	while state.index < stream.len() {
		let position = state.index;
		let (next, command) = read_command(stream, state)?;
		state = next;
		let Command::MoveTo(count @ 1..) = command else {
			return Err(malformed(
				position,
				format!("point geometries consist of MoveTo commands with a count of at least 1, found {command:?}"),
			));
		};
		for _ in 0..count {
			state = read_point(stream, state)?;
			points.push(state.cursor);
		}
	}

	Ok(points)
}

fn decode_sub_paths(stream: &[u32], closed: bool) -> Result<Vec<Vec<LocalCursor>>> {
	let mut state = DecodeState::default();
	let mut sequences = Vec::new();

	while state.index < stream.len() {
		let (next, sequence) = read_sub_path(stream, state, closed)?;
		state = next;
		sequences.push(sequence);
	}

	Ok(sequences)
}

/// Twice the signed area of a closed ring in tile pixels (y pointing down).
///
/// Exterior rings are positive, holes negative.
fn ring_area(ring: &[LocalCursor]) -> i128 {
	ring
		.windows(2)
		.map(|w| i128::from(w[0].x) * i128::from(w[1].y) - i128::from(w[1].x) * i128::from(w[0].y))
		.sum()
}

fn to_geographic(sequence: &[LocalCursor], transform: &TileTransform) -> Vec<Coordinates> {
	sequence
		.iter()
		.map(|p| transform.transform_inverse([p.x as f64, p.y as f64]))
		.collect()
}

/// Groups rings into polygons: every ring with positive area starts a polygon, every other
/// ring is a hole of the polygon started last.
fn assemble_polygons(rings: Vec<Vec<LocalCursor>>, transform: &TileTransform) -> Result<Vec<PolygonGeometry>> {
	let mut polygons: Vec<PolygonGeometry> = Vec::new();

	for (index, ring) in rings.iter().enumerate() {
		let geographic = RingGeometry(to_geographic(ring, transform));
		if ring_area(ring) > 0 {
			polygons.push(PolygonGeometry(vec![geographic]));
		} else if let Some(polygon) = polygons.last_mut() {
			polygon.push(geographic);
		} else {
			bail!(TileError::InvalidPolygonRingOrder { ring: index });
		}
	}

	trace!("assembled {} polygon(s) from {} ring(s)", polygons.len(), rings.len());
	Ok(polygons)
}

/// Decodes one feature's command stream into a geometry of the declared type.
///
/// One sequence yields a single geometry, several sequences the multi variant.
///
/// # Errors
/// - [`TileError::UnsupportedGeometryType`] for unknown geometry types
/// - [`TileError::MalformedCommandStream`] if the stream is empty or breaks the command grammar
/// - [`TileError::InvalidPolygonRingOrder`] if a polygon starts with a hole
pub fn decode_geometry(geom_type: GeomType, stream: &[u32], transform: &TileTransform) -> Result<Geometry> {
	if let GeomType::Unknown(value) = geom_type {
		bail!(TileError::UnsupportedGeometryType(value));
	}
	if stream.is_empty() {
		return Err(malformed(0, "geometry is empty"));
	}

	let geometry = match geom_type {
		GeomType::Point => {
			let mut points: Vec<PointGeometry> = decode_points(stream)?
				.into_iter()
				.map(|p| PointGeometry(transform.transform_inverse([p.x as f64, p.y as f64])))
				.collect();
			if points.len() == 1 {
				Geometry::Point(points.remove(0))
			} else {
				Geometry::MultiPoint(MultiPointGeometry(points))
			}
		}
		GeomType::LineString => {
			let mut lines: Vec<LineStringGeometry> = decode_sub_paths(stream, false)?
				.iter()
				.map(|line| LineStringGeometry(to_geographic(line, transform)))
				.collect();
			if lines.len() == 1 {
				Geometry::LineString(lines.remove(0))
			} else {
				Geometry::MultiLineString(MultiLineStringGeometry(lines))
			}
		}
		GeomType::Polygon => {
			let mut polygons = assemble_polygons(decode_sub_paths(stream, true)?, transform)?;
			if polygons.len() == 1 {
				Geometry::Polygon(polygons.remove(0))
			} else {
				Geometry::MultiPolygon(MultiPolygonGeometry(polygons))
			}
		}
		GeomType::Unknown(value) => bail!(TileError::UnsupportedGeometryType(value)),
	};

	trace!("decoded {} from {} integers", geometry.type_name(), stream.len());
	Ok(geometry)
}
