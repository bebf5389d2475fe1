//! Geometry value types consumed and produced by the kernel: coordinates, envelopes, segments,
//! line strings, polygons and the mixed [Geometry] collection, plus ring algorithms and point
//! location.
mod algorithms;
mod envelope;
mod geom;
mod line_segment;
mod location;

pub use algorithms::*;
pub use envelope::Envelope;
pub use geom::{Geometry, LineString, Polygon};
pub use line_segment::LineSegment;
pub use location::{Location, PointLocator};

/// Coordinates are plain 2D vectors.
pub type Coordinate<T = f64> = crate::core::math::Vector2<T>;
