//! Computational geometry kernel: planar graph polygon overlay (boolean operations between
//! geometries), Fortune sweepline Voronoi diagrams and topology preserving line
//! simplification.
//!
//! All algorithms are generic over the scalar type `T: Real` (`f32` or `f64`, `f64` by
//! default). Failures of topological invariants are reported as
//! [TopologyError](error::TopologyError), no partial results are returned.
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod core;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod overlay;
pub mod simplify;
pub mod voronoi;

pub use crate::error::{TopologyError, TopologyResult};
pub use crate::geometry::{Geometry, LineString, Polygon};
pub use crate::overlay::{overlay, OpCode};
pub use static_aabb2d_index::AABB;
