//! Planar graph shared by the overlay: labels recording the topological relationship of graph
//! components to both inputs, depths used to resolve collapsed areas, edges with their
//! intersection lists, directed edges and the arena holding them.
mod depth;
mod directed_edge;
mod edge;
mod edge_list;
mod label;
mod node;
mod planar_graph;

pub use depth::Depth;
pub use directed_edge::{quadrant, sym, DirectedEdge};
pub use edge::{Edge, EdgeIntersection, EdgeIntersectionList};
pub use edge_list::EdgeList;
pub use label::{Label, Position, TopologyLocation};
pub use node::{CoordKey, Node};
pub use planar_graph::PlanarGraph;

pub use crate::geometry::Location;
