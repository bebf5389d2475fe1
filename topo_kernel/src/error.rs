use crate::core::math::Vector2;
use thiserror::Error;

/// Invariant violations detected while building an overlay, a voronoi graph or simplifying.
///
/// These all indicate malformed input (e.g. self intersecting polygons that were not noded) or a
/// broken precondition, the whole call is aborted and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    #[error("found two shells in minimal edge ring list near ({}, {})", .at.x, .at.y)]
    MultipleShells { at: Vector2<f64> },
    #[error("unable to assign hole to a shell at ({}, {})", .at.x, .at.y)]
    UnassignedHole { at: Vector2<f64> },
    #[error("side location conflict at ({}, {})", .at.x, .at.y)]
    SideLocationConflict { at: Vector2<f64> },
    #[error("no outgoing directed edge found at ({}, {})", .at.x, .at.y)]
    NoOutgoingEdge { at: Vector2<f64> },
    #[error("directed edge visited twice during ring building at ({}, {})", .at.x, .at.y)]
    RingEdgeVisitedTwice { at: Vector2<f64> },
    #[error("found unlinked directed edge while building ring starting at ({}, {})", .at.x, .at.y)]
    NullRingEdge { at: Vector2<f64> },
    #[error("unable to link last incoming directed edge at ({}, {})", .at.x, .at.y)]
    UnlinkedIncomingEdge { at: Vector2<f64> },
    #[error("found non-noded intersection at ({}, {})", .at.x, .at.y)]
    InvalidNoding { at: Vector2<f64> },
    #[error("voronoi edge already has both vertexes assigned")]
    VertexAlreadyAssigned,
    #[error("circumcircle requires three distinct points")]
    CoincidentCircumcirclePoints,
    #[error("parabolic cut requires two distinct foci at ({}, {})", .at.x, .at.y)]
    CoincidentParabolaFoci { at: Vector2<f64> },
}

impl TopologyError {
    /// Location of the violation if one is known.
    pub fn coordinate(&self) -> Option<Vector2<f64>> {
        use TopologyError::*;
        match *self {
            MultipleShells { at }
            | UnassignedHole { at }
            | SideLocationConflict { at }
            | NoOutgoingEdge { at }
            | RingEdgeVisitedTwice { at }
            | NullRingEdge { at }
            | UnlinkedIncomingEdge { at }
            | InvalidNoding { at }
            | CoincidentParabolaFoci { at } => Some(at),
            VertexAlreadyAssigned | CoincidentCircumcirclePoints => None,
        }
    }
}

/// Converts a generic coordinate into the `f64` coordinate carried by [TopologyError].
#[inline]
pub(crate) fn err_coord<T>(p: Vector2<T>) -> Vector2<f64>
where
    T: crate::core::traits::Real,
{
    Vector2::new(p.x.as_f64(), p.y.as_f64())
}

/// Convenience alias used by all fallible entry points.
pub type TopologyResult<T> = Result<T, TopologyError>;
