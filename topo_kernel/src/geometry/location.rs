use super::{locate_in_ring, Geometry, LineString, Polygon};
use crate::core::{
    math::{orientation_index, point_in_seg_bounds, Vector2},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Topological location of a point relative to a geometry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
    /// Location not (yet) known.
    #[default]
    None,
}

impl Location {
    /// Boundary counts as interior for the boolean result predicates.
    #[inline]
    pub fn boundary_as_interior(self) -> Self {
        if self == Location::Boundary {
            Location::Interior
        } else {
            self
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Location::None
    }
}

/// Computes the full [Location] of points relative to a [Geometry].
///
/// Line end points are boundary points by the mod-2 rule: an end point shared by an even number
/// of line ends is interior. Polygon rings are boundary, points inside a shell but outside all
/// holes are interior.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointLocator;

impl PointLocator {
    pub fn new() -> Self {
        PointLocator
    }

    /// Location of `point` relative to `geometry`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use topo_kernel::geometry::*;
    /// # use topo_kernel::core::math::Vector2;
    /// let square = Polygon::new(
    ///     vec![
    ///         Vector2::new(0.0, 0.0),
    ///         Vector2::new(0.0, 1.0),
    ///         Vector2::new(1.0, 1.0),
    ///         Vector2::new(1.0, 0.0),
    ///         Vector2::new(0.0, 0.0),
    ///     ],
    ///     Vec::new(),
    /// );
    /// let geom = Geometry::from_polygon(square);
    /// let locator = PointLocator::new();
    /// assert_eq!(locator.locate(Vector2::new(0.5, 0.5), &geom), Location::Interior);
    /// assert_eq!(locator.locate(Vector2::new(1.0, 0.5), &geom), Location::Boundary);
    /// assert_eq!(locator.locate(Vector2::new(2.0, 0.5), &geom), Location::Exterior);
    /// ```
    pub fn locate<T>(&self, point: Vector2<T>, geometry: &Geometry<T>) -> Location
    where
        T: Real,
    {
        if geometry.is_empty() {
            return Location::Exterior;
        }

        let mut is_in = false;
        let mut boundary_count = 0usize;
        let mut update = |loc: Location| match loc {
            Location::Interior => is_in = true,
            Location::Boundary => boundary_count += 1,
            _ => {}
        };

        for pt in geometry.points.iter() {
            if *pt == point {
                update(Location::Interior);
            }
        }

        for line in geometry.lines.iter() {
            update(self.locate_on_line(point, line));
        }

        for poly in geometry.polygons.iter() {
            update(self.locate_in_polygon(point, poly));
        }

        if boundary_count % 2 == 1 {
            Location::Boundary
        } else if boundary_count > 0 || is_in {
            Location::Interior
        } else {
            Location::Exterior
        }
    }

    /// Location of `point` relative to a single line string.
    pub fn locate_on_line<T>(&self, point: Vector2<T>, line: &LineString<T>) -> Location
    where
        T: Real,
    {
        let coords = &line.coords;
        if coords.is_empty() || !line.envelope().intersects_point(point) {
            return Location::Exterior;
        }

        if !line.is_closed() && (point == coords[0] || point == coords[coords.len() - 1]) {
            return Location::Boundary;
        }

        if coords.len() == 1 {
            return if coords[0] == point {
                Location::Interior
            } else {
                Location::Exterior
            };
        }

        let on_line = coords.windows(2).any(|w| {
            point_in_seg_bounds(w[0], w[1], point) && orientation_index(w[0], w[1], point) == 0
        });

        if on_line {
            Location::Interior
        } else {
            Location::Exterior
        }
    }

    /// Location of `point` relative to a single polygon.
    pub fn locate_in_polygon<T>(&self, point: Vector2<T>, polygon: &Polygon<T>) -> Location
    where
        T: Real,
    {
        if polygon.shell.is_empty() {
            return Location::Exterior;
        }

        match locate_in_ring(point, &polygon.shell) {
            Location::Exterior => return Location::Exterior,
            Location::Boundary => return Location::Boundary,
            _ => {}
        }

        for hole in polygon.holes.iter() {
            match locate_in_ring(point, hole) {
                Location::Interior => return Location::Exterior,
                Location::Boundary => return Location::Boundary,
                _ => {}
            }
        }

        Location::Interior
    }

    /// Point in area test, returns [Location::Interior] if `point` is inside or on the boundary
    /// of any polygon of `geometry`, otherwise [Location::Exterior]. Non areal components are
    /// ignored.
    pub fn locate_in_area<T>(&self, point: Vector2<T>, geometry: &Geometry<T>) -> Location
    where
        T: Real,
    {
        let inside = geometry
            .polygons
            .iter()
            .any(|poly| self.locate_in_polygon(point, poly) != Location::Exterior);

        if inside {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}
