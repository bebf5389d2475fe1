use super::{signed_area, Envelope};
use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of coordinates. Closed when the first and last coordinate are equal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString<T = f64> {
    pub coords: Vec<Vector2<T>>,
}

impl<T> LineString<T>
where
    T: Real,
{
    #[inline]
    pub fn new(coords: Vec<Vector2<T>>) -> Self {
        Self { coords }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => self.coords.len() > 1 && first == last,
            _ => false,
        }
    }

    pub fn length(&self) -> T {
        self.coords
            .windows(2)
            .fold(T::zero(), |acc, w| acc + w[0].distance(w[1]))
    }

    #[inline]
    pub fn envelope(&self) -> Envelope<T> {
        Envelope::from_points(self.coords.iter())
    }
}

/// Polygon with one shell ring and zero or more hole rings. Rings are explicitly closed.
///
/// Rings produced by the overlay have clockwise shells and counter clockwise holes, input rings
/// may have any orientation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<T = f64> {
    pub shell: Vec<Vector2<T>>,
    pub holes: Vec<Vec<Vector2<T>>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    #[inline]
    pub fn new(shell: Vec<Vector2<T>>, holes: Vec<Vec<Vector2<T>>>) -> Self {
        Self { shell, holes }
    }

    /// Axis aligned rectangle polygon (clockwise shell).
    pub fn rect(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self::new(
            vec![
                Vector2::new(min_x, min_y),
                Vector2::new(min_x, max_y),
                Vector2::new(max_x, max_y),
                Vector2::new(max_x, min_y),
                Vector2::new(min_x, min_y),
            ],
            Vec::new(),
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shell.is_empty()
    }

    /// Unsigned area of the shell minus the unsigned area of each hole.
    pub fn area(&self) -> T {
        let mut area = signed_area(&self.shell).abs();
        for hole in self.holes.iter() {
            area = area - signed_area(hole).abs();
        }
        area
    }

    /// Total length of all rings.
    pub fn perimeter(&self) -> T {
        let ring_len = |ring: &[Vector2<T>]| {
            ring.windows(2)
                .fold(T::zero(), |acc, w| acc + w[0].distance(w[1]))
        };
        self.holes
            .iter()
            .fold(ring_len(&self.shell), |acc, h| acc + ring_len(h))
    }

    #[inline]
    pub fn envelope(&self) -> Envelope<T> {
        Envelope::from_points(self.shell.iter())
    }

    /// Iterate the shell followed by the holes.
    pub fn rings(&self) -> impl Iterator<Item = &Vec<Vector2<T>>> {
        std::iter::once(&self.shell).chain(self.holes.iter())
    }
}

/// Heterogeneous collection of points, line strings and polygons.
///
/// This is both the input and the output type of the overlay: results are always assembled as
/// points, then lines, then polygons.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry<T = f64> {
    pub points: Vec<Vector2<T>>,
    pub lines: Vec<LineString<T>>,
    pub polygons: Vec<Polygon<T>>,
}

impl<T> Geometry<T>
where
    T: Real,
{
    #[inline]
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            polygons: Vec::new(),
        }
    }

    #[inline]
    pub fn new(
        points: Vec<Vector2<T>>,
        lines: Vec<LineString<T>>,
        polygons: Vec<Polygon<T>>,
    ) -> Self {
        Self {
            points,
            lines,
            polygons,
        }
    }

    pub fn from_point(point: Vector2<T>) -> Self {
        Self::new(vec![point], Vec::new(), Vec::new())
    }

    pub fn from_points(points: Vec<Vector2<T>>) -> Self {
        Self::new(points, Vec::new(), Vec::new())
    }

    pub fn from_line(line: LineString<T>) -> Self {
        Self::new(Vec::new(), vec![line], Vec::new())
    }

    pub fn from_lines(lines: Vec<LineString<T>>) -> Self {
        Self::new(Vec::new(), lines, Vec::new())
    }

    pub fn from_polygon(polygon: Polygon<T>) -> Self {
        Self::new(Vec::new(), Vec::new(), vec![polygon])
    }

    pub fn from_polygons(polygons: Vec<Polygon<T>>) -> Self {
        Self::new(Vec::new(), Vec::new(), polygons)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
            && self.lines.iter().all(|l| l.is_empty())
            && self.polygons.iter().all(|p| p.is_empty())
    }

    /// Highest dimension present: 2 for polygons, 1 for lines, 0 for points, -1 if empty.
    pub fn dimension(&self) -> i32 {
        if self.polygons.iter().any(|p| !p.is_empty()) {
            2
        } else if self.lines.iter().any(|l| !l.is_empty()) {
            1
        } else if !self.points.is_empty() {
            0
        } else {
            -1
        }
    }

    pub fn area(&self) -> T {
        self.polygons
            .iter()
            .fold(T::zero(), |acc, p| acc + p.area())
    }

    pub fn length(&self) -> T {
        let lines = self
            .lines
            .iter()
            .fold(T::zero(), |acc, l| acc + l.length());
        self.polygons
            .iter()
            .fold(lines, |acc, p| acc + p.perimeter())
    }

    pub fn envelope(&self) -> Envelope<T> {
        let mut env = Envelope::from_points(self.points.iter());
        for line in self.lines.iter() {
            env.expand_to_include_envelope(&line.envelope());
        }
        for poly in self.polygons.iter() {
            env.expand_to_include_envelope(&poly.envelope());
        }
        env
    }
}
