use super::{Label, Position};
use crate::geometry::Location;

const NULL_DEPTH: i32 = -1;

/// Interior depth counts on each side of an edge for both input geometries.
///
/// Accumulated while merging coincident edges, a zero delta between the sides means the area
/// collapsed into a line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Depth {
    depth: [[i32; 3]; 2],
}

impl Default for Depth {
    fn default() -> Self {
        Self {
            depth: [[NULL_DEPTH; 3]; 2],
        }
    }
}

impl Depth {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    fn depth_at_location(loc: Location) -> i32 {
        match loc {
            Location::Exterior => 0,
            Location::Interior => 1,
            _ => NULL_DEPTH,
        }
    }

    #[inline]
    pub fn get(&self, geom_index: usize, pos: Position) -> i32 {
        self.depth[geom_index][pos as usize]
    }

    #[inline]
    pub fn set(&mut self, geom_index: usize, pos: Position, depth: i32) {
        self.depth[geom_index][pos as usize] = depth;
    }

    /// Location implied by the depth, any positive depth is interior.
    #[inline]
    pub fn location(&self, geom_index: usize, pos: Position) -> Location {
        if self.get(geom_index, pos) <= 0 {
            Location::Exterior
        } else {
            Location::Interior
        }
    }

    pub fn is_null(&self) -> bool {
        self.depth.iter().flatten().all(|&d| d == NULL_DEPTH)
    }

    #[inline]
    pub fn is_null_for(&self, geom_index: usize) -> bool {
        self.depth[geom_index][Position::Left as usize] == NULL_DEPTH
    }

    #[inline]
    pub fn is_null_at(&self, geom_index: usize, pos: Position) -> bool {
        self.get(geom_index, pos) == NULL_DEPTH
    }

    /// Accumulate the side locations of `label`.
    pub fn add(&mut self, label: &Label) {
        for i in 0..2 {
            for pos in [Position::Left, Position::Right] {
                let loc = label.location(i, pos);
                if matches!(loc, Location::Exterior | Location::Interior) {
                    let d = Self::depth_at_location(loc);
                    if self.is_null_at(i, pos) {
                        self.set(i, pos, d);
                    } else {
                        self.depth[i][pos as usize] += d;
                    }
                }
            }
        }
    }

    /// Right depth minus left depth.
    #[inline]
    pub fn delta(&self, geom_index: usize) -> i32 {
        self.get(geom_index, Position::Right) - self.get(geom_index, Position::Left)
    }

    /// Reduce the depths so the smaller side is 0 and the larger side is 0 or 1.
    pub fn normalize(&mut self) {
        for i in 0..2 {
            if self.is_null_for(i) {
                continue;
            }

            let left = self.depth[i][Position::Left as usize];
            let right = self.depth[i][Position::Right as usize];
            let min_depth = left.min(right).max(0);
            for pos in [Position::Left, Position::Right] {
                let d = &mut self.depth[i][pos as usize];
                *d = if *d > min_depth { 1 } else { 0 };
            }
        }
    }
}
