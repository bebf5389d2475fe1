use crate::geometry::Location;

/// Position relative to a directed edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    On = 0,
    Left = 1,
    Right = 2,
}

impl Position {
    /// Left and right swap, on stays on.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Position::On => Position::On,
            Position::Left => Position::Right,
            Position::Right => Position::Left,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Locations of the on, left and right positions of an edge relative to one input geometry.
///
/// Line locations only carry the on position, area locations carry all three.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct TopologyLocation {
    locs: [Location; 3],
    is_area: bool,
}

impl TopologyLocation {
    #[inline]
    pub fn new_line(on: Location) -> Self {
        Self {
            locs: [on, Location::None, Location::None],
            is_area: false,
        }
    }

    #[inline]
    pub fn new_area(on: Location, left: Location, right: Location) -> Self {
        Self {
            locs: [on, left, right],
            is_area: true,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        if self.is_area {
            3
        } else {
            1
        }
    }

    #[inline]
    pub fn is_area(&self) -> bool {
        self.is_area
    }

    #[inline]
    pub fn is_line(&self) -> bool {
        !self.is_area
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Location {
        self.locs[pos.index()]
    }

    /// Set the location at `pos`, side positions are ignored for line locations.
    #[inline]
    pub fn set(&mut self, pos: Position, loc: Location) {
        if pos.index() < self.len() {
            self.locs[pos.index()] = loc;
        }
    }

    #[inline]
    pub fn set_on(&mut self, loc: Location) {
        self.locs[0] = loc;
    }

    pub fn is_null(&self) -> bool {
        self.locs[..self.len()].iter().all(|l| l.is_none())
    }

    pub fn is_any_null(&self) -> bool {
        self.locs[..self.len()].iter().any(|l| l.is_none())
    }

    pub fn all_positions_equal(&self, loc: Location) -> bool {
        self.locs[..self.len()].iter().all(|&l| l == loc)
    }

    #[inline]
    pub fn is_equal_on_side(&self, other: &Self, pos: Position) -> bool {
        self.get(pos) == other.get(pos)
    }

    #[inline]
    pub fn flip(&mut self) {
        if self.is_area {
            self.locs.swap(1, 2);
        }
    }

    pub fn set_all_locations(&mut self, loc: Location) {
        let n = self.len();
        for l in self.locs[..n].iter_mut() {
            *l = loc;
        }
    }

    pub fn set_all_locations_if_null(&mut self, loc: Location) {
        let n = self.len();
        for l in self.locs[..n].iter_mut() {
            if l.is_none() {
                *l = loc;
            }
        }
    }

    /// Drop the side locations, keeping the on location.
    #[inline]
    pub fn to_line(&mut self) {
        if self.is_area {
            *self = Self::new_line(self.locs[0]);
        }
    }

    /// Fill any null location with the corresponding location of `other`, an area `other`
    /// promotes a line location to an area location.
    pub fn merge(&mut self, other: &Self) {
        if other.is_area && !self.is_area {
            self.is_area = true;
            self.locs[1] = Location::None;
            self.locs[2] = Location::None;
        }

        for i in 0..self.len() {
            if self.locs[i].is_none() && i < other.len() {
                self.locs[i] = other.locs[i];
            }
        }
    }
}

/// Topological relationship of a graph component to both input geometries (index 0 and 1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Label {
    elt: [TopologyLocation; 2],
}

impl Label {
    /// Line label with the same on location for both geometries.
    pub fn new_on(on: Location) -> Self {
        Self {
            elt: [TopologyLocation::new_line(on); 2],
        }
    }

    /// Line label with `on` set for `geom_index` and null for the other geometry.
    pub fn new_line(geom_index: usize, on: Location) -> Self {
        let mut label = Self::new_on(Location::None);
        label.elt[geom_index].set_on(on);
        label
    }

    /// Area label with the given locations for `geom_index` and null for the other geometry.
    pub fn new_area(geom_index: usize, on: Location, left: Location, right: Location) -> Self {
        let none = TopologyLocation::new_area(Location::None, Location::None, Location::None);
        let mut label = Self { elt: [none; 2] };
        label.elt[geom_index] = TopologyLocation::new_area(on, left, right);
        label
    }

    /// Line label carrying only the on locations of `label`.
    pub fn to_line_label(label: &Label) -> Self {
        let mut line_label = Self::new_on(Location::None);
        for i in 0..2 {
            line_label.elt[i].set_on(label.on_location(i));
        }
        line_label
    }

    #[inline]
    pub fn flip(&mut self) {
        self.elt[0].flip();
        self.elt[1].flip();
    }

    #[inline]
    pub fn flipped(&self) -> Self {
        let mut label = *self;
        label.flip();
        label
    }

    #[inline]
    pub fn location(&self, geom_index: usize, pos: Position) -> Location {
        self.elt[geom_index].get(pos)
    }

    #[inline]
    pub fn on_location(&self, geom_index: usize) -> Location {
        self.elt[geom_index].get(Position::On)
    }

    #[inline]
    pub fn set_location(&mut self, geom_index: usize, pos: Position, loc: Location) {
        self.elt[geom_index].set(pos, loc);
    }

    #[inline]
    pub fn set_on_location(&mut self, geom_index: usize, loc: Location) {
        self.elt[geom_index].set_on(loc);
    }

    #[inline]
    pub fn set_all_locations(&mut self, geom_index: usize, loc: Location) {
        self.elt[geom_index].set_all_locations(loc);
    }

    #[inline]
    pub fn set_all_locations_if_null(&mut self, geom_index: usize, loc: Location) {
        self.elt[geom_index].set_all_locations_if_null(loc);
    }

    pub fn merge(&mut self, other: &Label) {
        self.elt[0].merge(&other.elt[0]);
        self.elt[1].merge(&other.elt[1]);
    }

    /// Number of geometries the label has any location for.
    pub fn geometry_count(&self) -> usize {
        self.elt.iter().filter(|e| !e.is_null()).count()
    }

    #[inline]
    pub fn is_null(&self, geom_index: usize) -> bool {
        self.elt[geom_index].is_null()
    }

    #[inline]
    pub fn is_any_null(&self, geom_index: usize) -> bool {
        self.elt[geom_index].is_any_null()
    }

    /// True if the label is an area label for either geometry.
    #[inline]
    pub fn is_area(&self) -> bool {
        self.elt[0].is_area() || self.elt[1].is_area()
    }

    #[inline]
    pub fn is_area_for(&self, geom_index: usize) -> bool {
        self.elt[geom_index].is_area()
    }

    #[inline]
    pub fn is_line(&self, geom_index: usize) -> bool {
        self.elt[geom_index].is_line()
    }

    #[inline]
    pub fn is_equal_on_side(&self, other: &Label, pos: Position) -> bool {
        self.elt[0].is_equal_on_side(&other.elt[0], pos)
            && self.elt[1].is_equal_on_side(&other.elt[1], pos)
    }

    #[inline]
    pub fn all_positions_equal(&self, geom_index: usize, loc: Location) -> bool {
        self.elt[geom_index].all_positions_equal(loc)
    }

    /// Collapse the area location of `geom_index` into a line location.
    #[inline]
    pub fn to_line(&mut self, geom_index: usize) {
        self.elt[geom_index].to_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Location::*;

    #[test]
    fn flip_swaps_sides() {
        let label = Label::new_area(0, Boundary, Exterior, Interior);
        let flipped = label.flipped();
        assert_eq!(flipped.location(0, Position::Left), Interior);
        assert_eq!(flipped.location(0, Position::Right), Exterior);
        assert_eq!(flipped.on_location(0), Boundary);
        assert!(flipped.is_null(1));
    }

    #[test]
    fn merge_promotes_line_to_area() {
        let mut label = Label::new_line(0, Interior);
        label.merge(&Label::new_area(1, Boundary, Interior, Exterior));
        assert!(label.is_line(0));
        assert!(label.is_area_for(1));
        assert_eq!(label.location(1, Position::Right), Exterior);
        assert_eq!(label.geometry_count(), 2);
    }

    #[test]
    fn merge_keeps_existing_locations() {
        let mut label = Label::new_area(0, Boundary, Exterior, Interior);
        label.merge(&Label::new_area(0, Interior, Interior, Interior));
        assert_eq!(label.on_location(0), Boundary);
        assert_eq!(label.location(0, Position::Left), Exterior);
    }

    #[test]
    fn line_ignores_side_locations() {
        let mut label = Label::new_line(0, Interior);
        label.set_location(0, Position::Left, Exterior);
        assert_eq!(label.location(0, Position::Left), None);
        label.set_all_locations_if_null(1, Exterior);
        assert_eq!(label.on_location(1), Exterior);
        assert!(label.all_positions_equal(1, Exterior));
    }

    #[test]
    fn to_line_label_keeps_on_locations() {
        let label = Label::new_area(1, Boundary, Exterior, Interior);
        let line = Label::to_line_label(&label);
        assert!(!line.is_area());
        assert_eq!(line.on_location(1), Boundary);
        assert_eq!(line.on_location(0), None);
    }
}
