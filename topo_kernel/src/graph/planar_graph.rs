use super::{sym, CoordKey, DirectedEdge, Edge, Label, Node, Position};
use crate::core::{math::Vector2, traits::Real};
use crate::error::{err_coord, TopologyError, TopologyResult};
use crate::geometry::Location;
use std::collections::BTreeMap;

/// Arena backed planar graph of nodes, undirected edges and their directed edge pairs.
///
/// Everything refers to everything else by index: directed edges `2 * e` and `2 * e + 1` are the
/// forward and reverse directions of edge `e`, nodes list the directed edges leaving them and
/// directed edges hold the index of their origin node.
#[derive(Debug, Clone, Default)]
pub struct PlanarGraph<T = f64> {
    pub nodes: Vec<Node<T>>,
    pub edges: Vec<Edge<T>>,
    pub dirs: Vec<DirectedEdge<T>>,
    node_map: BTreeMap<CoordKey<T>, usize>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum LinkState {
    ScanningForIncoming,
    LinkingToOutgoing,
}

impl<T> PlanarGraph<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            dirs: Vec::new(),
            node_map: BTreeMap::new(),
        }
    }

    /// Returns the node at `coord`, creating it if it does not exist.
    pub fn add_node(&mut self, coord: Vector2<T>) -> usize {
        let next_index = self.nodes.len();
        let index = *self.node_map.entry(CoordKey(coord)).or_insert(next_index);
        if index == next_index {
            self.nodes.push(Node::new(coord));
        }
        index
    }

    #[inline]
    pub fn find_node(&self, coord: Vector2<T>) -> Option<usize> {
        self.node_map.get(&CoordKey(coord)).copied()
    }

    /// Node indexes in coordinate order (x then y).
    pub fn node_indexes(&self) -> Vec<usize> {
        self.node_map.values().copied().collect()
    }

    /// Add noded edges, creating both directed edges for each and inserting them into the stars
    /// of their origin nodes.
    pub fn add_edges(&mut self, edges: Vec<Edge<T>>) {
        for edge in edges {
            let edge_index = self.edges.len();
            let forward = DirectedEdge::new(edge_index, &edge.pts, &edge.label, true);
            let reverse = DirectedEdge::new(edge_index, &edge.pts, &edge.label, false);
            self.edges.push(edge);
            self.insert_directed_edge(forward);
            self.insert_directed_edge(reverse);
        }
    }

    fn insert_directed_edge(&mut self, mut de: DirectedEdge<T>) {
        let de_index = self.dirs.len();
        let node_index = self.add_node(de.p0);
        de.node = node_index;

        let dirs = &self.dirs;
        let star = &mut self.nodes[node_index].star;
        match star.binary_search_by(|&other| dirs[other].compare_direction(&de)) {
            // coincident directions only arise from unnoded input, first one wins
            Ok(_) => {}
            Err(pos) => star.insert(pos, de_index),
        }

        self.dirs.push(de);
    }

    #[inline]
    pub fn edge_of(&self, de: usize) -> &Edge<T> {
        &self.edges[self.dirs[de].edge]
    }

    /// Label the directed edges of the star at `node` by propagating side locations around it
    /// and filling remaining null locations.
    ///
    /// `locate_in_area` gives the location of a point relative to the area of input geometry 0 or
    /// 1 and is only invoked when needed.
    pub fn compute_star_labelling<F>(&mut self, node: usize, mut locate_in_area: F) -> TopologyResult<()>
    where
        F: FnMut(usize, Vector2<T>) -> Location,
    {
        self.propagate_side_labels(node, 0)?;
        self.propagate_side_labels(node, 1)?;

        let star = &self.nodes[node].star;
        let mut has_dimensional_collapse_edge = [false, false];
        for &de in star.iter() {
            let label = &self.dirs[de].label;
            for (geom_index, has_collapse) in has_dimensional_collapse_edge.iter_mut().enumerate() {
                if label.is_line(geom_index) && label.on_location(geom_index) == Location::Boundary {
                    *has_collapse = true;
                }
            }
        }

        let coord = self.nodes[node].coord;
        let mut area_locations = [Location::None; 2];
        for &de in self.nodes[node].star.iter() {
            for geom_index in 0..2 {
                if !self.dirs[de].label.is_any_null(geom_index) {
                    continue;
                }

                let loc = if has_dimensional_collapse_edge[geom_index] {
                    Location::Exterior
                } else {
                    if area_locations[geom_index].is_none() {
                        area_locations[geom_index] = locate_in_area(geom_index, coord);
                    }
                    area_locations[geom_index]
                };

                self.dirs[de]
                    .label
                    .set_all_locations_if_null(geom_index, loc);
            }
        }

        let mut star_label = Label::new_on(Location::None);
        for &de in self.nodes[node].star.iter() {
            let edge_label = &self.edge_of(de).label;
            for geom_index in 0..2 {
                if matches!(
                    edge_label.on_location(geom_index),
                    Location::Interior | Location::Boundary
                ) {
                    star_label.set_on_location(geom_index, Location::Interior);
                }
            }
        }
        self.nodes[node].star_label = star_label;

        Ok(())
    }

    fn propagate_side_labels(&mut self, node: usize, geom_index: usize) -> TopologyResult<()> {
        let star = &self.nodes[node].star;

        let mut start_loc = Location::None;
        for &de in star.iter() {
            let label = &self.dirs[de].label;
            if label.is_area_for(geom_index) {
                let left = label.location(geom_index, Position::Left);
                if !left.is_none() {
                    start_loc = left;
                }
            }
        }

        if start_loc.is_none() {
            return Ok(());
        }

        let mut curr_loc = start_loc;
        for &de in self.nodes[node].star.iter() {
            let label = &mut self.dirs[de].label;
            if label.on_location(geom_index).is_none() {
                label.set_on_location(geom_index, curr_loc);
            }

            if label.is_area_for(geom_index) {
                let left = label.location(geom_index, Position::Left);
                let right = label.location(geom_index, Position::Right);
                if !right.is_none() {
                    if right != curr_loc || left.is_none() {
                        return Err(TopologyError::SideLocationConflict {
                            at: err_coord(self.nodes[node].coord),
                        });
                    }
                    curr_loc = left;
                } else {
                    if !left.is_none() {
                        return Err(TopologyError::SideLocationConflict {
                            at: err_coord(self.nodes[node].coord),
                        });
                    }
                    label.set_location(geom_index, Position::Right, curr_loc);
                    label.set_location(geom_index, Position::Left, curr_loc);
                }
            }
        }

        Ok(())
    }

    /// Merge the label of each directed edge at `node` with its symmetric edge label.
    pub fn merge_sym_labels(&mut self, node: usize) {
        for i in 0..self.nodes[node].star.len() {
            let de = self.nodes[node].star[i];
            let sym_label = self.dirs[sym(de)].label;
            self.dirs[de].label.merge(&sym_label);
        }
    }

    /// Merge the star summary label into the node label.
    #[inline]
    pub fn update_node_labelling(&mut self, node: usize) {
        let star_label = self.nodes[node].star_label;
        self.nodes[node].label.merge(&star_label);
    }

    /// Fill null locations of the directed edges at `node` with the node label locations.
    pub fn update_star_labelling(&mut self, node: usize) {
        let node_label = self.nodes[node].label;
        for &de in self.nodes[node].star.iter() {
            let label = &mut self.dirs[de].label;
            label.set_all_locations_if_null(0, node_label.on_location(0));
            label.set_all_locations_if_null(1, node_label.on_location(1));
        }
    }

    /// Link each incoming result area edge at `node` to the next outgoing result area edge
    /// (clockwise), which traces result rings with the result area on the right.
    pub fn link_result_directed_edges(&mut self, node: usize) -> TopologyResult<()> {
        let result_edges: Vec<usize> = self.nodes[node]
            .star
            .iter()
            .copied()
            .filter(|&de| self.dirs[de].is_in_result || self.dirs[sym(de)].is_in_result)
            .collect();

        let mut first_out = None;
        let mut incoming = None;
        let mut state = LinkState::ScanningForIncoming;
        for &next_out in result_edges.iter() {
            let next_in = sym(next_out);
            if !self.dirs[next_out].label.is_area() {
                continue;
            }

            if first_out.is_none() && self.dirs[next_out].is_in_result {
                first_out = Some(next_out);
            }

            match state {
                LinkState::ScanningForIncoming => {
                    if !self.dirs[next_in].is_in_result {
                        continue;
                    }
                    incoming = Some(next_in);
                    state = LinkState::LinkingToOutgoing;
                }
                LinkState::LinkingToOutgoing => {
                    if !self.dirs[next_out].is_in_result {
                        continue;
                    }
                    if let Some(inc) = incoming {
                        self.dirs[inc].next = Some(next_out);
                    }
                    state = LinkState::ScanningForIncoming;
                }
            }
        }

        if state == LinkState::LinkingToOutgoing {
            let at = err_coord(self.nodes[node].coord);
            let first_out = first_out.ok_or(TopologyError::NoOutgoingEdge { at })?;
            if let Some(inc) = incoming {
                self.dirs[inc].next = Some(first_out);
            }
        }

        self.nodes[node].result_area_edges = result_edges;
        Ok(())
    }

    /// Number of directed edges at `node` belonging to maximal ring `ring`.
    pub fn outgoing_degree(&self, node: usize, ring: usize) -> usize {
        self.nodes[node]
            .star
            .iter()
            .filter(|&&de| self.dirs[de].edge_ring == Some(ring))
            .count()
    }

    /// Link the edges of maximal ring `ring` at `node` so that following `next_min` traces the
    /// minimal rings (counter clockwise scan of the cached result edges).
    pub fn link_minimal_directed_edges(&mut self, node: usize, ring: usize) -> TopologyResult<()> {
        let mut first_out = None;
        let mut incoming = None;
        let mut state = LinkState::ScanningForIncoming;

        for i in (0..self.nodes[node].result_area_edges.len()).rev() {
            let next_out = self.nodes[node].result_area_edges[i];
            let next_in = sym(next_out);

            if first_out.is_none() && self.dirs[next_out].edge_ring == Some(ring) {
                first_out = Some(next_out);
            }

            match state {
                LinkState::ScanningForIncoming => {
                    if self.dirs[next_in].edge_ring != Some(ring) {
                        continue;
                    }
                    incoming = Some(next_in);
                    state = LinkState::LinkingToOutgoing;
                }
                LinkState::LinkingToOutgoing => {
                    if self.dirs[next_out].edge_ring != Some(ring) {
                        continue;
                    }
                    if let Some(inc) = incoming {
                        self.dirs[inc].next_min = Some(next_out);
                    }
                    state = LinkState::ScanningForIncoming;
                }
            }
        }

        if state == LinkState::LinkingToOutgoing {
            let at = err_coord(self.nodes[node].coord);
            let first_out = first_out.ok_or(TopologyError::UnlinkedIncomingEdge { at })?;
            if let Some(inc) = incoming {
                self.dirs[inc].next_min = Some(first_out);
            }
        }

        Ok(())
    }

    /// Mark line edges at `node` as covered when they lie inside the result area, determined by
    /// walking around the node from a result area edge.
    pub fn find_covered_line_edges(&mut self, node: usize) {
        let mut start_loc = Location::None;
        for &next_out in self.nodes[node].star.iter() {
            if self.dirs[next_out].is_line_edge() {
                continue;
            }
            if self.dirs[next_out].is_in_result {
                start_loc = Location::Interior;
                break;
            }
            if self.dirs[sym(next_out)].is_in_result {
                start_loc = Location::Exterior;
                break;
            }
        }

        if start_loc.is_none() {
            return;
        }

        let mut curr_loc = start_loc;
        for i in 0..self.nodes[node].star.len() {
            let next_out = self.nodes[node].star[i];
            if self.dirs[next_out].is_line_edge() {
                let edge = self.dirs[next_out].edge;
                self.edges[edge].set_covered(curr_loc == Location::Interior);
            } else {
                if self.dirs[next_out].is_in_result {
                    curr_loc = Location::Exterior;
                }
                if self.dirs[sym(next_out)].is_in_result {
                    curr_loc = Location::Interior;
                }
            }
        }
    }

    /// True if any edge incident to `node` is part of the result.
    pub fn is_incident_edge_in_result(&self, node: usize) -> bool {
        self.nodes[node]
            .star
            .iter()
            .any(|&de| self.edge_of(de).is_in_result)
    }

    /// Mark both directions of the edge of `de` as visited.
    #[inline]
    pub fn set_visited_edge(&mut self, de: usize, visited: bool) {
        self.dirs[de].is_visited = visited;
        self.dirs[sym(de)].is_visited = visited;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn area_edge(pts: Vec<Vector2<f64>>) -> Edge<f64> {
        Edge::new(
            pts,
            Label::new_area(0, Location::Boundary, Location::Exterior, Location::Interior),
        )
    }

    #[test]
    fn directed_edges_are_paired() {
        let mut graph = PlanarGraph::new();
        graph.add_edges(vec![area_edge(vec![vec2(0.0, 0.0), vec2(1.0, 0.0)])]);
        assert_eq!(graph.dirs.len(), 2);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.dirs[sym(0)].p0, vec2(1.0, 0.0));
        assert_eq!(graph.dirs[0].edge, graph.dirs[1].edge);
        assert_eq!(graph.find_node(vec2(1.0, 0.0)), Some(graph.dirs[1].node));
    }

    #[test]
    fn star_is_sorted_counter_clockwise() {
        let mut graph = PlanarGraph::new();
        let o = vec2(0.0, 0.0);
        graph.add_edges(vec![
            area_edge(vec![o, vec2(0.0, -1.0)]),
            area_edge(vec![o, vec2(1.0, 0.0)]),
            area_edge(vec![o, vec2(-1.0, 0.0)]),
            area_edge(vec![o, vec2(0.0, 1.0)]),
        ]);
        let origin = graph.find_node(o).unwrap();
        let targets: Vec<_> = graph.nodes[origin]
            .star
            .iter()
            .map(|&de| graph.dirs[de].p1)
            .collect();
        assert_eq!(
            targets,
            vec![vec2(1.0, 0.0), vec2(0.0, 1.0), vec2(-1.0, 0.0), vec2(0.0, -1.0)]
        );
    }

    #[test]
    fn node_indexes_in_coordinate_order() {
        let mut graph = PlanarGraph::<f64>::new();
        graph.add_node(vec2(2.0, 0.0));
        graph.add_node(vec2(0.0, 0.0));
        graph.add_node(vec2(2.0, 0.0));
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.node_indexes(), vec![1, 0]);
    }
}
