use super::{
    math::{ccw, circumcircle_center, parabolic_cut, round10, sweep_eps},
    VoronoiEdge, VoronoiGraph,
};
use crate::core::{math::Vector2, traits::Real};
use crate::error::TopologyResult;

/// Beachline tree node payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum VNodeKind<T = f64> {
    /// Leaf, one parabolic arc of the site `point`.
    Data { point: Vector2<T> },
    /// Internal node, the breakpoint between the arcs of its left and right subtrees traced by
    /// voronoi edge `edge`. A flipped node has the edge's sites reversed.
    Edge { edge: usize, flipped: bool },
}

/// Node of the beachline tree stored in the [Beachline] arena.
#[derive(Debug, Copy, Clone)]
pub struct VNode<T = f64> {
    pub kind: VNodeKind<T>,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Circle event predicted for the arc `node_n` between the arcs of `left_point` and
/// `right_point`.
#[derive(Debug, Copy, Clone)]
pub struct CircleEvent<T = f64> {
    pub node_n: usize,
    pub left_point: Vector2<T>,
    pub right_point: Vector2<T>,
    pub center: Vector2<T>,
    /// Sweep position at which the arc vanishes (bottom of the circle as seen by the sweep).
    pub y: T,
    pub valid: bool,
}

/// Binary tree of arcs (leaves) and breakpoints (internal nodes) ordered left to right.
///
/// Nodes are never freed, replaced subtrees are simply unlinked. Only the single parent link of
/// a replaced child is rewritten.
#[derive(Debug, Clone)]
pub struct Beachline<T = f64> {
    nodes: Vec<VNode<T>>,
    pub root: Option<usize>,
    tolerance: T,
}

impl<T> Beachline<T>
where
    T: Real,
{
    pub fn new(tolerance: T) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            tolerance,
        }
    }

    fn push(&mut self, kind: VNodeKind<T>) -> usize {
        self.nodes.push(VNode {
            kind,
            parent: None,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    fn new_data(&mut self, point: Vector2<T>) -> usize {
        self.push(VNodeKind::Data { point })
    }

    fn new_edge(&mut self, edge: usize, flipped: bool) -> usize {
        self.push(VNodeKind::Edge { edge, flipped })
    }

    fn set_left(&mut self, parent: usize, child: Option<usize>) {
        self.nodes[parent].left = child;
        if let Some(c) = child {
            self.nodes[c].parent = Some(parent);
        }
    }

    fn set_right(&mut self, parent: usize, child: Option<usize>) {
        self.nodes[parent].right = child;
        if let Some(c) = child {
            self.nodes[c].parent = Some(parent);
        }
    }

    /// Put `new` in the place of `old` (under the parent of `old` or as the root).
    fn replace(&mut self, old: usize, new: usize) {
        match self.nodes[old].parent {
            Some(p) => {
                if self.nodes[p].left == Some(old) {
                    self.set_left(p, Some(new));
                } else {
                    self.set_right(p, Some(new));
                }
            }
            None => {
                self.root = Some(new);
                self.nodes[new].parent = None;
            }
        }
        self.nodes[old].parent = None;
    }

    /// Site of data node `n`.
    #[inline]
    pub fn data_point(&self, n: usize) -> Vector2<T> {
        match self.nodes[n].kind {
            VNodeKind::Data { point } => point,
            VNodeKind::Edge { .. } => Vector2::unknown(),
        }
    }

    #[inline]
    fn same_point(&self, a: Vector2<T>, b: Vector2<T>) -> bool {
        a.fuzzy_eq_eps(b, self.tolerance)
    }

    /// Data node directly left of data node `current`.
    pub fn left_data_node(&self, current: usize) -> Option<usize> {
        let mut c = current;
        // up until we arrive from a right child
        loop {
            let p = self.nodes[c].parent?;
            let from_left = self.nodes[p].left == Some(c);
            c = p;
            if !from_left {
                break;
            }
        }

        c = self.nodes[c].left?;
        while let Some(r) = self.nodes[c].right {
            c = r;
        }
        Some(c)
    }

    /// Data node directly right of data node `current`.
    pub fn right_data_node(&self, current: usize) -> Option<usize> {
        let mut c = current;
        loop {
            let p = self.nodes[c].parent?;
            let from_right = self.nodes[p].right == Some(c);
            c = p;
            if !from_right {
                break;
            }
        }

        c = self.nodes[c].right?;
        while let Some(l) = self.nodes[c].left {
            c = l;
        }
        Some(c)
    }

    /// Edge node of the breakpoint directly right of data node `current`.
    fn edge_to_right_data_node(&self, current: usize) -> Option<usize> {
        let mut c = current;
        loop {
            let p = self.nodes[c].parent?;
            let from_right = self.nodes[p].right == Some(c);
            c = p;
            if !from_right {
                return Some(c);
            }
        }
    }

    /// Signed offset of `x` from the breakpoint of edge node `node` at sweep `ys`.
    fn cut(&self, node: usize, edges: &[VoronoiEdge<T>], ys: T, x: T) -> TopologyResult<T> {
        let (edge, flipped) = match self.nodes[node].kind {
            VNodeKind::Edge { edge, flipped } => (edge, flipped),
            VNodeKind::Data { .. } => return Ok(T::zero()),
        };

        let e = &edges[edge];
        let bp = if flipped {
            parabolic_cut(e.right_data, e.left_data, ys)?
        } else {
            parabolic_cut(e.left_data, e.right_data, ys)?
        };

        Ok(round10(x - bp))
    }

    /// Arc directly above `x` at sweep position `ys`.
    fn find_data_node(&self, root: usize, edges: &[VoronoiEdge<T>], ys: T, x: T) -> TopologyResult<usize> {
        let mut c = root;
        loop {
            if let VNodeKind::Data { .. } = self.nodes[c].kind {
                return Ok(c);
            }

            let next = if self.cut(c, edges, ys, x)? < T::zero() {
                self.nodes[c].left
            } else {
                self.nodes[c].right
            };

            match next {
                Some(n) => c = n,
                None => return Ok(c),
            }
        }
    }

    /// Insert the arc of a new site, splitting the arc above it. Returns the arcs whose circle
    /// events must be rechecked.
    pub fn process_data_event(
        &mut self,
        point: Vector2<T>,
        graph: &mut VoronoiGraph<T>,
        ys: T,
    ) -> TopologyResult<Vec<usize>> {
        let root = match self.root {
            None => {
                let n = self.new_data(point);
                self.root = Some(n);
                return Ok(vec![n]);
            }
            Some(r) => r,
        };

        let c = self.find_data_node(root, &graph.edges, ys, point.x)?;
        let above = self.data_point(c);
        let edge_index = graph.edges.len();
        graph.edges.push(VoronoiEdge::new(above, point));

        let check_list;
        let sub_root;
        if (above.y - point.y).abs() < sweep_eps() {
            // both sites on the sweep line, simple left/right split
            let (flipped, l, r) = if above.x < point.x {
                (false, above, point)
            } else {
                (true, point, above)
            };
            sub_root = self.new_edge(edge_index, flipped);
            let ln = self.new_data(l);
            let rn = self.new_data(r);
            self.set_left(sub_root, Some(ln));
            self.set_right(sub_root, Some(rn));
            check_list = vec![ln, rn];
        } else {
            sub_root = self.new_edge(edge_index, false);
            let ln = self.new_data(above);
            let inner = self.new_edge(edge_index, true);
            let mn = self.new_data(point);
            let rn = self.new_data(above);
            self.set_left(sub_root, Some(ln));
            self.set_right(sub_root, Some(inner));
            self.set_left(inner, Some(mn));
            self.set_right(inner, Some(rn));
            check_list = vec![ln, mn, rn];
        }

        self.replace(c, sub_root);
        Ok(check_list)
    }

    /// Remove the vanishing arc of a circle event, closing the two edges bounding it at the
    /// circle center and starting the edge between its former neighbors. A stale event (the
    /// neighbors changed) returns an empty check list and changes nothing.
    pub fn process_circle_event(
        &mut self,
        event: &CircleEvent<T>,
        graph: &mut VoronoiGraph<T>,
    ) -> TopologyResult<Vec<usize>> {
        let b = event.node_n;
        let (a, c) = match (self.left_data_node(b), self.right_data_node(b)) {
            (Some(a), Some(c)) => (a, c),
            _ => return Ok(Vec::new()),
        };

        let eu = match self.nodes[b].parent {
            Some(p) => p,
            None => return Ok(Vec::new()),
        };

        if !self.same_point(self.data_point(a), event.left_point)
            || !self.same_point(self.data_point(c), event.right_point)
        {
            return Ok(Vec::new());
        }

        let new_vertex = event.center;
        graph.vertices.push(new_vertex);

        // one of a or c is the sibling of b, the other is reached through a distant breakpoint
        let (eo, sibling) = if self.nodes[eu].left == Some(b) {
            (self.edge_to_right_data_node(a), self.nodes[eu].right)
        } else {
            (self.edge_to_right_data_node(b), self.nodes[eu].left)
        };

        let (eo, sibling) = match (eo, sibling) {
            (Some(eo), Some(sibling)) => (eo, sibling),
            _ => return Ok(Vec::new()),
        };

        self.replace(eu, sibling);

        if let VNodeKind::Edge { edge, .. } = self.nodes[eu].kind {
            graph.edges[edge].add_vertex(new_vertex)?;
        }
        if let VNodeKind::Edge { edge, .. } = self.nodes[eo].kind {
            graph.edges[edge].add_vertex(new_vertex)?;
        }

        let mut new_edge = VoronoiEdge::new(self.data_point(a), self.data_point(c));
        new_edge.add_vertex(new_vertex)?;
        let edge_index = graph.edges.len();
        graph.edges.push(new_edge);

        let ven = self.new_edge(edge_index, false);
        let (eo_left, eo_right) = (self.nodes[eo].left, self.nodes[eo].right);
        self.set_left(ven, eo_left);
        self.set_right(ven, eo_right);
        self.replace(eo, ven);

        Ok(vec![a, c])
    }

    /// Predict the circle event of arc `n`, if its neighbors converge at or after sweep `ys`.
    pub fn circle_check_data_node(&self, n: usize, ys: T) -> TopologyResult<Option<CircleEvent<T>>> {
        let (l, r) = match (self.left_data_node(n), self.right_data_node(n)) {
            (Some(l), Some(r)) => (l, r),
            _ => return Ok(None),
        };

        let lp = self.data_point(l);
        let np = self.data_point(n);
        let rp = self.data_point(r);
        if self.same_point(lp, rp) || self.same_point(lp, np) || self.same_point(np, rp) {
            return Ok(None);
        }

        if ccw(lp, np, rp, false) <= 0 {
            return Ok(None);
        }

        let center = circumcircle_center(lp, np, rp)?;
        let y = center.y + np.distance(center);
        if y < ys {
            return Ok(None);
        }

        Ok(Some(CircleEvent {
            node_n: n,
            left_point: lp,
            right_point: rp,
            center,
            y,
            valid: true,
        }))
    }

    /// Close every edge still on the beachline with the infinite sentinel and restore the site
    /// order of flipped breakpoints. Returns the edges visited.
    pub fn clean_up_tree(&self, graph: &mut VoronoiGraph<T>) -> TopologyResult<Vec<bool>> {
        let mut done = vec![false; graph.edges.len()];
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(n) = stack.pop() {
            let (edge, flipped) = match self.nodes[n].kind {
                VNodeKind::Data { .. } => continue,
                VNodeKind::Edge { edge, flipped } => (edge, flipped),
            };

            let e = &mut graph.edges[edge];
            while e.vertex_b.is_unknown() {
                e.add_vertex(Vector2::infinite())?;
            }
            if flipped {
                std::mem::swap(&mut e.left_data, &mut e.right_data);
            }
            done[edge] = true;

            stack.extend(self.nodes[n].right);
            stack.extend(self.nodes[n].left);
        }

        Ok(done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn data_events_build_ordered_arcs() {
        let mut beachline = Beachline::new(0.0);
        let mut graph = VoronoiGraph::new();
        beachline
            .process_data_event(vec2(0.0, 0.0), &mut graph, 0.0)
            .unwrap();
        let check = beachline
            .process_data_event(vec2(1.0, 2.0), &mut graph, 2.0)
            .unwrap();
        assert_eq!(check.len(), 3);
        assert_eq!(graph.edges.len(), 1);

        // arcs left to right: (0,0), (1,2), (0,0)
        let first = check[0];
        let middle = beachline.right_data_node(first).unwrap();
        let last = beachline.right_data_node(middle).unwrap();
        assert_eq!(beachline.data_point(middle), vec2(1.0, 2.0));
        assert_eq!(beachline.data_point(last), vec2(0.0, 0.0));
        assert_eq!(beachline.right_data_node(last), None);
        assert_eq!(beachline.left_data_node(first), None);
        assert_eq!(beachline.left_data_node(middle), Some(first));
    }

    #[test]
    fn equal_y_sites_split_left_right() {
        let mut beachline = Beachline::new(0.0);
        let mut graph = VoronoiGraph::new();
        beachline
            .process_data_event(vec2(2.0, 0.0), &mut graph, 0.0)
            .unwrap();
        let check = beachline
            .process_data_event(vec2(0.0, 0.0), &mut graph, 0.0)
            .unwrap();
        assert_eq!(check.len(), 2);
        assert_eq!(beachline.data_point(check[0]), vec2(0.0, 0.0));
        assert_eq!(beachline.data_point(check[1]), vec2(2.0, 0.0));
    }
}
