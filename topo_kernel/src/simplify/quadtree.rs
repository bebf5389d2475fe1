use crate::core::traits::{ControlFlow, Real};
use crate::geometry::Envelope;

const MAX_DEPTH: usize = 24;

#[derive(Debug, Clone)]
struct QuadNode<T, I> {
    min_x: T,
    min_y: T,
    size: T,
    items: Vec<(Envelope<T>, I)>,
    children: [Option<usize>; 4],
}

impl<T, I> QuadNode<T, I>
where
    T: Real,
{
    fn new(min_x: T, min_y: T, size: T) -> Self {
        Self {
            min_x,
            min_y,
            size,
            items: Vec::new(),
            children: [None; 4],
        }
    }

    fn extent(&self) -> Envelope<T> {
        Envelope::new(
            self.min_x,
            self.min_y,
            self.min_x + self.size,
            self.min_y + self.size,
        )
    }

    /// Quadrant `q` as (min_x, min_y, size), bit 0 selects the right half and bit 1 the top.
    fn quadrant(&self, q: usize) -> (T, T, T) {
        let half = self.size * T::half();
        let x = if q & 1 == 0 { self.min_x } else { self.min_x + half };
        let y = if q & 2 == 0 { self.min_y } else { self.min_y + half };
        (x, y, half)
    }

    fn quadrant_containing(&self, envelope: &Envelope<T>) -> Option<usize> {
        (0..4).find(|&q| {
            let (x, y, s) = self.quadrant(q);
            Envelope::new(x, y, x + s, y + s).contains(envelope)
        })
    }
}

/// Dynamic quadtree of items keyed by envelope.
///
/// Unlike the static index used for noding, items may be inserted and removed at any time. The
/// root square grows (doubling) to cover items outside of it. An item is stored in the deepest
/// node whose square fully contains its envelope.
#[derive(Debug, Clone)]
pub struct Quadtree<I, T = f64> {
    nodes: Vec<QuadNode<T, I>>,
    root: Option<usize>,
    len: usize,
}

impl<I, T> Quadtree<I, T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of items held.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `item` under `envelope`. Null or non finite envelopes are ignored.
    pub fn insert(&mut self, envelope: Envelope<T>, item: I) {
        if envelope.is_null() || !is_finite(&envelope) {
            return;
        }

        let root = self.root_covering(&envelope);
        let mut current = root;
        let mut depth = 0;
        while depth < MAX_DEPTH {
            let q = match self.nodes[current].quadrant_containing(&envelope) {
                Some(q) => q,
                None => break,
            };
            current = match self.nodes[current].children[q] {
                Some(c) => c,
                None => {
                    let (x, y, s) = self.nodes[current].quadrant(q);
                    if s <= T::zero() {
                        break;
                    }
                    let c = self.push_node(QuadNode::new(x, y, s));
                    self.nodes[current].children[q] = Some(c);
                    c
                }
            };
            depth += 1;
        }

        self.nodes[current].items.push((envelope, item));
        self.len += 1;
    }

    /// Remove one item equal to `item` stored with an envelope equal to `envelope`. Returns
    /// true if an item was removed.
    pub fn remove(&mut self, envelope: &Envelope<T>, item: &I) -> bool
    where
        I: PartialEq,
    {
        // an envelope on a quadrant border may live under any node covering it
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(n) = stack.pop() {
            let node = &mut self.nodes[n];
            if !node.extent().contains(envelope) {
                continue;
            }

            if let Some(i) = node
                .items
                .iter()
                .position(|(e, it)| e == envelope && it == item)
            {
                node.items.swap_remove(i);
                self.len -= 1;
                return true;
            }

            stack.extend(node.children.iter().flatten());
        }

        false
    }

    /// Visit every item whose envelope intersects `query`, stopping early if `visitor` breaks.
    pub fn visit_query<F, C>(&self, query: &Envelope<T>, visitor: &mut F)
    where
        F: FnMut(&I) -> C,
        C: ControlFlow,
    {
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(n) = stack.pop() {
            let node = &self.nodes[n];
            if !node.extent().intersects(query) {
                continue;
            }

            for (envelope, item) in node.items.iter() {
                if envelope.intersects(query) && visitor(item).should_break() {
                    return;
                }
            }

            stack.extend(node.children.iter().rev().flatten());
        }
    }

    /// Items whose envelope intersects `query`.
    pub fn query(&self, query: &Envelope<T>) -> Vec<&I> {
        let mut results = Vec::new();
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(n) = stack.pop() {
            let node = &self.nodes[n];
            if !node.extent().intersects(query) {
                continue;
            }
            results.extend(
                node.items
                    .iter()
                    .filter(|(e, _)| e.intersects(query))
                    .map(|(_, item)| item),
            );
            stack.extend(node.children.iter().rev().flatten());
        }

        results
    }

    fn push_node(&mut self, node: QuadNode<T, I>) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Root node index, growing the root until it covers `envelope`.
    fn root_covering(&mut self, envelope: &Envelope<T>) -> usize {
        let mut root = match self.root {
            Some(r) => r,
            None => {
                let mut size = num_traits::real::Real::max(envelope.width(), envelope.height());
                if size <= T::zero() {
                    size = T::one();
                }
                let r = self.push_node(QuadNode::new(envelope.min_x, envelope.min_y, size));
                self.root = Some(r);
                return r;
            }
        };

        while !self.nodes[root].extent().contains(envelope) {
            let old = &self.nodes[root];
            let size = old.size;
            // grow toward any side the envelope sticks out of, low side first, the old root
            // becomes the opposite quadrant
            let (min_x, qx) = if envelope.min_x < old.min_x {
                (old.min_x - size, 1)
            } else {
                (old.min_x, 0)
            };
            let (min_y, qy) = if envelope.min_y < old.min_y {
                (old.min_y - size, 2)
            } else {
                (old.min_y, 0)
            };

            let mut grown = QuadNode::new(min_x, min_y, size + size);
            grown.children[qx | qy] = Some(root);
            root = self.push_node(grown);
        }

        self.root = Some(root);
        root
    }
}

impl<I, T> Default for Quadtree<I, T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

fn is_finite<T: Real>(envelope: &Envelope<T>) -> bool {
    [envelope.min_x, envelope.min_y, envelope.max_x, envelope.max_y]
        .iter()
        .all(|v| !v.is_nan() && !v.is_infinite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Control;

    fn env(x1: f64, y1: f64, x2: f64, y2: f64) -> Envelope<f64> {
        Envelope::new(x1, y1, x2, y2)
    }

    #[test]
    fn query_finds_intersecting_items() {
        let mut tree = Quadtree::new();
        tree.insert(env(0.0, 0.0, 1.0, 1.0), 0);
        tree.insert(env(5.0, 5.0, 6.0, 6.0), 1);
        tree.insert(env(-10.0, -10.0, -9.0, -9.0), 2);
        tree.insert(env(0.5, 0.5, 5.5, 5.5), 3);
        assert_eq!(tree.len(), 4);

        let mut found: Vec<i32> = tree
            .query(&env(0.9, 0.9, 1.1, 1.1))
            .into_iter()
            .copied()
            .collect();
        found.sort_unstable();
        assert_eq!(found, vec![0, 3]);

        let found = tree.query(&env(-9.5, -9.5, -9.5, -9.5));
        assert_eq!(found, vec![&2]);

        assert!(tree.query(&env(20.0, 20.0, 30.0, 30.0)).is_empty());
    }

    #[test]
    fn touching_envelopes_intersect() {
        let mut tree = Quadtree::new();
        tree.insert(env(0.0, 0.0, 1.0, 1.0), 'a');
        assert_eq!(tree.query(&env(1.0, 1.0, 2.0, 2.0)), vec![&'a']);
    }

    #[test]
    fn remove_items() {
        let mut tree = Quadtree::new();
        for i in 0..50 {
            let x = i as f64;
            tree.insert(env(x, x, x + 0.5, x + 0.5), i);
        }
        assert!(tree.remove(&env(10.0, 10.0, 10.5, 10.5), &10));
        assert!(!tree.remove(&env(10.0, 10.0, 10.5, 10.5), &10));
        assert!(!tree.remove(&env(11.0, 11.0, 11.5, 11.5), &12));
        assert_eq!(tree.len(), 49);
        assert!(tree.query(&env(10.1, 10.1, 10.2, 10.2)).is_empty());
        assert_eq!(tree.query(&env(11.1, 11.1, 11.2, 11.2)), vec![&11]);
    }

    #[test]
    fn root_grows_past_low_edges() {
        let mut tree = Quadtree::new();
        tree.insert(env(0.0, 0.0, 1.0, 1.0), 0);
        // sticks out left while its center is right of the root
        tree.insert(env(-0.5, 0.0, 5.0, 1.0), 1);
        // sticks out below while its center is above the root
        tree.insert(env(0.0, -0.5, 1.0, 7.0), 2);
        // sticks out on every side
        tree.insert(env(-20.0, -20.0, 20.0, 20.0), 3);
        assert_eq!(tree.len(), 4);

        let mut found: Vec<i32> = tree
            .query(&env(-0.4, 0.5, -0.4, 0.5))
            .into_iter()
            .copied()
            .collect();
        found.sort_unstable();
        assert_eq!(found, vec![1, 3]);

        let mut found: Vec<i32> = tree
            .query(&env(0.5, -0.4, 0.5, -0.4))
            .into_iter()
            .copied()
            .collect();
        found.sort_unstable();
        assert_eq!(found, vec![2, 3]);

        assert!(tree.remove(&env(-0.5, 0.0, 5.0, 1.0), &1));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn point_envelopes() {
        let mut tree = Quadtree::new();
        tree.insert(env(3.0, 3.0, 3.0, 3.0), 0);
        tree.insert(env(3.0, 3.0, 3.0, 3.0), 1);
        assert_eq!(tree.query(&env(2.0, 2.0, 4.0, 4.0)).len(), 2);
        assert!(tree.remove(&env(3.0, 3.0, 3.0, 3.0), &1));
        assert_eq!(tree.query(&env(3.0, 3.0, 3.0, 3.0)), vec![&0]);
    }

    #[test]
    fn visit_stops_on_break() {
        let mut tree = Quadtree::new();
        for i in 0..10 {
            tree.insert(env(0.0, 0.0, 1.0, 1.0), i);
        }
        let mut count = 0;
        tree.visit_query(&env(0.0, 0.0, 1.0, 1.0), &mut |_: &i32| {
            count += 1;
            if count == 3 {
                Control::Break(())
            } else {
                Control::Continue
            }
        });
        assert_eq!(count, 3);
    }
}
