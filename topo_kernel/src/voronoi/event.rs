use crate::core::{math::Vector2, traits::Real};
use std::cmp::Ordering;

/// Sweep event payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum VEventKind<T = f64> {
    /// An input site reached by the sweep.
    Data(Vector2<T>),
    /// Index of a predicted circle event.
    Circle(usize),
}

/// Priority queue entry ordered by `y` then `x`, smallest first when held in a
/// [std::collections::BinaryHeap].
#[derive(Debug, Copy, Clone)]
pub struct VEvent<T = f64> {
    pub y: T,
    pub x: T,
    /// Insertion sequence number, keeps the pop order deterministic for equal positions.
    pub seq: usize,
    pub kind: VEventKind<T>,
}

impl<T> VEvent<T>
where
    T: Real,
{
    fn cmp_position(&self, other: &Self) -> Ordering {
        self.y
            .partial_cmp(&other.y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.x.partial_cmp(&other.x).unwrap_or(Ordering::Equal))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<T: Real> PartialEq for VEvent<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Real> Eq for VEvent<T> {}

impl<T: Real> PartialOrd for VEvent<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Real> Ord for VEvent<T> {
    // reversed so the max heap pops the lowest position first
    fn cmp(&self, other: &Self) -> Ordering {
        other.cmp_position(self)
    }
}
