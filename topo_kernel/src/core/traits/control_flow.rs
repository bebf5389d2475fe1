use static_aabb2d_index as aabb_index;

/// Trait for control flow inside visiting methods.
///
/// Spatial index queries ([crate::simplify::Quadtree::visit_query] and the static segment index
/// used for noding) take visitor closures that return a [ControlFlow] value so a caller can stop
/// as soon as it has found what it is looking for.
///
/// # Examples
///
/// ```
/// # use topo_kernel::core::*;
/// # use topo_kernel::geometry::Envelope;
/// # use topo_kernel::simplify::Quadtree;
/// let mut tree = Quadtree::new();
/// tree.insert(Envelope::new(0.0, 0.0, 1.0, 1.0), 0usize);
/// tree.insert(Envelope::new(0.5, 0.5, 2.0, 2.0), 1usize);
///
/// let mut visited = 0;
/// tree.visit_query(&Envelope::new(0.0, 0.0, 2.0, 2.0), &mut |_item: &usize| {
///     visited += 1;
///     Control::Break(())
/// });
/// assert_eq!(visited, 1);
/// ```
pub trait ControlFlow {
    /// Constructs state indicating to continue iteration/visiting.
    fn continuing() -> Self;

    /// Returns `true` if control flow should break/stop iteration.
    fn should_break(&self) -> bool;
}

impl<C> ControlFlow for C
where
    C: aabb_index::ControlFlow,
{
    #[inline]
    fn continuing() -> Self {
        C::continuing()
    }

    #[inline]
    fn should_break(&self) -> bool {
        self.should_break()
    }
}
