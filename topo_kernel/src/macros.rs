/// Macro used for test assertions, both sides must implement
/// [FuzzyEq](crate::core::traits::FuzzyEq) (or provide `fuzzy_eq`/`fuzzy_eq_eps` methods).
///
/// # Examples
///
/// ```
/// # use topo_kernel::assert_fuzzy_eq;
/// # use topo_kernel::core::traits::FuzzyEq;
/// assert_fuzzy_eq!(0.1f64 + 0.2, 0.3);
/// assert_fuzzy_eq!(1.0f64, 1.05, 0.1);
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a [LineString](crate::geometry::LineString) from a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use topo_kernel::line_string;
/// # use topo_kernel::core::math::vec2;
/// let line = line_string![(0.0, 0.0), (2.0, 1.0)];
/// assert_eq!(line.coords, vec![vec2(0.0, 0.0), vec2(2.0, 1.0)]);
/// ```
#[macro_export]
macro_rules! line_string {
    ($( $x:expr ),* $(,)?) => {
        $crate::geometry::LineString::new(vec![$($crate::core::math::Vector2::new($x.0, $x.1)),*])
    };
}

/// Construct a polygon ring (`Vec` of coordinates) from a list of (x, y) tuples, the ring is
/// closed by repeating the first coordinate if it is not already closed.
///
/// # Examples
///
/// ```
/// # use topo_kernel::ring;
/// # use topo_kernel::core::math::vec2;
/// let r = ring![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
/// assert_eq!(r.len(), 5);
/// assert_eq!(r.first(), r.last());
/// ```
#[macro_export]
macro_rules! ring {
    ($( $x:expr ),* $(,)?) => {
        {
            let mut pts = vec![$($crate::core::math::Vector2::new($x.0, $x.1)),*];
            if let (Some(&first), Some(&last)) = (pts.first(), pts.last()) {
                if first != last {
                    pts.push(first);
                }
            }
            pts
        }
    };
}
