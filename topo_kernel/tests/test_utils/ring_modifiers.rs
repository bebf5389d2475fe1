use topo_kernel::{core::math::Vector2, geometry::Polygon};

/// Cycles the start of a closed ring forward by `n` positions, the ring stays closed.
pub fn cycle_ring_start_forward(ring: &[Vector2<f64>], n: usize) -> Vec<Vector2<f64>> {
    let open = &ring[..ring.len() - 1];
    assert!(n > 0, "cycling forward by 0 just returns the same ring");
    assert!(
        n < open.len(),
        "cycling forward by more than the ring length is unnecessary"
    );
    let mut result: Vec<_> = open.iter().cycle().skip(n).take(open.len()).copied().collect();
    result.push(result[0]);
    result
}

pub fn reverse_ring(ring: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    ring.iter().rev().copied().collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedRingState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

impl ModifiedRingState {
    pub fn new(inverted_direction: bool, cycle_position: usize) -> Self {
        Self {
            inverted_direction,
            cycle_position,
        }
    }
}

/// Set of polygons equal (as point sets) to an input polygon, differing only in shell
/// orientation and start vertex.
#[derive(Debug, Clone)]
pub struct ModifiedPolygonSet<'a> {
    pub input: &'a Polygon<f64>,
    pub invert_direction: bool,
    pub cycle_index_positions: bool,
}

impl<'a> ModifiedPolygonSet<'a> {
    pub fn new(input: &'a Polygon<f64>, invert_direction: bool, cycle_index_positions: bool) -> Self {
        Self {
            input,
            invert_direction,
            cycle_index_positions,
        }
    }

    fn with_shell(&self, shell: Vec<Vector2<f64>>) -> Polygon<f64> {
        Polygon::new(shell, self.input.holes.clone())
    }

    pub fn accept_closure<F>(&self, visitor: &mut F)
    where
        F: FnMut(Polygon<f64>, ModifiedRingState),
    {
        let shell = &self.input.shell;
        visitor(self.input.clone(), ModifiedRingState::new(false, 0));
        if self.invert_direction {
            visitor(
                self.with_shell(reverse_ring(shell)),
                ModifiedRingState::new(true, 0),
            );
        }

        if self.cycle_index_positions {
            for i in 1..shell.len() - 1 {
                visitor(
                    self.with_shell(cycle_ring_start_forward(shell, i)),
                    ModifiedRingState::new(false, i),
                );
            }

            if self.invert_direction {
                let inverted = reverse_ring(shell);
                for i in 1..shell.len() - 1 {
                    visitor(
                        self.with_shell(cycle_ring_start_forward(&inverted, i)),
                        ModifiedRingState::new(true, i),
                    );
                }
            }
        }
    }
}
