use topo_kernel::{
    core::traits::FuzzyEq,
    geometry::{Envelope, Geometry, Polygon},
};

/// Fuzzy compare envelopes
pub fn envelope_fuzzy_eq_eps(a: &Envelope<f64>, b: &Envelope<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a polygon for comparison in tests. Vertex counts are not
/// compared, noding may add vertexes along straight boundaries.
#[derive(Debug, Copy, Clone)]
pub struct PolygonProperties {
    pub hole_count: usize,
    pub area: f64,
    pub perimeter: f64,
    pub envelope: Envelope<f64>,
}

impl PolygonProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-6;

    pub fn new(
        hole_count: usize,
        area: f64,
        perimeter: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            hole_count,
            area,
            perimeter,
            envelope: Envelope::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_polygon(polygon: &Polygon<f64>) -> Self {
        Self {
            hole_count: polygon.holes.len(),
            area: polygon.area(),
            perimeter: polygon.perimeter(),
            envelope: polygon.envelope(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.hole_count == other.hole_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && self.perimeter.fuzzy_eq_eps(other.perimeter, eps)
            && envelope_fuzzy_eq_eps(&self.envelope, &other.envelope, eps)
    }
}

pub fn create_property_set(geometry: &Geometry<f64>) -> Vec<PolygonProperties> {
    geometry
        .polygons
        .iter()
        .map(PolygonProperties::from_polygon)
        .collect()
}

pub fn property_sets_match(
    result_set: &[PolygonProperties],
    expected_set: &[PolygonProperties],
) -> bool {
    let mut sets_match = true;
    if result_set.len() != expected_set.len() {
        sets_match = false;
    } else {
        // simple N^2 comparison, sets are always small
        for properties_expected in expected_set {
            let match_count = result_set
                .iter()
                .filter(|properties_result| {
                    properties_expected
                        .fuzzy_eq_eps(properties_result, PolygonProperties::PROP_CMP_EPS)
                })
                .count();

            if match_count != 1 {
                sets_match = false;
                break;
            }
        }
    }

    if !sets_match {
        eprintln!("result:\n{:?}", result_set);
        eprintln!("expected:\n{:?}", expected_set);
    }

    sets_match
}
