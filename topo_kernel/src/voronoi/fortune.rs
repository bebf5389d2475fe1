use super::{
    beachline::{Beachline, CircleEvent},
    event::{VEvent, VEventKind},
    math::sweep_eps,
    VoronoiGraph, VoronoiOptions,
};
use crate::core::{math::Vector2, traits::Real};
use crate::error::TopologyResult;
use crate::graph::CoordKey;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

/// Fortune's sweepline over the sites in increasing y.
///
/// Circle events are never removed from the queue when the beachline changes, they are marked
/// invalid and skipped when popped. `current_circles` maps each arc to its one scheduled event.
pub(crate) fn sweep<T>(points: &[Vector2<T>], options: &VoronoiOptions<T>) -> TopologyResult<VoronoiGraph<T>>
where
    T: Real,
{
    let mut graph = VoronoiGraph::new();
    graph.sites = dedup_sites(points, options.tolerance);

    let mut queue = BinaryHeap::with_capacity(graph.sites.len());
    let mut seq = 0usize;
    for &p in graph.sites.iter() {
        queue.push(VEvent {
            y: p.y,
            x: p.x,
            seq,
            kind: VEventKind::Data(p),
        });
        seq += 1;
    }

    let mut beachline = Beachline::new(options.tolerance);
    let mut circles: Vec<CircleEvent<T>> = Vec::new();
    let mut current_circles: HashMap<usize, usize> = HashMap::new();
    let mut stale_count = 0usize;

    while let Some(event) = queue.pop() {
        let ys = event.y;
        let check_list = match event.kind {
            VEventKind::Data(p) => beachline.process_data_event(p, &mut graph, ys)?,
            VEventKind::Circle(id) => {
                let circle = circles[id];
                if current_circles.get(&circle.node_n) == Some(&id) {
                    current_circles.remove(&circle.node_n);
                }
                if !circle.valid {
                    stale_count += 1;
                    continue;
                }
                beachline.process_circle_event(&circle, &mut graph)?
            }
        };

        for n in check_list {
            if let Some(old) = current_circles.remove(&n) {
                circles[old].valid = false;
            }

            if let Some(circle) = beachline.circle_check_data_node(n, ys)? {
                let id = circles.len();
                queue.push(VEvent {
                    y: circle.y,
                    x: circle.center.x,
                    seq,
                    kind: VEventKind::Circle(id),
                });
                seq += 1;
                circles.push(circle);
                current_circles.insert(n, id);
            }
        }

        // a new site inside a predicted circle breaks that circle
        if let VEventKind::Data(p) = event.kind {
            let eps = sweep_eps::<T>();
            for &id in current_circles.values() {
                let circle = &mut circles[id];
                let dist = p.distance(circle.center);
                let radius = circle.y - circle.center.y;
                if dist.fuzzy_lt_eps(radius, eps) {
                    circle.valid = false;
                }
            }
        }
    }

    log::debug!(
        "voronoi sweep: {} sites, {} edges, {} circle events ({} stale)",
        graph.sites.len(),
        graph.edges.len(),
        circles.len(),
        stale_count
    );

    if options.cleanup {
        clean_up(&beachline, &mut graph, options.tolerance)?;
    }
    dedup_vertices(&mut graph, options.tolerance);

    Ok(graph)
}

fn dedup_sites<T>(points: &[Vector2<T>], tolerance: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut sites: Vec<Vector2<T>> = Vec::with_capacity(points.len());
    if tolerance == T::zero() {
        let mut seen = BTreeMap::new();
        for &p in points.iter() {
            if seen.insert(CoordKey(p), ()).is_none() {
                sites.push(p);
            }
        }
        return sites;
    }

    let mut sorted: Vec<(usize, Vector2<T>)> = points.iter().copied().enumerate().collect();
    sorted.sort_by(|a, b| a.1.cmp_xy(&b.1));
    let mut keep = vec![false; points.len()];
    for (i, &(index, p)) in sorted.iter().enumerate() {
        // any earlier point within tolerance on x is a candidate duplicate
        let duplicate = sorted[..i]
            .iter()
            .rev()
            .take_while(|(_, q)| p.x - q.x <= tolerance)
            .any(|&(qi, q)| keep[qi] && q.fuzzy_eq_eps(p, tolerance));
        if !duplicate {
            keep[index] = true;
        }
    }

    for (i, &p) in points.iter().enumerate() {
        if keep[i] {
            sites.push(p);
        }
    }
    sites
}

/// Close open edges with the infinite sentinel and drop zero length edges, snapping the other
/// edges onto the surviving vertex so no gap is left behind.
fn clean_up<T>(beachline: &Beachline<T>, graph: &mut VoronoiGraph<T>, tolerance: T) -> TopologyResult<()>
where
    T: Real,
{
    let done = beachline.clean_up_tree(graph)?;
    let eps = sweep_eps::<T>();

    for (i, e) in graph.edges.iter_mut().enumerate() {
        if done[i] || !e.vertex_b.is_unknown() {
            continue;
        }

        while e.vertex_b.is_unknown() {
            e.add_vertex(Vector2::infinite())?;
        }
        if (e.left_data.y - e.right_data.y).abs() < eps && e.left_data.x < e.right_data.x {
            std::mem::swap(&mut e.left_data, &mut e.right_data);
        }
    }

    let mut minute = vec![false; graph.edges.len()];
    for i in 0..graph.edges.len() {
        let e = graph.edges[i];
        if e.is_partly_infinite() || !e.vertex_a.fuzzy_eq_eps(e.vertex_b, tolerance) {
            continue;
        }

        minute[i] = true;
        let v = e.vertex_a;
        for other in graph.edges.iter_mut() {
            if other.vertex_a.fuzzy_eq_eps(v, tolerance) {
                other.vertex_a = v;
            }
            if other.vertex_b.fuzzy_eq_eps(v, tolerance) {
                other.vertex_b = v;
            }
        }
    }

    let removed = minute.iter().filter(|&&m| m).count();
    if removed > 0 {
        log::trace!("voronoi clean up: removing {} zero length edges", removed);
        let mut i = 0;
        graph.edges.retain(|_| {
            let keep = !minute[i];
            i += 1;
            keep
        });
    }

    Ok(())
}

/// Keep one copy of coincident vertexes (within tolerance), in creation order.
fn dedup_vertices<T>(graph: &mut VoronoiGraph<T>, tolerance: T)
where
    T: Real,
{
    let mut unique: Vec<Vector2<T>> = Vec::with_capacity(graph.vertices.len());
    let mut seen = BTreeMap::new();
    for &v in graph.vertices.iter() {
        if tolerance == T::zero() {
            if seen.insert(CoordKey(v), ()).is_none() {
                unique.push(v);
            }
        } else if !unique.iter().any(|u| u.fuzzy_eq_eps(v, tolerance)) {
            unique.push(v);
        }
    }
    graph.vertices = unique;
}
