use topo_kernel::{
    core::math::vec2,
    voronoi::{compute_voronoi_graph, compute_voronoi_graph_from_flat, VoronoiOptions},
};

fn main() {
    let sites = [
        vec2(0.0, 0.0),
        vec2(10.0, 1.0),
        vec2(3.0, 7.0),
        vec2(8.0, 9.0),
        vec2(4.5, 3.5),
    ];

    let graph = match compute_voronoi_graph(&sites, &VoronoiOptions::new()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("voronoi failed: {}", e);
            return;
        }
    };

    println!(
        "{} sites, {} edges, {} vertexes",
        graph.sites.len(),
        graph.edges.len(),
        graph.vertices.len()
    );

    for cell in graph.cells() {
        let bounded = cell
            .edges
            .iter()
            .all(|&e| !graph.edges[e].is_partly_infinite());
        println!(
            "  site ({}, {}): {} edges, {}",
            cell.site.x,
            cell.site.y,
            cell.edges.len(),
            if bounded { "bounded" } else { "unbounded" }
        );
    }

    // same input as a flat coordinate array with near duplicate sites merged
    let flat = [0.0, 0.0, 0.0, 1e-9, 2.0, 0.0, 0.0, 2.0];
    let options = VoronoiOptions {
        tolerance: 1e-6,
        cleanup: true,
    };
    if let Ok(g) = compute_voronoi_graph_from_flat(&flat, &options) {
        println!("flat input: {} sites after merging, vertexes {:?}", g.sites.len(), g.vertices);
    }
}
