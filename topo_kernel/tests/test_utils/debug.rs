use topo_kernel::geometry::Geometry;

/// Helper function to create json string from a geometry to be used for debugging.
pub fn to_debug_json_str(geometry: &Geometry) -> String {
    let coords = |pts: &[topo_kernel::core::math::Vector2]| {
        pts.iter()
            .map(|p| format!("[{}, {}]", p.x, p.y))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let polygons = geometry
        .polygons
        .iter()
        .map(|poly| {
            poly.rings()
                .map(|r| format!("[{}]", coords(r)))
                .collect::<Vec<_>>()
                .join(",\n            ")
        })
        .map(|rings| format!("[\n            {}\n        ]", rings))
        .collect::<Vec<_>>()
        .join(",\n        ");

    format!(
        r#"
{{
    "points": [{}],
    "lines": [
        {}
    ],
    "polygons": [
        {}
    ]
}}
"#,
        coords(&geometry.points),
        geometry
            .lines
            .iter()
            .map(|l| format!("[{}]", coords(&l.coords)))
            .collect::<Vec<_>>()
            .join(",\n        "),
        polygons
    )
}
