use std::{ffi::CStr, ptr};
use topo_kernel::{assert_fuzzy_eq, core::traits::FuzzyEq};
use topo_kernel_ffi::*;

fn square(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<tk_point> {
    vec![
        tk_point::new(min_x, min_y),
        tk_point::new(min_x, max_y),
        tk_point::new(max_x, max_y),
        tk_point::new(max_x, min_y),
        tk_point::new(min_x, min_y),
    ]
}

fn create_polygon_geometry(shell: &[tk_point]) -> *mut tk_geometry {
    let mut result = ptr::null();
    unsafe {
        assert_eq!(tk_geometry_create(&mut result), 0);
        assert_eq!(
            tk_geometry_add_polygon(result as *mut _, shell.as_ptr(), shell.len() as u32),
            0
        );
    }
    result as *mut _
}

#[test]
fn geometry_data_manipulation() {
    let null_ptr = ptr::null_mut();
    let mut g = ptr::null();
    unsafe {
        assert_eq!(tk_geometry_create(&mut g), 0);
        let g = g as *mut tk_geometry;

        // no polygon to add the hole to
        let hole = square(1.0, 1.0, 2.0, 2.0);
        assert_eq!(tk_geometry_add_hole(g, hole.as_ptr(), hole.len() as u32), 2);
        assert_eq!(tk_geometry_add_hole(null_ptr, hole.as_ptr(), 0), 1);

        assert_eq!(tk_geometry_add_point(g, 5.0, 6.0), 0);
        assert_eq!(tk_geometry_add_point(null_ptr, 5.0, 6.0), 1);
        let line = [tk_point::new(0.0, 0.0), tk_point::new(3.0, 4.0)];
        assert_eq!(tk_geometry_add_line(g, line.as_ptr(), 2), 0);
        let shell = square(0.0, 0.0, 4.0, 4.0);
        assert_eq!(
            tk_geometry_add_polygon(g, shell.as_ptr(), shell.len() as u32),
            0
        );
        assert_eq!(tk_geometry_add_hole(g, hole.as_ptr(), hole.len() as u32), 0);

        let (mut points, mut lines, mut polygons) = (0u32, 0u32, 0u32);
        assert_eq!(
            tk_geometry_get_counts(g, &mut points, &mut lines, &mut polygons),
            0
        );
        assert_eq!((points, lines, polygons), (1, 1, 1));
        // null out parameters are skipped
        assert_eq!(
            tk_geometry_get_counts(g, ptr::null_mut(), ptr::null_mut(), &mut polygons),
            0
        );

        let mut point_out = [tk_point::new(0.0, 0.0)];
        assert_eq!(tk_geometry_get_point_data(g, point_out.as_mut_ptr()), 0);
        assert_eq!(point_out[0].x, 5.0);
        assert_eq!(point_out[0].y, 6.0);

        let mut count = 0u32;
        assert_eq!(tk_geometry_get_line_point_count(g, 0, &mut count), 0);
        assert_eq!(count, 2);
        assert_eq!(tk_geometry_get_line_point_count(g, 1, &mut count), 2);
        let mut line_out = [tk_point::new(0.0, 0.0); 2];
        assert_eq!(tk_geometry_get_line_point_data(g, 0, line_out.as_mut_ptr()), 0);
        assert_eq!(line_out[1].x, 3.0);
        assert_eq!(line_out[1].y, 4.0);

        assert_eq!(tk_geometry_get_polygon_hole_count(g, 0, &mut count), 0);
        assert_eq!(count, 1);
        assert_eq!(tk_geometry_get_polygon_hole_count(g, 1, &mut count), 2);
        assert_eq!(tk_geometry_get_ring_point_count(g, 0, 1, &mut count), 0);
        assert_eq!(count, 5);
        assert_eq!(tk_geometry_get_ring_point_count(g, 0, 2, &mut count), 2);
        let mut ring_out = [tk_point::new(0.0, 0.0); 5];
        assert_eq!(tk_geometry_get_ring_point_data(g, 0, 0, ring_out.as_mut_ptr()), 0);
        assert_eq!(ring_out[2].x, 4.0);
        assert_eq!(ring_out[2].y, 4.0);

        let mut area = f64::NAN;
        assert_eq!(tk_geometry_eval_area(g, &mut area), 0);
        assert_fuzzy_eq!(area, 15.0);
        let mut length = f64::NAN;
        assert_eq!(tk_geometry_eval_length(g, &mut length), 0);
        assert_fuzzy_eq!(length, 5.0 + 16.0 + 4.0);
        assert_eq!(tk_geometry_eval_length(null_ptr, &mut length), 1);

        tk_geometry_f(g);
    }
}

#[test]
fn overlay_squares() {
    let a = create_polygon_geometry(&square(0.0, 0.0, 1.0, 1.0));
    let b = create_polygon_geometry(&square(0.5, 0.5, 1.5, 1.5));
    unsafe {
        let mut options = tk_overlay_o { check_noding: 0 };
        assert_eq!(tk_overlay_o_init(&mut options), 0);
        assert_eq!(options.check_noding, 1);
        assert_eq!(tk_overlay_o_init(ptr::null_mut()), 1);

        let expected_areas = [0.25, 1.75, 0.75, 1.5];
        for (op, &expected) in expected_areas.iter().enumerate() {
            let mut result = ptr::null();
            assert_eq!(tk_overlay(a, b, op as u32, &options, &mut result), 0);
            let mut area = f64::NAN;
            assert_eq!(tk_geometry_eval_area(result, &mut area), 0);
            assert_fuzzy_eq!(area, expected);
            tk_geometry_f(result as *mut _);
        }

        // default options when null
        let mut result = ptr::null();
        assert_eq!(tk_overlay(a, b, 0, ptr::null(), &mut result), 0);
        tk_geometry_f(result as *mut _);

        assert_eq!(tk_overlay(a, b, 4, ptr::null(), &mut result), 2);
        assert_eq!(tk_overlay(ptr::null(), b, 0, ptr::null(), &mut result), 1);

        tk_geometry_f(a);
        tk_geometry_f(b);
    }
}

#[test]
fn voronoi_right_triangle() {
    let coords = [0.0, 0.0, 2.0, 0.0, 0.0, 2.0];
    unsafe {
        let mut options = tk_voronoi_o {
            tolerance: 1.0,
            cleanup: 0,
        };
        assert_eq!(tk_voronoi_o_init(&mut options), 0);
        assert_eq!(options.tolerance, 0.0);
        assert_eq!(options.cleanup, 1);

        let mut v = ptr::null();
        assert_eq!(
            tk_voronoi_compute(coords.as_ptr(), coords.len() as u32, &options, &mut v),
            0
        );

        let (mut edges, mut vertexes, mut sites) = (0u32, 0u32, 0u32);
        assert_eq!(tk_voronoi_get_counts(v, &mut edges, &mut vertexes, &mut sites), 0);
        assert_eq!((edges, vertexes, sites), (3, 1, 3));

        let mut vertex_out = [tk_point::new(0.0, 0.0)];
        assert_eq!(tk_voronoi_get_vertex_data(v, vertex_out.as_mut_ptr()), 0);
        assert_fuzzy_eq!(vertex_out[0].x, 1.0);
        assert_fuzzy_eq!(vertex_out[0].y, 1.0);

        let empty = tk_point::new(0.0, 0.0);
        let mut edge_out = [tk_voronoi_edge {
            left_site: empty,
            right_site: empty,
            vertex_a: empty,
            vertex_b: empty,
        }; 3];
        assert_eq!(tk_voronoi_get_edge_data(v, edge_out.as_mut_ptr()), 0);
        for e in edge_out.iter() {
            // one end at the circumcenter, the other at infinity
            let finite = [e.vertex_a, e.vertex_b]
                .iter()
                .filter(|p| p.x.is_finite())
                .count();
            assert_eq!(finite, 1);
        }

        tk_voronoi_f(v as *mut _);

        assert_eq!(tk_voronoi_compute(ptr::null(), 2, ptr::null(), &mut v), 1);
        assert_eq!(tk_voronoi_compute(ptr::null(), 0, ptr::null(), &mut v), 0);
        assert_eq!(tk_voronoi_get_counts(v, &mut edges, ptr::null_mut(), ptr::null_mut()), 0);
        assert_eq!(edges, 0);
        tk_voronoi_f(v as *mut _);
    }
}

#[test]
fn simplify_dp_collinear() {
    let pts = [
        tk_point::new(0.0, 0.0),
        tk_point::new(1.0, 0.0),
        tk_point::new(2.0, 0.0),
        tk_point::new(3.0, 0.0),
    ];
    unsafe {
        let mut result = ptr::null();
        assert_eq!(tk_simplify_dp(pts.as_ptr(), pts.len() as u32, 0.0, &mut result), 0);
        let mut count = 0u32;
        assert_eq!(tk_pointlist_get_count(result, &mut count), 0);
        assert_eq!(count, 2);
        let mut out = [tk_point::new(f64::NAN, f64::NAN); 2];
        assert_eq!(tk_pointlist_get_data(result, out.as_mut_ptr()), 0);
        assert_eq!(out[0].x, 0.0);
        assert_eq!(out[1].x, 3.0);
        tk_pointlist_f(result as *mut _);

        assert_eq!(tk_simplify_dp(ptr::null(), 3, 0.0, &mut result), 1);
        assert_eq!(tk_pointlist_get_count(ptr::null(), &mut count), 1);
    }
}

#[test]
fn simplify_lines_keeps_separation() {
    let mut g = ptr::null();
    unsafe {
        assert_eq!(tk_geometry_create(&mut g), 0);
        let g = g as *mut tk_geometry;
        let bump = [
            tk_point::new(0.0, 0.0),
            tk_point::new(5.0, 2.0),
            tk_point::new(10.0, 0.0),
        ];
        let blocker = [tk_point::new(5.0, -1.0), tk_point::new(5.0, 1.0)];
        assert_eq!(tk_geometry_add_line(g, bump.as_ptr(), 3), 0);
        assert_eq!(tk_geometry_add_line(g, blocker.as_ptr(), 2), 0);

        let mut result = ptr::null();
        assert_eq!(tk_simplify_lines(g, 5.0, &mut result), 0);
        let mut count = 0u32;
        assert_eq!(tk_geometry_get_line_point_count(result, 0, &mut count), 0);
        assert_eq!(count, 3);
        tk_geometry_f(result as *mut _);

        assert_eq!(tk_simplify_lines(ptr::null(), 5.0, &mut result), 1);
        tk_geometry_f(g);
    }
}

#[test]
fn last_error_roundtrip() {
    tk_clear_last_error();
    unsafe {
        let mut msg = ptr::null();
        assert_eq!(tk_get_last_error_msg(&mut msg), 1);

        error_handling::set_last_error("bad ring", "tk_overlay: at (1, 2)");
        assert_eq!(tk_get_last_error_msg(&mut msg), 0);
        assert_eq!(CStr::from_ptr(msg).to_str().unwrap(), "bad ring");
        let mut report = ptr::null();
        assert_eq!(tk_get_last_error_report(&mut report), 0);
        assert_eq!(
            CStr::from_ptr(report).to_str().unwrap(),
            "tk_overlay: at (1, 2)"
        );
    }
    tk_clear_last_error();
}
