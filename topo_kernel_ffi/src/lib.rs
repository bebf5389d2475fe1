//! This module contains the C foreign function interface for topo_kernel.
//!
//! All functions return an `i32` status code: 0 is success, -1 means a panic was caught, other
//! positive values are documented per function. Functions that can fail with a topology error
//! record the message with [tk_get_last_error_msg].
#![allow(non_camel_case_types)]
pub mod error_handling;

use core::slice;
use error_handling::{clear_last_error, set_topology_error, LAST_ERROR};
use std::{os::raw::c_char, panic};
use topo_kernel::{
    core::math::Vector2,
    geometry::{Geometry, LineString, Polygon},
    overlay::{OpCode, OverlayOp, OverlayOptions},
    simplify::{DouglasPeuckerLineSimplifier, TopologyPreservingSimplifier},
    voronoi::{compute_voronoi_graph_from_flat, VoronoiEdge, VoronoiGraph, VoronoiOptions},
};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct tk_point {
    pub x: f64,
    pub y: f64,
}

impl tk_point {
    pub fn new(x: f64, y: f64) -> Self {
        tk_point { x, y }
    }

    pub fn from_internal(v: Vector2<f64>) -> Self {
        tk_point::new(v.x, v.y)
    }

    pub fn to_internal(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Read `n` points from `points` (which may be null if `n` is 0).
unsafe fn read_points(points: *const tk_point, n: u32) -> Vec<Vector2<f64>> {
    if points.is_null() || n == 0 {
        return Vec::new();
    }

    slice::from_raw_parts(points, n as usize)
        .iter()
        .map(|p| p.to_internal())
        .collect()
}

/// Write all of `points` to the buffer `out`.
unsafe fn write_points(points: &[Vector2<f64>], out: *mut tk_point) {
    let buffer = slice::from_raw_parts_mut(out, points.len());
    for (i, &p) in points.iter().enumerate() {
        buffer[i] = tk_point::from_internal(p);
    }
}

fn count_u32(count: usize) -> u32 {
    // a count greater than u32::MAX would corrupt memory on the caller side, treat it as an
    // internal error (caught by ffi_catch_unwind)
    u32::try_from(count).unwrap()
}

/// Opaque type that wraps a [Geometry] (collection of points, lines and polygons).
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct tk_geometry(pub Geometry<f64>);

/// Opaque type that wraps a list of points, used for single line simplification results.
#[derive(Debug, Clone)]
pub struct tk_pointlist(pub Vec<Vector2<f64>>);

/// Opaque type that wraps a [VoronoiGraph].
#[derive(Debug, Clone)]
pub struct tk_voronoi(pub VoronoiGraph<f64>);

/// FFI representation of [VoronoiEdge]. Infinite vertexes have both components set to
/// positive infinity.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct tk_voronoi_edge {
    pub left_site: tk_point,
    pub right_site: tk_point,
    pub vertex_a: tk_point,
    pub vertex_b: tk_point,
}

impl tk_voronoi_edge {
    pub fn from_internal(e: &VoronoiEdge<f64>) -> Self {
        Self {
            left_site: tk_point::from_internal(e.left_data),
            right_site: tk_point::from_internal(e.right_data),
            vertex_a: tk_point::from_internal(e.vertex_a),
            vertex_b: tk_point::from_internal(e.vertex_b),
        }
    }
}

/// Get the message of the last topology error raised on the calling thread.
///
/// The string written to `msg` is owned by the library and stays valid until the next error is
/// recorded or [tk_clear_last_error] is called on the same thread.
///
/// ## Specific Error Codes
/// * 1 = no error has been recorded.
///
/// # Safety
///
/// `msg` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_get_last_error_msg(msg: *mut *const c_char) -> i32 {
    ffi_catch_unwind!({
        LAST_ERROR.with(|last| match last.borrow().as_ref() {
            Some(data) => {
                msg.write(data.error_msg.as_ptr());
                0
            }
            None => 1,
        })
    })
}

/// Get the report data (failing function and location) of the last topology error raised on the
/// calling thread, same lifetime rules as [tk_get_last_error_msg].
///
/// ## Specific Error Codes
/// * 1 = no error has been recorded.
///
/// # Safety
///
/// `report` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_get_last_error_report(report: *mut *const c_char) -> i32 {
    ffi_catch_unwind!({
        LAST_ERROR.with(|last| match last.borrow().as_ref() {
            Some(data) => {
                report.write(data.error_report_data.as_ptr());
                0
            }
            None => 1,
        })
    })
}

/// Clear the last error recorded on the calling thread.
#[no_mangle]
pub extern "C" fn tk_clear_last_error() {
    clear_last_error();
}

/// Create a new empty geometry object.
///
/// `geometry` is an out parameter to hold the created geometry.
///
/// # Safety
///
/// `geometry` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_create(geometry: *mut *const tk_geometry) -> i32 {
    ffi_catch_unwind!({
        geometry.write(Box::into_raw(Box::new(tk_geometry(Geometry::empty()))));
        0
    })
}

/// Free an existing [tk_geometry] object.
///
/// Nothing happens if `geometry` is null.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that was created by this library and
/// has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn tk_geometry_f(geometry: *mut tk_geometry) {
    if !geometry.is_null() {
        drop(Box::from_raw(geometry))
    }
}

/// Add a point to the geometry.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_add_point(geometry: *mut tk_geometry, x: f64, y: f64) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        (*geometry).0.points.push(Vector2::new(x, y));
        0
    })
}

/// Add a line string to the geometry from `n_points` points.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `points` may be null if `n_points` is 0 or must point to a valid contiguous buffer of
/// [tk_point] with length of at least `n_points`.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_add_line(
    geometry: *mut tk_geometry,
    points: *const tk_point,
    n_points: u32,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        (*geometry)
            .0
            .lines
            .push(LineString::new(read_points(points, n_points)));
        0
    })
}

/// Add a polygon (without holes) to the geometry, the shell must be closed (first point equal to
/// last point).
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `shell` may be null if `n_shell` is 0 or must point to a valid contiguous buffer of
/// [tk_point] with length of at least `n_shell`.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_add_polygon(
    geometry: *mut tk_geometry,
    shell: *const tk_point,
    n_shell: u32,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        (*geometry)
            .0
            .polygons
            .push(Polygon::new(read_points(shell, n_shell), Vec::new()));
        0
    })
}

/// Add a hole to the last polygon added to the geometry.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
/// * 2 = `geometry` has no polygons.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `hole` may be null if `n_hole` is 0 or must point to a valid contiguous buffer of
/// [tk_point] with length of at least `n_hole`.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_add_hole(
    geometry: *mut tk_geometry,
    hole: *const tk_point,
    n_hole: u32,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        match (*geometry).0.polygons.last_mut() {
            Some(polygon) => {
                polygon.holes.push(read_points(hole, n_hole));
                0
            }
            None => 2,
        }
    })
}

/// Get the number of points, lines and polygons of the geometry.
///
/// Any of the out parameters may be null in which case it is not written.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_get_counts(
    geometry: *const tk_geometry,
    point_count: *mut u32,
    line_count: *mut u32,
    polygon_count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        let g = &(*geometry).0;
        if !point_count.is_null() {
            point_count.write(count_u32(g.points.len()));
        }
        if !line_count.is_null() {
            line_count.write(count_u32(g.lines.len()));
        }
        if !polygon_count.is_null() {
            polygon_count.write(count_u32(g.polygons.len()));
        }
        0
    })
}

/// Fills the buffer given with the points of the geometry.
///
/// Use [tk_geometry_get_counts] to ensure the buffer given has adequate length.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `point_data` must point to a buffer that is large enough to hold all the points or a buffer
/// overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_get_point_data(
    geometry: *const tk_geometry,
    point_data: *mut tk_point,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        write_points(&(*geometry).0.points, point_data);
        0
    })
}

/// Get the point count of the line at `line_index`.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
/// * 2 = `line_index` is out of bounds.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_get_line_point_count(
    geometry: *const tk_geometry,
    line_index: u32,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        match (&(*geometry).0.lines).get(line_index as usize) {
            Some(line) => {
                count.write(count_u32(line.len()));
                0
            }
            None => 2,
        }
    })
}

/// Fills the buffer given with the points of the line at `line_index`.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
/// * 2 = `line_index` is out of bounds.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `point_data` must point to a buffer that is large enough to hold all the line points (see
/// [tk_geometry_get_line_point_count]).
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_get_line_point_data(
    geometry: *const tk_geometry,
    line_index: u32,
    point_data: *mut tk_point,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        match (&(*geometry).0.lines).get(line_index as usize) {
            Some(line) => {
                write_points(&line.coords, point_data);
                0
            }
            None => 2,
        }
    })
}

/// Get the hole count of the polygon at `polygon_index`.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
/// * 2 = `polygon_index` is out of bounds.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_get_polygon_hole_count(
    geometry: *const tk_geometry,
    polygon_index: u32,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        match (&(*geometry).0.polygons).get(polygon_index as usize) {
            Some(polygon) => {
                count.write(count_u32(polygon.holes.len()));
                0
            }
            None => 2,
        }
    })
}

fn polygon_ring(g: &Geometry<f64>, polygon_index: u32, ring_index: u32) -> Option<&[Vector2<f64>]> {
    let polygon = g.polygons.get(polygon_index as usize)?;
    if ring_index == 0 {
        Some(&polygon.shell)
    } else {
        polygon
            .holes
            .get(ring_index as usize - 1)
            .map(|h| h.as_slice())
    }
}

/// Get the point count of a polygon ring, `ring_index` 0 is the shell and `i + 1` is hole `i`.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
/// * 2 = `polygon_index` or `ring_index` is out of bounds.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_get_ring_point_count(
    geometry: *const tk_geometry,
    polygon_index: u32,
    ring_index: u32,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        match polygon_ring(&(*geometry).0, polygon_index, ring_index) {
            Some(ring) => {
                count.write(count_u32(ring.len()));
                0
            }
            None => 2,
        }
    })
}

/// Fills the buffer given with the points of a polygon ring, `ring_index` 0 is the shell and
/// `i + 1` is hole `i`.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
/// * 2 = `polygon_index` or `ring_index` is out of bounds.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `point_data` must point to a buffer that is large enough to hold all the ring points (see
/// [tk_geometry_get_ring_point_count]).
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_get_ring_point_data(
    geometry: *const tk_geometry,
    polygon_index: u32,
    ring_index: u32,
    point_data: *mut tk_point,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        match polygon_ring(&(*geometry).0, polygon_index, ring_index) {
            Some(ring) => {
                write_points(ring, point_data);
                0
            }
            None => 2,
        }
    })
}

/// Compute the total area of the polygons of the geometry.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `area` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_eval_area(geometry: *const tk_geometry, area: *mut f64) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        area.write((*geometry).0.area());
        0
    })
}

/// Compute the total length of the lines and polygon rings of the geometry.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `length` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_geometry_eval_length(
    geometry: *const tk_geometry,
    length: *mut f64,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        length.write((*geometry).0.length());
        0
    })
}

/// FFI representation of [OverlayOptions].
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct tk_overlay_o {
    pub check_noding: u8,
}

impl tk_overlay_o {
    pub fn to_internal(&self) -> OverlayOptions {
        OverlayOptions {
            check_noding: self.check_noding != 0,
        }
    }
}

impl Default for tk_overlay_o {
    fn default() -> Self {
        let d = OverlayOptions::default();
        Self {
            check_noding: d.check_noding as u8,
        }
    }
}

/// Write default option values to a [tk_overlay_o].
///
/// ## Specific Error Codes
/// * 1 = `options` is null.
///
/// # Safety
///
/// `options` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_overlay_o_init(options: *mut tk_overlay_o) -> i32 {
    ffi_catch_unwind!({
        if options.is_null() {
            return 1;
        }

        options.write(Default::default());
        0
    })
}

fn op_code_from_u32(i: u32) -> Option<OpCode> {
    match i {
        0 => Some(OpCode::Intersection),
        1 => Some(OpCode::Union),
        2 => Some(OpCode::Difference),
        3 => Some(OpCode::SymDifference),
        _ => None,
    }
}

/// Compute a boolean operation between geometry `a` and geometry `b`.
///
/// `op` is the operation: 0 = intersection, 1 = union, 2 = difference (a - b),
/// 3 = symmetric difference.
/// `options` may be null to use default options.
/// `result` is an out parameter to hold the resulting geometry.
///
/// ## Specific Error Codes
/// * 1 = `a` or `b` is null.
/// * 2 = `op` is not a valid value.
/// * 3 = topology error, see [tk_get_last_error_msg].
///
/// # Safety
///
/// `a` and `b` must be null or valid tk_geometry objects that have not been freed.
/// `options` must be null or point to a valid [tk_overlay_o].
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_overlay(
    a: *const tk_geometry,
    b: *const tk_geometry,
    op: u32,
    options: *const tk_overlay_o,
    result: *mut *const tk_geometry,
) -> i32 {
    ffi_catch_unwind!({
        if a.is_null() || b.is_null() {
            return 1;
        }

        let op = match op_code_from_u32(op) {
            Some(op) => op,
            None => return 2,
        };

        let options = options
            .as_ref()
            .map(|o| o.to_internal())
            .unwrap_or_default();

        match OverlayOp::new(&(*a).0, &(*b).0).compute(op, &options) {
            Ok(geometry) => {
                result.write(Box::into_raw(Box::new(tk_geometry(geometry))));
                0
            }
            Err(err) => {
                set_topology_error("tk_overlay", &err);
                3
            }
        }
    })
}

/// FFI representation of [VoronoiOptions].
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct tk_voronoi_o {
    pub tolerance: f64,
    pub cleanup: u8,
}

impl tk_voronoi_o {
    pub fn to_internal(&self) -> VoronoiOptions<f64> {
        VoronoiOptions {
            tolerance: self.tolerance,
            cleanup: self.cleanup != 0,
        }
    }
}

impl Default for tk_voronoi_o {
    fn default() -> Self {
        let d = VoronoiOptions::<f64>::default();
        Self {
            tolerance: d.tolerance,
            cleanup: d.cleanup as u8,
        }
    }
}

/// Write default option values to a [tk_voronoi_o].
///
/// ## Specific Error Codes
/// * 1 = `options` is null.
///
/// # Safety
///
/// `options` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_voronoi_o_init(options: *mut tk_voronoi_o) -> i32 {
    ffi_catch_unwind!({
        if options.is_null() {
            return 1;
        }

        options.write(Default::default());
        0
    })
}

/// Compute the voronoi graph of the points given as a flat `[x0, y0, x1, y1, ...]` array.
///
/// `n_coords` is the length of `coords`, a trailing odd value is ignored.
/// `options` may be null to use default options (exact site equality, cleanup enabled).
/// `result` is an out parameter to hold the created graph.
///
/// ## Specific Error Codes
/// * 1 = `coords` is null and `n_coords` is not 0.
/// * 3 = topology error, see [tk_get_last_error_msg].
///
/// # Safety
///
/// `coords` must point to a valid contiguous buffer of at least `n_coords` f64 values.
/// `options` must be null or point to a valid [tk_voronoi_o].
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_voronoi_compute(
    coords: *const f64,
    n_coords: u32,
    options: *const tk_voronoi_o,
    result: *mut *const tk_voronoi,
) -> i32 {
    ffi_catch_unwind!({
        if coords.is_null() && n_coords != 0 {
            return 1;
        }

        let data: &[f64] = if n_coords == 0 {
            &[]
        } else {
            slice::from_raw_parts(coords, n_coords as usize)
        };

        let options = options
            .as_ref()
            .map(|o| o.to_internal())
            .unwrap_or_default();

        match compute_voronoi_graph_from_flat(data, &options) {
            Ok(graph) => {
                result.write(Box::into_raw(Box::new(tk_voronoi(graph))));
                0
            }
            Err(err) => {
                set_topology_error("tk_voronoi_compute", &err);
                3
            }
        }
    })
}

/// Free an existing [tk_voronoi] object.
///
/// Nothing happens if `voronoi` is null.
///
/// # Safety
///
/// `voronoi` must be null or a valid tk_voronoi object that was created with
/// [tk_voronoi_compute] and has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn tk_voronoi_f(voronoi: *mut tk_voronoi) {
    if !voronoi.is_null() {
        drop(Box::from_raw(voronoi))
    }
}

/// Get the edge, finite vertex and (deduplicated) site counts of the voronoi graph.
///
/// Any of the out parameters may be null in which case it is not written.
///
/// ## Specific Error Codes
/// * 1 = `voronoi` is null.
///
/// # Safety
///
/// `voronoi` must be null or a valid tk_voronoi object that has not been freed.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_voronoi_get_counts(
    voronoi: *const tk_voronoi,
    edge_count: *mut u32,
    vertex_count: *mut u32,
    site_count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if voronoi.is_null() {
            return 1;
        }

        let g = &(*voronoi).0;
        if !edge_count.is_null() {
            edge_count.write(count_u32(g.edges.len()));
        }
        if !vertex_count.is_null() {
            vertex_count.write(count_u32(g.vertices.len()));
        }
        if !site_count.is_null() {
            site_count.write(count_u32(g.sites.len()));
        }
        0
    })
}

/// Fills the buffer given with the edges of the voronoi graph.
///
/// ## Specific Error Codes
/// * 1 = `voronoi` is null.
///
/// # Safety
///
/// `voronoi` must be null or a valid tk_voronoi object that has not been freed.
/// `edge_data` must point to a buffer that is large enough to hold all the edges (see
/// [tk_voronoi_get_counts]).
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_voronoi_get_edge_data(
    voronoi: *const tk_voronoi,
    edge_data: *mut tk_voronoi_edge,
) -> i32 {
    ffi_catch_unwind!({
        if voronoi.is_null() {
            return 1;
        }

        let edges = &(*voronoi).0.edges;
        let buffer = slice::from_raw_parts_mut(edge_data, edges.len());
        for (i, e) in edges.iter().enumerate() {
            buffer[i] = tk_voronoi_edge::from_internal(e);
        }
        0
    })
}

/// Fills the buffer given with the finite vertexes of the voronoi graph.
///
/// ## Specific Error Codes
/// * 1 = `voronoi` is null.
///
/// # Safety
///
/// `voronoi` must be null or a valid tk_voronoi object that has not been freed.
/// `vertex_data` must point to a buffer that is large enough to hold all the vertexes (see
/// [tk_voronoi_get_counts]).
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_voronoi_get_vertex_data(
    voronoi: *const tk_voronoi,
    vertex_data: *mut tk_point,
) -> i32 {
    ffi_catch_unwind!({
        if voronoi.is_null() {
            return 1;
        }

        write_points(&(*voronoi).0.vertices, vertex_data);
        0
    })
}

/// Simplify a single line with Douglas-Peucker, no topology is preserved.
///
/// `result` is an out parameter to hold the simplified points.
///
/// ## Specific Error Codes
/// * 1 = `points` is null and `n_points` is not 0.
///
/// # Safety
///
/// `points` may be null if `n_points` is 0 or must point to a valid contiguous buffer of
/// [tk_point] with length of at least `n_points`.
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_simplify_dp(
    points: *const tk_point,
    n_points: u32,
    tolerance: f64,
    result: *mut *const tk_pointlist,
) -> i32 {
    ffi_catch_unwind!({
        if points.is_null() && n_points != 0 {
            return 1;
        }

        let input = read_points(points, n_points);
        let simplified = DouglasPeuckerLineSimplifier::simplify(&input, tolerance);
        result.write(Box::into_raw(Box::new(tk_pointlist(simplified))));
        0
    })
}

/// Simplify all lines and polygon rings of `geometry` together without introducing new
/// intersections between them. Points are copied as is.
///
/// `result` is an out parameter to hold the simplified geometry.
///
/// ## Specific Error Codes
/// * 1 = `geometry` is null.
///
/// # Safety
///
/// `geometry` must be null or a valid tk_geometry object that has not been freed.
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_simplify_lines(
    geometry: *const tk_geometry,
    tolerance: f64,
    result: *mut *const tk_geometry,
) -> i32 {
    ffi_catch_unwind!({
        if geometry.is_null() {
            return 1;
        }

        let simplified = TopologyPreservingSimplifier::simplify(&(*geometry).0, tolerance);
        result.write(Box::into_raw(Box::new(tk_geometry(simplified))));
        0
    })
}

/// Free an existing [tk_pointlist] object.
///
/// Nothing happens if `pointlist` is null.
///
/// # Safety
///
/// `pointlist` must be null or a valid tk_pointlist object that was created by this library and
/// has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn tk_pointlist_f(pointlist: *mut tk_pointlist) {
    if !pointlist.is_null() {
        drop(Box::from_raw(pointlist))
    }
}

/// Get the number of points in the point list.
///
/// ## Specific Error Codes
/// * 1 = `pointlist` is null.
///
/// # Safety
///
/// `pointlist` must be null or a valid tk_pointlist object that has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_pointlist_get_count(
    pointlist: *const tk_pointlist,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if pointlist.is_null() {
            return 1;
        }

        count.write(count_u32((*pointlist).0.len()));
        0
    })
}

/// Fills the buffer given with the points of the point list.
///
/// ## Specific Error Codes
/// * 1 = `pointlist` is null.
///
/// # Safety
///
/// `pointlist` must be null or a valid tk_pointlist object that has not been freed.
/// `point_data` must point to a buffer that is large enough to hold all the points (see
/// [tk_pointlist_get_count]).
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn tk_pointlist_get_data(
    pointlist: *const tk_pointlist,
    point_data: *mut tk_point,
) -> i32 {
    ffi_catch_unwind!({
        if pointlist.is_null() {
            return 1;
        }

        write_points(&(*pointlist).0, point_data);
        0
    })
}
