use crate::algorithm::{dense::DenseDijkstra, dijkstra::Dijkstra, ShortestPathAlgorithm};
use crate::graph::{directed::DirectedGraph, MutableGraph};
use crate::Error;
use libc::c_int;
use ordered_float::OrderedFloat;

pub const DSSSP_OK: c_int = 0;
pub const DSSSP_OUT_OF_RANGE: c_int = -1;
pub const DSSSP_INVALID_WEIGHT: c_int = -2;
pub const DSSSP_NULL_HANDLE: c_int = -3;
pub const DSSSP_BUFFER_TOO_SMALL: c_int = -4;
pub const DSSSP_INTERNAL: c_int = -5;

#[repr(C)]
pub struct FfiGraph {
    graph: DirectedGraph<OrderedFloat<f64>>,
}

fn status(error: &Error) -> c_int {
    match error {
        Error::OutOfRange { .. } => DSSSP_OUT_OF_RANGE,
        Error::InvalidWeight { .. } => DSSSP_INVALID_WEIGHT,
        Error::InvalidArgument(_) | Error::InvariantViolation(_) => DSSSP_INTERNAL,
    }
}

/// Creates a graph with `vertices` vertices; returns null if it cannot be allocated.
#[no_mangle]
pub extern "C" fn dsssp_graph_new(vertices: usize) -> *mut FfiGraph {
    match DirectedGraph::new(vertices) {
        Ok(graph) => Box::into_raw(Box::new(FfiGraph { graph })),
        Err(_) => std::ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn dsssp_graph_add_edge(g: *mut FfiGraph, from: usize, to: usize, weight: f64) -> c_int {
    let Some(g) = (unsafe { g.as_mut() }) else {
        return DSSSP_NULL_HANDLE;
    };
    match g.graph.add_edge(from, to, OrderedFloat(weight)) {
        Ok(()) => DSSSP_OK,
        Err(e) => status(&e),
    }
}

#[no_mangle]
pub extern "C" fn dsssp_graph_add_undirected_edge(g: *mut FfiGraph, u: usize, v: usize, weight: f64) -> c_int {
    let Some(g) = (unsafe { g.as_mut() }) else {
        return DSSSP_NULL_HANDLE;
    };
    match g.graph.add_undirected_edge(u, v, OrderedFloat(weight)) {
        Ok(()) => DSSSP_OK,
        Err(e) => status(&e),
    }
}

#[no_mangle]
pub extern "C" fn dsssp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Distances (`INFINITY` when unreachable) and predecessors (`SIZE_MAX` when none)
#[repr(C)]
pub struct FfiResult {
    pub distances: *mut f64,
    pub predecessors: *mut usize,
    pub len: usize,
}

#[no_mangle]
pub extern "C" fn dsssp_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            if !(*res).distances.is_null() {
                drop(Vec::from_raw_parts((*res).distances, (*res).len, (*res).len));
            }
            if !(*res).predecessors.is_null() {
                drop(Vec::from_raw_parts((*res).predecessors, (*res).len, (*res).len));
            }
            drop(Box::from_raw(res));
        }
    }
}

/// Computes shortest paths from `source`; `dense != 0` selects the O(V^2) variant.
/// Returns null on a null graph or an out-of-range source.
#[no_mangle]
pub extern "C" fn dsssp_compute(g: *const FfiGraph, source: usize, dense: c_int) -> *mut FfiResult {
    let Some(g) = (unsafe { g.as_ref() }) else {
        return std::ptr::null_mut();
    };
    let result = if dense != 0 {
        DenseDijkstra::new().compute_shortest_paths(&g.graph, source)
    } else {
        Dijkstra::new().compute_shortest_paths(&g.graph, source)
    };

    match result {
        Ok(result) => {
            let len = result.distances.len();
            // Exact-capacity boxed slices so from_raw_parts(len, len) is sound.
            let dist_vec: Box<[f64]> = result
                .distances
                .into_iter()
                .map(|o| o.map(|d| d.0).unwrap_or(f64::INFINITY))
                .collect();
            let pred_vec: Box<[usize]> = result
                .predecessors
                .into_iter()
                .map(|p| p.unwrap_or(usize::MAX))
                .collect();
            Box::into_raw(Box::new(FfiResult {
                distances: Box::into_raw(dist_vec) as *mut f64,
                predecessors: Box::into_raw(pred_vec) as *mut usize,
                len,
            }))
        }
        Err(_) => std::ptr::null_mut(),
    }
}

/// Writes the shortest path `source -> destination` into `out` (capacity `out_len`).
///
/// Returns the number of vertices written, 0 if there is no path, or a
/// negative status code.
#[no_mangle]
pub extern "C" fn dsssp_find_path(
    g: *const FfiGraph,
    source: usize,
    destination: usize,
    out: *mut usize,
    out_len: usize,
) -> isize {
    let Some(g) = (unsafe { g.as_ref() }) else {
        return DSSSP_NULL_HANDLE as isize;
    };
    match crate::find_path(&g.graph, source, destination) {
        Ok(None) => 0,
        Ok(Some(path)) => {
            if out.is_null() || out_len < path.vertices.len() {
                return DSSSP_BUFFER_TOO_SMALL as isize;
            }
            let out = unsafe { std::slice::from_raw_parts_mut(out, path.vertices.len()) };
            out.copy_from_slice(&path.vertices);
            path.vertices.len() as isize
        }
        Err(e) => status(&e) as isize,
    }
}
