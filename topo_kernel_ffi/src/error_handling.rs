use std::{cell::RefCell, ffi::CString};
use topo_kernel::error::TopologyError;

/// Holds last error information data.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
    /// Name of the function that failed followed by the coordinate of the violation if known.
    pub error_report_data: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString, error_report_data: CString) -> Self {
        LastErrorData {
            error_msg,
            error_report_data,
        }
    }
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = const { RefCell::new(None) });

/// Set last error information.
///
/// `error_msg` and `error_report` are turned into CStrings from bytes, interior nulls cause the
/// string to be replaced by an empty one.
pub fn set_last_error<T: Into<Vec<u8>>>(error_msg: T, error_report: T) {
    let msg = CString::new(error_msg).unwrap_or_default();
    let report = CString::new(error_report).unwrap_or_default();

    LAST_ERROR.with(|last_result| {
        *last_result.borrow_mut() = Some(LastErrorData::new(msg, report));
    });
}

/// Record a [TopologyError] raised by `function` as the last error.
pub fn set_topology_error(function: &str, err: &TopologyError) {
    let report = match err.coordinate() {
        Some(at) => format!("{}: at ({}, {})", function, at.x, at.y),
        None => function.to_string(),
    };
    set_last_error(err.to_string(), report);
}

pub fn clear_last_error() {
    LAST_ERROR.with(|last_result| {
        *last_result.borrow_mut() = None;
    });
}
