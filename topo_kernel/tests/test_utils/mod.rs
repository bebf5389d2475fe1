#![allow(dead_code)]

mod debug;
mod geometry_properties;
mod ring_modifiers;

pub use debug::*;
pub use geometry_properties::*;
pub use ring_modifiers::*;

/// Route `log` output of the crate to the test harness, set `RUST_LOG=topo_kernel=trace` to see
/// the stage by stage overlay and simplification output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
