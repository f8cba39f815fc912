#[macro_use]
mod macros;

pub mod fixtures;

pub use pretty_assertions::assert_eq;

/// Routes `log` output through the test harness. Safe to call from every
/// test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
