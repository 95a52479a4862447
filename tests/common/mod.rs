//! Shared test setup.

/// Pick up `RUST_LOG` from a `.env` if there is one and route `log` output to the test
/// harness. Safe to call from every test.
pub fn init() {
    dotenv::dotenv().ok();
    let _ = env_logger::builder().is_test(true).try_init();
}
