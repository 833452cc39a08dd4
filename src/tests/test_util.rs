//! Shared helpers for unit and integration tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test logging once per process.
pub fn setup() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
