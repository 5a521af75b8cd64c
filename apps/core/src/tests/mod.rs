//! Test Module
//!
//! Comprehensive test suite for the LeadScout engine.
//!
//! ## Test Categories
//! - `engine_tests`: full-post analysis, scoring properties, suggestion flow
//! - `lexicon_tests`: override configuration loading and validation


use std::sync::Once;

static TRACING: Once = Once::new();

/// Opt-in log output while running tests (`RUST_LOG=debug cargo test`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
