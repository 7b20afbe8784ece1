#![allow(dead_code)]

use std::sync::Arc;

use shortlink::registry::CodeRegistry;
use shortlink::state::AppState;

pub const TEST_HOST: &str = "sho.rt";

pub fn create_test_state(max_capacity: usize, code_length: usize) -> AppState {
    let registry = Arc::new(CodeRegistry::new(max_capacity, code_length));
    AppState::new(registry, TEST_HOST)
}

pub fn default_test_state() -> AppState {
    create_test_state(10_000, 6)
}
