// Library exports for integration tests and reusable components

pub mod config;
pub mod player;
pub mod ui;

// Test support (unit tests, or integration tests with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
