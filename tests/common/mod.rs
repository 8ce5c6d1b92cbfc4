//! Shared helpers for the integration tests

pub mod test_utils;

pub use test_utils::{create_test_csv, write_test_file, TempTestFile};
