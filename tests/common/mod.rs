//! Common test utilities for integration tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod test_repo;

pub use test_repo::{TestRepo, jj_available};

/// Return early from a test when `jj` is not installed
#[macro_export]
macro_rules! skip_if_no_jj {
    () => {
        if !$crate::common::jj_available() {
            eprintln!("skipping: jj not installed");
            return;
        }
    };
}
