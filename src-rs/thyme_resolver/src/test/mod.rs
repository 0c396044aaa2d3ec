//! Test utilities for the resolver.

pub mod provider;

/// Asserts that a resolution result is an error whose kind matches a pattern.
macro_rules! assert_resolution_error {
    ($result:expr, $($pattern:tt)+) => {
        match $result {
            Ok(resolved) => panic!("expected a resolution error, got {resolved:?}"),
            Err(error) => assert!(
                matches!(error.kind(), $($pattern)+),
                "unexpected resolution error {error:?}"
            ),
        }
    };
}

pub(crate) use assert_resolution_error;
