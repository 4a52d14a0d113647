//! Harness crate for the workspace integration tests in `tests/`.
