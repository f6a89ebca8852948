//! Workspace-level test package for the dint crates.
//!
//! The interesting code lives in `crates/`; this package only hosts the
//! integration tests under `tests/`.
