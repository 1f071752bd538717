//! Device implementations
//!
//! Real hardware lives behind the driver traits in deployment-specific
//! crates; this module ships the mock rig used for tests and hardware-free
//! runs.

pub mod mock;
