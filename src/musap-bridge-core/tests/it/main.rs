//! Consolidated integration tests for musap-bridge-core.
//!
//! Kept in a single test binary so proptest suites do not run as separate
//! processes in parallel.

mod dispatch;
mod logging;
mod relay;
