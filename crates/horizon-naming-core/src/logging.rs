//! Logging facilities for Horizon Naming.
//!
//! Horizon Naming uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application
//! or test harness:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_naming=debug")
//!     .init();
//! ```
//!
//! Naming failures (objects that cannot be given a path) are reported at
//! `error` level. Failed path resolutions are reported at `debug` level, since
//! callers receive the full diagnostic report in the returned error.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core object tree target.
    pub const OBJECT: &str = "horizon_naming_core::object";
    /// Path construction (object to path) target.
    pub const NAMING: &str = "horizon_naming::path";
    /// Path resolution (path to object) target.
    pub const RESOLVE: &str = "horizon_naming::resolve";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_naming::config";
}
