//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it owns config loading and, behind the `server` feature,
//! the application state, the slice extractor and the system endpoints.
//!
//! ## Config loading
//! ```rust,no_run
//! use ihub_kernel::config::load_config;
//! use ihub_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap_or_default();
//! assert!(cfg.server.port > 0);
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use ihub_domain as domain;
