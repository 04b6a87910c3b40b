//! Launch configuration.
//!
//! DateTime Clippy reads no configuration files. The only inputs are the
//! process arguments, which may replace the locale's pattern list.

pub mod app;

pub use app::AppConfig;
