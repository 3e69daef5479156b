//! # Built-in handlers
//!
//! Small, self-contained handlers useful for demos and debugging.
//!
//! - [`LogWriter`]: records every delivery through `tracing` (demo/debug).

mod log;

pub use log::LogWriter;
