//! citydb-rs
//! =========
//!
//! Workspace facade. Re-exports [`citydb_core`] so the demos under `demos/`
//! can be run from the repository root:
//!
//! ```text
//! cargo run --example basic_usage
//! ```
//!
//! The HTTP server lives in `crates/citydb-server`, the command-line tool in
//! `crates/citydb-cli`.

pub use citydb_core::*;
