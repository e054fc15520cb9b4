//! citydb-cli
//! ==========
//!
//! Command-line interface for the `citydb-core` city store.
//!
//! This crate primarily provides a binary (`citydb`). The library target
//! carries only this overview.
//!
//! Basic usage:
//!
//! ```text
//! citydb --help
//! citydb stats
//! citydb city 524901
//! citydb compare Москва Владивосток
//! citydb cities --page 2
//! citydb suggest сам
//! citydb serve --port 8000
//! ```
//!
//! For programmatic access use the `citydb-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
