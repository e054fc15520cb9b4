// crates/citydb-core/src/lib.rs

//! citydb-core
//! ===========
//!
//! In-memory store and query engine for colon-delimited city extracts
//! (`geonameid:name:latitude:longitude:population:timezone:utc_offset`).
//!
//! ```rust
//! use citydb_core::prelude::*;
//!
//! let (store, _report) = CityStore::from_lines([
//!     "524901:Москва:55.75222:37.61556:10381222:Europe/Moscow:3",
//!     "2013348:Владивосток:43.10562:131.87353:587022:Asia/Vladivostok:10",
//! ]);
//!
//! let cmp = store.compare_cities("Москва", "Владивосток").unwrap();
//! assert_eq!(cmp.northern, Northern::City1);
//! assert_eq!(cmp.hours_difference(), Some(7));
//!
//! assert_eq!(store.suggest_by_prefix("вла"), ["Владивосток"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api; // JSON views
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod query;
pub mod store;
pub mod traits;

pub mod prelude;

// Re-exports
pub use crate::error::{CityDbError, QueryError, Result};
pub use crate::loader::{CityCatalog, LoadMode};
pub use crate::model::{City, StoreStats};
pub use crate::query::{Comparison, Northern, TimezoneRelation};
pub use crate::store::{CityStore, LoadReport};
pub use crate::traits::{CityQuery, NameMatch};
