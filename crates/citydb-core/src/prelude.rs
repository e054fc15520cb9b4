// crates/citydb-core/src/prelude.rs
pub use crate::api::{CitySummaryView, CityView, ComparisonView, ErrorView};
pub use crate::error::{CityDbError, QueryError, Result};
pub use crate::loader::{CityCatalog, LoadMode};
pub use crate::model::{City, StoreStats};
pub use crate::query::{Comparison, Northern, TimezoneRelation};
pub use crate::store::{CityStore, LoadReport};
pub use crate::traits::{CityQuery, NameMatch};
