// crates/citydb-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A single city record, as parsed from one line of the source file.
///
/// Numeric fields are parsed once at load time so that comparisons are
/// numeric rather than lexical. Records are never mutated after the store
/// is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// GeoNames identifier. Opaque, unique within a store.
    pub id: String,
    /// Display name. Always non-empty and purely alphabetic.
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    /// IANA timezone identifier, e.g. `Europe/Moscow`.
    pub timezone: String,
    /// Offset from UTC in whole hours.
    pub utc_offset: i32,
}

impl City {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn utc_offset(&self) -> i32 {
        self.utc_offset
    }
}

/// Simple aggregate statistics for a loaded store.
///
/// Returned by [`CityStore::stats`](crate::CityStore::stats); counts reflect
/// the materialized store after the name filter has been applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub cities: usize,
    pub timezones: usize,
}
