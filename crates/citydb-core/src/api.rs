// crates/citydb-core/src/api.rs

//! JSON views over the store's records.
//!
//! The field names here are the wire contract shared with existing clients
//! (`geonameid`, `utc_offset`, ...), kept separate from the domain types so
//! the two can evolve independently.

use crate::model::City;
use crate::query::{Comparison, Northern};
use serde::Serialize;

/// Full record, as returned by `GET /city/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct CityView<'a> {
    pub geonameid: &'a str,
    pub name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    pub timezone: &'a str,
    pub utc_offset: i32,
}

impl<'a> From<&'a City> for CityView<'a> {
    fn from(c: &'a City) -> Self {
        Self {
            geonameid: c.id(),
            name: c.name(),
            latitude: c.latitude(),
            longitude: c.longitude(),
            population: c.population(),
            timezone: c.timezone(),
            utc_offset: c.utc_offset(),
        }
    }
}

/// List entry for `GET /cities`. Omits `geonameid` and `utc_offset`.
#[derive(Debug, Clone, Serialize)]
pub struct CitySummaryView<'a> {
    pub name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    pub timezone: &'a str,
}

impl<'a> From<&'a City> for CitySummaryView<'a> {
    fn from(c: &'a City) -> Self {
        Self {
            name: c.name(),
            latitude: c.latitude(),
            longitude: c.longitude(),
            population: c.population(),
            timezone: c.timezone(),
        }
    }
}

/// Structured comparison result.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView<'a> {
    pub city1: CityView<'a>,
    pub city2: CityView<'a>,
    pub northern_city: Northern,
    pub same_timezone: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_difference: Option<u32>,
    pub summary: String,
}

impl<'a> From<&'a Comparison> for ComparisonView<'a> {
    fn from(cmp: &'a Comparison) -> Self {
        Self {
            city1: CityView::from(&cmp.city1),
            city2: CityView::from(&cmp.city2),
            northern_city: cmp.northern,
            same_timezone: cmp.same_timezone(),
            hours_difference: cmp.hours_difference(),
            summary: cmp.summary(),
        }
    }
}

/// In-band failure body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorView {
    pub error: String,
}

impl ErrorView {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
