// crates/citydb-core/src/query.rs
use crate::error::QueryError;
use crate::model::City;
use crate::store::CityStore;
use crate::traits::{CityQuery, NameMatch};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which side of a comparison lies further north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Northern {
    City1,
    City2,
    /// Identical latitudes.
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimezoneRelation {
    Same,
    /// Different timezone identifiers; `hours` is `|offset1 - offset2|`
    /// and may be zero (e.g. `Europe/Moscow` vs `Europe/Volgograd`).
    Different { hours: u32 },
}

/// Result of [`CityQuery::compare_cities`].
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub city1: City,
    pub city2: City,
    pub northern: Northern,
    pub timezone: TimezoneRelation,
}

impl Comparison {
    fn between(city1: &City, city2: &City) -> Self {
        let northern = match city1.latitude.partial_cmp(&city2.latitude) {
            Some(Ordering::Greater) => Northern::City1,
            Some(Ordering::Less) => Northern::City2,
            _ => Northern::Tie,
        };

        let timezone = if city1.timezone == city2.timezone {
            TimezoneRelation::Same
        } else {
            TimezoneRelation::Different {
                hours: city1.utc_offset.abs_diff(city2.utc_offset),
            }
        };

        Self {
            city1: city1.clone(),
            city2: city2.clone(),
            northern,
            timezone,
        }
    }

    pub fn same_timezone(&self) -> bool {
        self.timezone == TimezoneRelation::Same
    }

    /// `None` when both cities share a timezone.
    pub fn hours_difference(&self) -> Option<u32> {
        match self.timezone {
            TimezoneRelation::Same => None,
            TimezoneRelation::Different { hours } => Some(hours),
        }
    }

    pub fn northern_city(&self) -> Option<&City> {
        match self.northern {
            Northern::City1 => Some(&self.city1),
            Northern::City2 => Some(&self.city2),
            Northern::Tie => None,
        }
    }

    /// The one-line prose verdict served to legacy text clients.
    ///
    /// ```text
    /// Москва (10381222 чел.) vs Владивосток (587022 чел.). Севернее: Москва. Временные зоны различаются. Разница во времени 7 ч.
    /// ```
    pub fn summary(&self) -> String {
        let northern = match self.northern_city() {
            Some(city) => city.name(),
            None => "оба города на одной широте",
        };
        let timezone = match self.timezone {
            TimezoneRelation::Same => "Временные зоны одинаковы.".to_string(),
            TimezoneRelation::Different { hours } => {
                format!("Временные зоны различаются. Разница во времени {hours} ч.")
            }
        };

        format!(
            "{} ({} чел.) vs {} ({} чел.). Севернее: {}. {}",
            self.city1.name(),
            self.city1.population(),
            self.city2.name(),
            self.city2.population(),
            northern,
            timezone
        )
    }
}

/// Prose shown to legacy text clients when a compared name is unknown.
pub fn not_found_message(name: &str) -> String {
    format!("Город {name} не найден в базе данных.")
}

impl CityStore {
    /// The most populous city called exactly `name`; the first one wins a tie.
    pub fn most_populous(&self, name: &str) -> Option<&City> {
        self.values()
            .iter()
            .filter(|city| city.is_named(name))
            .fold(None, |best: Option<&City>, city| match best {
                Some(b) if city.population <= b.population => Some(b),
                _ => Some(city),
            })
    }
}

impl CityQuery for CityStore {
    fn lookup_by_id(&self, id: &str) -> Result<&City, QueryError> {
        self.get(id).ok_or(QueryError::CityNotFound)
    }

    fn compare_cities(&self, name1: &str, name2: &str) -> Result<Comparison, QueryError> {
        let city1 = self
            .most_populous(name1)
            .ok_or_else(|| QueryError::NameNotFound(name1.to_string()))?;
        let city2 = self
            .most_populous(name2)
            .ok_or_else(|| QueryError::NameNotFound(name2.to_string()))?;

        Ok(Comparison::between(city1, city2))
    }

    fn list_cities(&self, page: i64, per_page: i64) -> Result<Vec<&City>, QueryError> {
        if page < 1 || per_page < 1 {
            return Err(QueryError::InvalidPagination { page, per_page });
        }

        let start = (page - 1)
            .checked_mul(per_page)
            .and_then(|s| usize::try_from(s).ok());
        let Some(start) = start else {
            return Ok(Vec::new());
        };
        let take = usize::try_from(per_page).unwrap_or(usize::MAX);

        Ok(self.values().iter().skip(start).take(take).collect())
    }

    fn suggest_by_prefix(&self, partial: &str) -> Vec<&str> {
        self.values()
            .iter()
            .filter(|city| city.name_starts_with(partial))
            .map(City::name)
            .collect()
    }
}
