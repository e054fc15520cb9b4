// crates/citydb-core/src/store.rs
use crate::model::{City, StoreStats};
use crate::parser::{parse_line, Rejection};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Immutable in-memory index of parsed city records.
///
/// Records are kept in file order in a contiguous vector; a side map resolves
/// identifiers to positions. A duplicated id overwrites the earlier record's
/// values but keeps the earlier record's position.
#[derive(Clone, Debug, Default)]
pub struct CityStore {
    cities: Vec<City>,
    by_id: HashMap<String, usize>,
}

/// Outcome of building a store from raw lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Lines that produced a record (duplicates included).
    pub accepted: usize,
    /// Accepted lines whose id had already been seen.
    pub duplicates: usize,
    pub blank: usize,
    pub malformed: usize,
    pub invalid_name: usize,
    pub invalid_number: usize,
}

impl LoadReport {
    pub fn rejected(&self) -> usize {
        self.malformed + self.invalid_name + self.invalid_number
    }

    fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::Blank => self.blank += 1,
            Rejection::Malformed { .. } => self.malformed += 1,
            Rejection::InvalidName(_) => self.invalid_name += 1,
            Rejection::InvalidNumber { .. } => self.invalid_number += 1,
        }
    }
}

impl CityStore {
    /// Build a store from raw text lines, skipping anything the parser rejects.
    pub fn from_lines<I, S>(lines: I) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = CityStore::default();
        let mut report = LoadReport::default();

        for (lineno, line) in lines.into_iter().enumerate() {
            match parse_line(line.as_ref()) {
                Ok(city) => {
                    report.accepted += 1;
                    if store.insert(city) {
                        report.duplicates += 1;
                    }
                }
                Err(Rejection::Blank) => report.blank += 1,
                Err(rejection) => {
                    tracing::debug!(line = lineno + 1, reason = %rejection, "skipping record");
                    report.record(&rejection);
                }
            }
        }

        (store, report)
    }

    /// Insert or overwrite. Returns `true` if the id was already present.
    fn insert(&mut self, city: City) -> bool {
        match self.by_id.get(&city.id) {
            Some(&pos) => {
                self.cities[pos] = city;
                true
            }
            None => {
                self.by_id.insert(city.id.clone(), self.cities.len());
                self.cities.push(city);
                false
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&City> {
        self.by_id.get(id).map(|&pos| &self.cities[pos])
    }

    /// All cities in file order.
    pub fn values(&self) -> &[City] {
        &self.cities
    }

    /// Cities whose name satisfies `predicate`, in file order.
    pub fn filter_by_name<P>(&self, mut predicate: P) -> Vec<&City>
    where
        P: FnMut(&str) -> bool,
    {
        self.cities.iter().filter(|c| predicate(c.name())).collect()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        let timezones: HashSet<&str> = self.cities.iter().map(City::timezone).collect();
        StoreStats {
            cities: self.cities.len(),
            timezones: timezones.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: &[&str] = &[
        "1:Alpha:10.0:10.0:100:UTC:0",
        "2:Beta:20.0:20.0:200:UTC:0",
        "3:Gamma3:30.0:30.0:300:UTC:0",
        "",
        "4:Delta",
        "1:Alpha:11.0:11.0:150:Europe/Moscow:3",
        "5:Epsilon:50.0:50.0:x:UTC:0",
    ];

    #[test]
    fn builds_store_and_reports() {
        let (store, report) = CityStore::from_lines(LINES);
        assert_eq!(store.len(), 2);
        assert_eq!(
            report,
            LoadReport {
                accepted: 3,
                duplicates: 1,
                blank: 1,
                malformed: 1,
                invalid_name: 1,
                invalid_number: 1,
            }
        );
        assert_eq!(report.rejected(), 3);
    }

    #[test]
    fn duplicate_id_keeps_first_position_with_last_values() {
        let (store, _) = CityStore::from_lines(LINES);
        let names: Vec<&str> = store.values().iter().map(City::name).collect();
        assert_eq!(names, ["Alpha", "Beta"]);

        let alpha = store.get("1").unwrap();
        assert_eq!(alpha.population, 150);
        assert_eq!(alpha.timezone, "Europe/Moscow");
    }

    #[test]
    fn get_missing_is_none() {
        let (store, _) = CityStore::from_lines(LINES);
        assert!(store.get("3").is_none());
        assert!(store.get("").is_none());
    }

    #[test]
    fn filter_by_name_preserves_order() {
        let (store, _) = CityStore::from_lines(LINES);
        let hits: Vec<&str> = store
            .filter_by_name(|n| n.contains('a'))
            .into_iter()
            .map(City::id)
            .collect();
        assert_eq!(hits, ["1", "2"]);
    }

    #[test]
    fn stats_count_distinct_timezones() {
        let (store, _) = CityStore::from_lines(LINES);
        assert_eq!(
            store.stats(),
            StoreStats {
                cities: 2,
                timezones: 2
            }
        );
        assert!(CityStore::default().is_empty());
    }
}
