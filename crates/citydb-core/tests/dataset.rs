//! Query behaviour against the bundled `data/RU.txt` extract.

use citydb_core::prelude::*;
use std::io::Write;

fn bundled() -> std::sync::Arc<CityStore> {
    CityStore::load().expect("bundled dataset should load")
}

#[test]
fn numeric_names_never_reach_the_store() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1:City1:10:10:10:UTC:0").unwrap();
    writeln!(file, "2:City:10:10:10:UTC:0").unwrap();
    file.flush().unwrap();

    let store = CityStore::load_from_path(file.path()).unwrap();
    assert!(store.get("1").is_none());
    assert_eq!(store.suggest_by_prefix(""), ["City"]);
}

#[test]
fn lookup_of_absent_id_is_not_found() {
    let store = bundled();
    assert_eq!(store.lookup_by_id("nope"), Err(QueryError::CityNotFound));
    assert_eq!(store.lookup_by_id("524901").unwrap().name(), "Москва");
}

#[test]
fn moscow_versus_vladivostok() {
    let store = bundled();
    let cmp = store.compare_cities("Москва", "Владивосток").unwrap();

    assert_eq!(cmp.city1.id(), "524901", "the most populous Москва wins");
    assert_eq!(cmp.northern, Northern::City1);
    assert!(!cmp.same_timezone());
    assert_eq!(
        cmp.hours_difference(),
        Some(cmp.city1.utc_offset().abs_diff(cmp.city2.utc_offset()))
    );
    assert_eq!(cmp.hours_difference(), Some(7));
}

#[test]
fn pages_are_contiguous_and_disjoint() {
    let store = bundled();
    let first = store.list_cities(1, 5).unwrap();
    let second = store.list_cities(2, 5).unwrap();
    let both = store.list_cities(1, 10).unwrap();

    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 5);
    assert!(first.iter().all(|c| !second.contains(c)));
    assert_eq!([first, second].concat(), both);
}

#[test]
fn page_past_the_end_is_empty() {
    let store = bundled();
    let last = (store.len() as i64) + 1;
    assert!(store.list_cities(last, 1).unwrap().is_empty());
    assert!(store.list_cities(1000, 5).unwrap().is_empty());
}

#[test]
fn empty_prefix_lists_every_name() {
    let store = bundled();
    let all: Vec<&str> = store.values().iter().map(City::name).collect();
    assert_eq!(store.suggest_by_prefix(""), all);
}

#[test]
fn prefix_suggestions_ignore_case() {
    let store = bundled();
    let expected = ["Сандово", "Сангар"];
    assert_eq!(store.suggest_by_prefix("сан"), expected);
    assert_eq!(store.suggest_by_prefix("САН"), expected);
    assert_eq!(store.suggest_by_prefix("Сан"), expected);
    // Hyphenated names are dropped at load time.
    assert!(!store.suggest_by_prefix("сан").contains(&"Санкт-Петербург"));
}

#[test]
fn reloading_an_unchanged_source_is_stable() {
    let path = CityStore::default_dataset_path();
    let a = CityStore::load_from_path(&path).unwrap();
    let b = CityStore::load_from_path(&path).unwrap();

    assert_eq!(a.values(), b.values());
    assert_eq!(
        a.compare_cities("Омск", "Якутск").unwrap(),
        b.compare_cities("Омск", "Якутск").unwrap()
    );
    assert_eq!(a.list_cities(2, 7).unwrap(), b.list_cities(2, 7).unwrap());
    assert_eq!(a.suggest_by_prefix("с"), b.suggest_by_prefix("с"));
}
