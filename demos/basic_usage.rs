//! Basic usage example for citydb-rs
//!
//! Loads the bundled dataset and runs each of the four queries.

use citydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== citydb-rs Basic Usage ===\n");

    let store = CityStore::load()?;
    let stats = store.stats();
    println!("Loaded {} cities across {} timezones\n", stats.cities, stats.timezones);

    // Example 1: lookup by id
    println!("--- Example 1: Lookup by GeoNames id ---");
    for id in ["524901", "498817"] {
        match store.lookup_by_id(id) {
            Ok(city) => println!("  {id}: {} (pop. {})", city.name(), city.population()),
            Err(e) => println!("  {id}: {e}"),
        }
    }
    println!();

    // Example 2: comparison
    println!("--- Example 2: Compare two cities ---");
    match store.compare_cities("Москва", "Владивосток") {
        Ok(cmp) => {
            println!("  {}", cmp.summary());
            println!("  northern: {:?}, same timezone: {}", cmp.northern, cmp.same_timezone());
        }
        Err(e) => println!("  {e}"),
    }
    println!();

    // Example 3: pagination
    println!("--- Example 3: Second page, 3 per page ---");
    if let Ok(page) = store.list_cities(2, 3) {
        for city in page {
            println!("  {} [{}]", city.name(), city.timezone());
        }
    }
    println!();

    // Example 4: suggestions
    println!("--- Example 4: Names starting with \"са\" ---");
    for name in store.suggest_by_prefix("са") {
        println!("  {name}");
    }

    Ok(())
}
