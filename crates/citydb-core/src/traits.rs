// crates/citydb-core/src/traits.rs
use crate::error::QueryError;
use crate::model::City;
use crate::query::Comparison;

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`]: exact, case-sensitive equality
/// - [`NameMatch::name_starts_with`]: case-insensitive prefix match
///
/// # Examples
/// ```rust
/// use citydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Саратов").is_named("Саратов"));
/// assert!(!Place("Саратов").is_named("саратов"));
/// assert!(Place("Саратов").name_starts_with("САР"));
/// assert!(Place("Саратов").name_starts_with(""));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_str() == q
    }

    /// Case-insensitive prefix match. An empty `prefix` matches everything.
    #[inline]
    fn name_starts_with(&self, prefix: &str) -> bool {
        self.name_str()
            .to_lowercase()
            .starts_with(&prefix.to_lowercase())
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// The query operations available on a city store.
pub trait CityQuery {
    /// Find a city by its GeoNames identifier.
    fn lookup_by_id(&self, id: &str) -> Result<&City, QueryError>;

    /// Compare the most populous city named `name1` with the most populous
    /// city named `name2`.
    ///
    /// `name1` is resolved first, so when both are missing the error names
    /// `name1`.
    fn compare_cities(&self, name1: &str, name2: &str) -> Result<Comparison, QueryError>;

    /// One page of cities in file order. `page` is 1-indexed.
    ///
    /// Pages past the end are empty; `page < 1` or `per_page < 1` is an
    /// error.
    fn list_cities(&self, page: i64, per_page: i64) -> Result<Vec<&City>, QueryError>;

    /// Names starting with `partial`, case-insensitively, in file order.
    fn suggest_by_prefix(&self, partial: &str) -> Vec<&str>;
}
