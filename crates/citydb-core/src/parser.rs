// crates/citydb-core/src/parser.rs

//! # Record Parser
//!
//! Turns one line of the colon-delimited source into a [`City`].
//!
//! Line layout (7 fields, fixed order):
//!
//! ```text
//! geonameid:name:latitude:longitude:population:timezone:utc_offset
//! 524901:Москва:55.75222:37.61556:10381222:Europe/Moscow:3
//! ```
//!
//! Lines that cannot be turned into a record yield a [`Rejection`]; callers
//! skip them and keep loading. Fields past the seventh are ignored.

use crate::model::City;
use std::fmt;
use std::str::FromStr;

/// Number of colon-separated fields a record must carry.
pub const FIELD_COUNT: usize = 7;

/// Field separator used by the source file.
pub const SEPARATOR: char = ':';

/// Why a line did not produce a [`City`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing but whitespace on the line.
    Blank,
    /// Fewer than [`FIELD_COUNT`] fields.
    Malformed { fields: usize },
    /// Name is empty or contains a non-alphabetic character
    /// (digits, spaces and hyphens all count).
    InvalidName(String),
    /// A numeric column did not parse, or parsed to a non-finite value.
    InvalidNumber { field: &'static str, value: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Blank => write!(f, "blank line"),
            Rejection::Malformed { fields } => {
                write!(f, "expected {FIELD_COUNT} fields, found {fields}")
            }
            Rejection::InvalidName(name) => write!(f, "non-alphabetic name {name:?}"),
            Rejection::InvalidNumber { field, value } => {
                write!(f, "invalid {field} value {value:?}")
            }
        }
    }
}

/// Returns `true` if `name` is non-empty and every character is alphabetic.
///
/// This is the dataset's admission rule: `Нижний Новгород` or
/// `Санкт-Петербург` are dropped. Lossy, but kept for compatibility with
/// existing clients.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(char::is_alphabetic)
}

/// Parse one source line into a [`City`].
///
/// # Examples
///
/// ```rust
/// use citydb_core::parser::{parse_line, Rejection};
///
/// let city = parse_line("524901:Москва:55.75222:37.61556:10381222:Europe/Moscow:3").unwrap();
/// assert_eq!(city.name(), "Москва");
/// assert_eq!(city.utc_offset(), 3);
///
/// assert!(matches!(
///     parse_line("1:City1:1:1:1:UTC:0"),
///     Err(Rejection::InvalidName(_))
/// ));
/// ```
pub fn parse_line(line: &str) -> Result<City, Rejection> {
    let line = line.trim();
    if line.is_empty() {
        return Err(Rejection::Blank);
    }

    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    if parts.len() < FIELD_COUNT {
        return Err(Rejection::Malformed {
            fields: parts.len(),
        });
    }

    let name = parts[1];
    if !is_valid_name(name) {
        return Err(Rejection::InvalidName(name.to_string()));
    }

    let latitude: f64 = parse_number("latitude", parts[2])?;
    let longitude: f64 = parse_number("longitude", parts[3])?;
    if !latitude.is_finite() || !longitude.is_finite() {
        let (field, value) = if latitude.is_finite() {
            ("longitude", parts[3])
        } else {
            ("latitude", parts[2])
        };
        return Err(Rejection::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }

    Ok(City {
        id: parts[0].to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        population: parse_number("population", parts[4])?,
        timezone: parts[5].to_string(),
        utc_offset: parse_number("utc_offset", parts[6])?,
    })
}

fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> Result<T, Rejection> {
    raw.trim().parse::<T>().map_err(|_| Rejection::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOSCOW: &str = "524901:Москва:55.75222:37.61556:10381222:Europe/Moscow:3";

    #[test]
    fn parses_a_full_record() {
        let city = parse_line(MOSCOW).unwrap();
        assert_eq!(city.id, "524901");
        assert_eq!(city.name, "Москва");
        assert_eq!(city.latitude, 55.75222);
        assert_eq!(city.longitude, 37.61556);
        assert_eq!(city.population, 10_381_222);
        assert_eq!(city.timezone, "Europe/Moscow");
        assert_eq!(city.utc_offset, 3);
    }

    #[test]
    fn parsing_is_idempotent() {
        assert_eq!(parse_line(MOSCOW), parse_line(MOSCOW));
    }

    #[test]
    fn trailing_newline_and_extra_fields_are_ignored() {
        let city = parse_line("1:Omsk:54.9:73.3:1129281:Asia/Omsk:6:extra\r\n").unwrap();
        assert_eq!(city.name, "Omsk");
        assert_eq!(city.utc_offset, 6);
    }

    #[test]
    fn negative_offsets_parse() {
        let city = parse_line("5:Adak:51.88:-176.65:300:America/Adak:-10").unwrap();
        assert_eq!(city.utc_offset, -10);
        assert_eq!(city.longitude, -176.65);
    }

    #[test]
    fn rejects_short_lines() {
        assert_eq!(
            parse_line("1:Omsk:54.9"),
            Err(Rejection::Malformed { fields: 3 })
        );
        assert_eq!(parse_line("   \n"), Err(Rejection::Blank));
    }

    #[test]
    fn rejects_non_alphabetic_names() {
        for name in ["City1", "Нижний Новгород", "Санкт-Петербург", ""] {
            let line = format!("1:{name}:1.0:1.0:10:UTC:0");
            assert_eq!(
                parse_line(&line),
                Err(Rejection::InvalidName(name.to_string())),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_bad_numbers() {
        assert_eq!(
            parse_line("1:Omsk:north:73.3:1:Asia/Omsk:6"),
            Err(Rejection::InvalidNumber {
                field: "latitude",
                value: "north".into()
            })
        );
        assert_eq!(
            parse_line("1:Omsk:NaN:73.3:1:Asia/Omsk:6"),
            Err(Rejection::InvalidNumber {
                field: "latitude",
                value: "NaN".into()
            })
        );
        assert_eq!(
            parse_line("1:Omsk:54.9:73.3:-5:Asia/Omsk:6"),
            Err(Rejection::InvalidNumber {
                field: "population",
                value: "-5".into()
            })
        );
        assert_eq!(
            parse_line("1:Omsk:54.9:73.3:5:Asia/Omsk:6.5"),
            Err(Rejection::InvalidNumber {
                field: "utc_offset",
                value: "6.5".into()
            })
        );
    }
}
