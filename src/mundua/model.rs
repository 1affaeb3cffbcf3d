use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Visiting status of a country.
///
/// The serde names match the wire format the seed data and the persisted
/// store use (`"not visited"` with a space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum Status {
    #[serde(rename = "visited")]
    Visited,
    #[serde(rename = "planned")]
    Planned,
    #[default]
    #[serde(rename = "not visited", alias = "not-visited")]
    NotVisited,
}

impl Status {
    /// Whether a trip date makes sense for this status.
    pub fn accepts_date(&self) -> bool {
        matches!(self, Status::Visited | Status::Planned)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Visited => write!(f, "visited"),
            Status::Planned => write!(f, "planned"),
            Status::NotVisited => write!(f, "not visited"),
        }
    }
}

/// The per-country unit of persisted state.
///
/// `name` is the stable identity; lookups and updates match it exactly.
/// Optional seed fields are defaulted at deserialization so a record always
/// carries every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::default(),
            date: None,
            photos: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_record_with_only_a_name_gets_defaults() {
        let country: Country = serde_json::from_str(r#"{"name":"Spain"}"#).unwrap();
        assert_eq!(country.name, "Spain");
        assert_eq!(country.status, Status::NotVisited);
        assert_eq!(country.date, None);
        assert!(country.photos.is_empty());
    }

    #[test]
    fn status_uses_the_original_wire_names() {
        let country: Country =
            serde_json::from_str(r#"{"name":"France","status":"not visited"}"#).unwrap();
        assert_eq!(country.status, Status::NotVisited);

        let json = serde_json::to_string(&Country {
            status: Status::Visited,
            ..Country::new("France")
        })
        .unwrap();
        assert!(json.contains(r#""status":"visited""#));
    }

    #[test]
    fn absent_date_is_not_serialized() {
        let json = serde_json::to_string(&Country::new("Japan")).unwrap();
        assert!(!json.contains("date"));
    }

    #[test]
    fn date_round_trips_as_iso() {
        let mut country = Country::new("Italy");
        country.date = Some(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        let json = serde_json::to_string(&country).unwrap();
        assert!(json.contains(r#""date":"2023-06-01""#));

        let parsed: Country = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, country);
    }

    #[test]
    fn only_visited_and_planned_accept_dates() {
        assert!(Status::Visited.accepts_date());
        assert!(Status::Planned.accepts_date());
        assert!(!Status::NotVisited.accepts_date());
    }
}
