//! # Project Types
//!
//! Mirrors the `projects.json` collection served next to the dashboard:
//!
//! ```json
//! { "id": 3, "name": "Harbour Fit-out", "startDate": "2024-03-05",
//!   "endDate": "2024-06-30", "status": "Active", "venue": { "name": "Pier 4" } }
//! ```

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Venue {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub venue: Venue,
}

impl Project {
    /// Whether this project is the one a detail route points at.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.to_string() == id
    }

    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }
}

/// Accepts plain ISO dates and full RFC 3339 timestamps.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Renders a date as `05 March 2024`. Unparsable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%d %B %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Newest start date first; projects with unreadable dates go last.
pub fn sort_by_start_desc(projects: &mut [Project]) {
    projects.sort_by_key(|p| std::cmp::Reverse(p.start()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u64, start: &str) -> Project {
        Project {
            id,
            name: format!("Project {id}"),
            start_date: start.to_string(),
            end_date: "2030-01-01".to_string(),
            status: "Active".to_string(),
            venue: Venue {
                name: "Hall".to_string(),
            },
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id":7,"name":"Depot","startDate":"2024-03-05","endDate":"2024-04-01","status":"Planned","venue":{"name":"North Yard"}}"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.start_date, "2024-03-05");
        assert_eq!(p.venue.name, "North Yard");
    }

    #[test]
    fn test_matches_id_compares_string_form() {
        let p = project(42, "2024-01-01");
        assert!(p.matches_id("42"));
        assert!(!p.matches_id("042"));
        assert!(!p.matches_id("4"));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05"), "05 March 2024");
        assert_eq!(format_date("2023-12-25T10:00:00Z"), "25 December 2023");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_sort_by_start_desc() {
        let mut projects = vec![
            project(1, "2023-01-10"),
            project(2, "not a date"),
            project(3, "2024-06-01"),
            project(4, "2023-08-15"),
        ];
        sort_by_start_desc(&mut projects);
        let ids: Vec<u64> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }
}
