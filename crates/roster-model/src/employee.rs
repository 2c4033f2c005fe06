//! Employee records and roster files.
//!
//! Roster files are JSON documents produced by the admin tooling, so
//! field names stay camelCase on the wire. Only the core identity
//! fields are required by the export path; extended fields are
//! display-only and survive round-trips untouched.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tomocard_common::{TomocardError, TomocardResult};

/// One member of the organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Stable unique identifier (used in profile URLs and stage addressing).
    pub id: String,

    /// Full display name.
    pub name: String,

    /// Job title / role line printed on the card front.
    pub role: String,

    /// Printed employee number (e.g., "E001").
    pub employee_id: String,

    /// Office or campus location.
    pub location: String,

    /// Photo reference: a local file path or a remote URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    // Extended, display-only fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Join date (ISO 8601 date string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

/// Availability state shown on profile views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Away,
    Offline,
}

/// Where an employee photo comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    /// A file on the local filesystem.
    Local(PathBuf),
    /// An external URL; pixels resolve through the photo cache only.
    Remote(String),
}

impl Employee {
    /// Classify the photo reference, if any.
    pub fn photo_source(&self) -> Option<PhotoSource> {
        let photo = self.photo.as_deref()?.trim();
        if photo.is_empty() {
            return None;
        }
        if photo.starts_with("http://") || photo.starts_with("https://") {
            Some(PhotoSource::Remote(photo.to_string()))
        } else {
            Some(PhotoSource::Local(PathBuf::from(photo)))
        }
    }

    /// Parse the join date, when present and well-formed ISO 8601.
    pub fn join_date_parsed(&self) -> Option<chrono::NaiveDate> {
        self.join_date
            .as_deref()
            .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Deterministic initials glyph used when no photo renders:
    /// the uppercase first letters of the first two whitespace-separated
    /// name tokens ("Ada Lovelace" -> "AL", "Ada" -> "A").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|token| token.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// A versioned roster document (`roster.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Schema version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Organization name, used for combined-PDF naming.
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Employees in export order.
    pub employees: Vec<Employee>,
}

fn default_version() -> String {
    "1".to_string()
}

fn default_organization() -> String {
    "TOMO Academy".to_string()
}

impl Roster {
    /// Load a roster from a JSON file.
    pub fn load(path: &Path) -> TomocardResult<Self> {
        if !path.exists() {
            return Err(TomocardError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let roster: Roster = serde_json::from_str(&content)
            .map_err(|e| TomocardError::roster(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(roster)
    }

    /// Find an employee by id or printed employee number.
    pub fn find(&self, key: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == key || e.employee_id == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str) -> Employee {
        Employee {
            id: "1".to_string(),
            name: name.to_string(),
            role: "Engineer".to_string(),
            employee_id: "E001".to_string(),
            location: "Tokyo".to_string(),
            photo: None,
            department: None,
            email: None,
            phone: None,
            join_date: None,
            availability: None,
            bio: None,
            skills: vec![],
        }
    }

    #[test]
    fn initials_use_first_two_name_tokens() {
        assert_eq!(employee("Ada Lovelace").initials(), "AL");
        assert_eq!(employee("Ada").initials(), "A");
        assert_eq!(employee("grace brewster murray hopper").initials(), "GB");
        assert_eq!(employee("  Ada   Lovelace  ").initials(), "AL");
        assert_eq!(employee("").initials(), "");
    }

    #[test]
    fn photo_source_classifies_urls_and_paths() {
        let mut e = employee("Ada Lovelace");
        assert_eq!(e.photo_source(), None);

        e.photo = Some("photos/ada.png".to_string());
        assert_eq!(
            e.photo_source(),
            Some(PhotoSource::Local(PathBuf::from("photos/ada.png")))
        );

        e.photo = Some("https://cdn.example.com/ada.png".to_string());
        assert_eq!(
            e.photo_source(),
            Some(PhotoSource::Remote(
                "https://cdn.example.com/ada.png".to_string()
            ))
        );

        e.photo = Some("   ".to_string());
        assert_eq!(e.photo_source(), None);
    }

    #[test]
    fn roster_parses_camel_case_documents() {
        let json = r#"{
            "organization": "TOMO Academy",
            "employees": [{
                "id": "1",
                "name": "Ada Lovelace",
                "role": "Engineer",
                "employeeId": "E001",
                "location": "Tokyo",
                "joinDate": "2024-04-01",
                "availability": "available",
                "skills": ["rust"]
            }]
        }"#;
        let roster: Roster = serde_json::from_str(json).unwrap();
        assert_eq!(roster.version, "1");
        assert_eq!(roster.employees.len(), 1);
        let e = &roster.employees[0];
        assert_eq!(e.employee_id, "E001");
        assert_eq!(e.join_date.as_deref(), Some("2024-04-01"));
        assert_eq!(
            e.join_date_parsed(),
            chrono::NaiveDate::from_ymd_opt(2024, 4, 1)
        );
        assert_eq!(e.availability, Some(Availability::Available));
        assert!(roster.find("E001").is_some());
        assert!(roster.find("1").is_some());
        assert!(roster.find("missing").is_none());
    }
}
