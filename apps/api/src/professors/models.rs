//! Professor records normalized from the backend's mixed legacy/new schema.

use serde::{Deserialize, Serialize};

use crate::backend::RawId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    NotContacted,
    Contacted,
    Replied,
    Interested,
    Rejected,
}

impl ContactStatus {
    /// Accepts snake, kebab, or title case. Unknown values map to `NotContacted`.
    pub fn from_wire(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "contacted" | "emailed" => ContactStatus::Contacted,
            "replied" | "responded" => ContactStatus::Replied,
            "interested" | "accepted" => ContactStatus::Interested,
            "rejected" | "declined" => ContactStatus::Rejected,
            _ => ContactStatus::NotContacted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Professor {
    pub id: String,
    pub name: String,
    pub university: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub research_interests: Vec<String>,
    pub status: ContactStatus,
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawInterests {
    List(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProfessor {
    pub id: RawId,
    #[serde(default, alias = "full_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, alias = "school", alias = "school_name")]
    pub university: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, alias = "contact_email")]
    pub email: Option<String>,
    #[serde(default)]
    pub research_interests: Option<RawInterests>,
    #[serde(default)]
    pub research_area: Option<String>,
    #[serde(default, alias = "contact_status")]
    pub status: Option<String>,
    #[serde(default, alias = "note")]
    pub notes: Option<String>,
}

pub fn normalize_professor(raw: RawProfessor) -> Professor {
    let name = non_empty(raw.name).unwrap_or_else(|| {
        let joined = [raw.first_name.as_deref(), raw.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            "Unknown".to_string()
        } else {
            joined
        }
    });

    let interests_text = match raw.research_interests {
        Some(RawInterests::List(items)) => items,
        Some(RawInterests::Text(text)) => vec![text],
        None => raw.research_area.into_iter().collect(),
    };
    let research_interests = interests_text
        .iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Professor {
        id: raw.id.to_string(),
        name,
        university: non_empty(raw.university),
        department: non_empty(raw.department),
        email: non_empty(raw.email),
        research_interests,
        status: raw
            .status
            .as_deref()
            .map(ContactStatus::from_wire)
            .unwrap_or_default(),
        notes: raw.notes.unwrap_or_default(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(json: &str) -> Professor {
        normalize_professor(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_new_schema() {
        let p = normalize(
            r#"{"id": "p-9", "name": "Ada Lovelace", "university": "Cambridge",
                "email": "ada@cam.ac.uk", "research_interests": ["Compilers", " PL "],
                "status": "replied", "notes": "follow up"}"#,
        );
        assert_eq!(p.id, "p-9");
        assert_eq!(p.name, "Ada Lovelace");
        assert_eq!(p.university.as_deref(), Some("Cambridge"));
        assert_eq!(p.research_interests, vec!["Compilers", "PL"]);
        assert_eq!(p.status, ContactStatus::Replied);
        assert_eq!(p.notes, "follow up");
    }

    #[test]
    fn test_legacy_schema() {
        let p = normalize(
            r#"{"id": 12, "first_name": "Alan", "last_name": "Turing",
                "school_name": "Manchester", "contact_email": "",
                "research_area": "AI, computability", "contact_status": "Not Contacted",
                "note": "met at conference"}"#,
        );
        assert_eq!(p.id, "12");
        assert_eq!(p.name, "Alan Turing");
        assert_eq!(p.university.as_deref(), Some("Manchester"));
        assert!(p.email.is_none());
        assert_eq!(p.research_interests, vec!["AI", "computability"]);
        assert_eq!(p.status, ContactStatus::NotContacted);
        assert_eq!(p.notes, "met at conference");
    }

    #[test]
    fn test_interests_as_comma_string() {
        let p = normalize(r#"{"id": 1, "full_name": "X", "research_interests": "ML,,Vision "}"#);
        assert_eq!(p.research_interests, vec!["ML", "Vision"]);
    }

    #[test]
    fn test_missing_name_is_unknown() {
        let p = normalize(r#"{"id": 1}"#);
        assert_eq!(p.name, "Unknown");
        assert_eq!(p.status, ContactStatus::NotContacted);
        assert!(p.research_interests.is_empty());
    }

    #[test]
    fn test_status_variants() {
        assert_eq!(ContactStatus::from_wire("Contacted"), ContactStatus::Contacted);
        assert_eq!(ContactStatus::from_wire("not-contacted"), ContactStatus::NotContacted);
        assert_eq!(ContactStatus::from_wire("DECLINED"), ContactStatus::Rejected);
        assert_eq!(ContactStatus::from_wire("???"), ContactStatus::NotContacted);
    }
}
