//! The typed profile document — the single unit of truth passed by value
//! between extraction, review, and sync.
//!
//! Wire names are camelCase to match the extraction output schema. `name`,
//! `headline`, `about`, `skills`, `experience`, and `education` are mandatory
//! in an extraction result; every other collection carries
//! `#[serde(default)]` so a collection the model omits is normalized to an
//! empty `Vec`, never left absent. Downstream code relies on that and does
//! not branch on missing collections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: String,
    pub issuing_organization: String,
    pub issue_date: String,
    pub expiration_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VolunteerEntry {
    pub role: String,
    pub organization: String,
    pub cause: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PublicationEntry {
    pub title: String,
    pub publisher: String,
    pub publication_date: String,
    pub description: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardEntry {
    pub title: String,
    pub issuer: String,
    pub issue_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatentEntry {
    pub title: String,
    pub number: String,
    pub issue_date: String,
    pub url: Option<String>,
    pub description: String,
}

/// The aggregate produced by a successful extraction. Held in memory for one
/// session, replaced wholesale on every edit, and discarded on reset —
/// never persisted, never merged, never reordered by the system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub name: String,
    pub headline: String,
    pub about: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub volunteer: Vec<VolunteerEntry>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub awards: Vec<AwardEntry>,
    #[serde(default)]
    pub publications: Vec<PublicationEntry>,
    #[serde(default)]
    pub patents: Vec<PatentEntry>,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub test_scores: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_extraction_json() -> serde_json::Value {
        json!({
            "name": "Jane Doe",
            "headline": "Staff Engineer",
            "about": "I build things.",
            "skills": ["Rust", "SQL"],
            "experience": [{
                "title": "Staff Engineer",
                "company": "Acme",
                "location": "Remote",
                "startDate": "2019",
                "endDate": "Present",
                "description": "Led the platform team."
            }],
            "education": [{
                "school": "State University",
                "degree": "BSc",
                "fieldOfStudy": "Computer Science",
                "startDate": "2011",
                "endDate": "2015"
            }]
        })
    }

    #[test]
    fn test_missing_optional_collections_normalize_to_empty() {
        let doc: ProfileDocument = serde_json::from_value(minimal_extraction_json()).unwrap();
        assert!(doc.projects.is_empty());
        assert!(doc.certifications.is_empty());
        assert!(doc.volunteer.is_empty());
        assert!(doc.languages.is_empty());
        assert!(doc.awards.is_empty());
        assert!(doc.publications.is_empty());
        assert!(doc.patents.is_empty());
        assert!(doc.organizations.is_empty());
        assert!(doc.test_scores.is_empty());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let doc: ProfileDocument = serde_json::from_value(minimal_extraction_json()).unwrap();
        let round_tripped: ProfileDocument =
            serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
        assert_eq!(doc, round_tripped);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let mut raw = minimal_extraction_json();
        raw.as_object_mut().unwrap().remove("headline");
        assert!(serde_json::from_value::<ProfileDocument>(raw).is_err());
    }

    #[test]
    fn test_omitted_entry_fields_default_to_empty() {
        let mut raw = minimal_extraction_json();
        raw["experience"] = json!([{ "title": "Engineer", "company": "Acme" }]);
        let doc: ProfileDocument = serde_json::from_value(raw).unwrap();
        assert_eq!(doc.experience[0].description, "");
        assert_eq!(doc.experience[0].start_date, "");
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let doc: ProfileDocument = serde_json::from_value(minimal_extraction_json()).unwrap();
        let serialized = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            serialized["education"][0]["fieldOfStudy"],
            "Computer Science"
        );
        assert!(serialized.get("testScores").is_some());
        assert!(serialized.get("test_scores").is_none());
    }

    #[test]
    fn test_extraction_order_is_preserved() {
        let mut raw = minimal_extraction_json();
        raw["skills"] = json!(["Zig", "Ada", "C"]);
        let doc: ProfileDocument = serde_json::from_value(raw).unwrap();
        assert_eq!(doc.skills, vec!["Zig", "Ada", "C"]);
    }
}
