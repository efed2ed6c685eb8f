//! Strict output schema sent with every extraction request.
//!
//! Required vs. optional marking matches `ProfileDocument`: `name`,
//! `headline`, `about`, `skills`, `experience`, and `education` are
//! mandatory; every other collection may be omitted by the model and is
//! defaulted to empty on parse. `organizations` and `testScores` are
//! intentionally absent here — they exist only as user-editable fields and
//! always start empty.

use serde_json::{json, Value};

pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "headline": { "type": "STRING", "description": "Professional LinkedIn headline" },
            "about": { "type": "STRING", "description": "First-person professional bio" },
            "skills": { "type": "ARRAY", "items": { "type": "STRING" } },
            "experience": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "company": { "type": "STRING" },
                        "location": { "type": "STRING" },
                        "startDate": { "type": "STRING" },
                        "endDate": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    }
                }
            },
            "education": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "school": { "type": "STRING" },
                        "degree": { "type": "STRING" },
                        "fieldOfStudy": { "type": "STRING" },
                        "startDate": { "type": "STRING" },
                        "endDate": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    }
                }
            },
            "projects": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "link": { "type": "STRING" }
                    }
                }
            },
            "certifications": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "issuingOrganization": { "type": "STRING" },
                        "issueDate": { "type": "STRING" }
                    }
                }
            },
            "volunteer": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "role": { "type": "STRING" },
                        "organization": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    }
                }
            },
            "languages": { "type": "ARRAY", "items": { "type": "STRING" } },
            "awards": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "issuer": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    }
                }
            },
            "publications": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "publisher": { "type": "STRING" },
                        "publicationDate": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    }
                }
            },
            "patents": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "number": { "type": "STRING" }
                    }
                }
            }
        },
        "required": ["name", "headline", "about", "skills", "experience", "education"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_match_document_contract() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            ["name", "headline", "about", "skills", "experience", "education"]
        );
    }

    #[test]
    fn test_every_required_field_is_declared() {
        let schema = response_schema();
        let properties = schema["properties"].as_object().unwrap();
        for field in ["name", "headline", "about", "skills", "experience", "education"] {
            assert!(properties.contains_key(field), "schema missing {field}");
        }
    }

    #[test]
    fn test_user_only_fields_are_not_requested() {
        let schema = response_schema();
        let properties = schema["properties"].as_object().unwrap();
        assert!(!properties.contains_key("organizations"));
        assert!(!properties.contains_key("testScores"));
    }
}
