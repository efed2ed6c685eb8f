//! Sync helper — the finalized document rendered as copy-ready cards
//! grouped by LinkedIn section. Cards are a fixed, non-editable view; the
//! per-group caps are layout-only and leave the underlying document
//! untouched.

pub mod handlers;
pub mod links;

use serde::Serialize;

use crate::models::profile::ProfileDocument;

/// Layout caps per group.
const MAX_EXPERIENCE_CARDS: usize = 3;
const MAX_EDUCATION_CARDS: usize = 1;
const MAX_PROJECT_CARDS: usize = 2;
const MAX_PUBLICATION_CARDS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyCard {
    pub field_id: String,
    pub label: String,
    /// Exact text a copy action places on the clipboard.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_url: Option<&'static str>,
    pub copied: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardGroup {
    pub title: &'static str,
    pub cards: Vec<CopyCard>,
}

/// Builds the full card board in document order. `copied_field` flags the
/// one card currently in its transient "copied" state.
pub fn card_groups(document: &ProfileDocument, copied_field: Option<&str>) -> Vec<CardGroup> {
    let card = |field_id: String, label: String, text: String, url: Option<&'static str>| {
        CopyCard {
            copied: copied_field == Some(field_id.as_str()),
            field_id,
            label,
            text,
            section_url: url,
        }
    };

    let identity = vec![
        card(
            "n".to_string(),
            "Full Name".to_string(),
            document.name.clone(),
            Some(links::INTRO),
        ),
        card(
            "h".to_string(),
            "Headline".to_string(),
            document.headline.clone(),
            Some(links::INTRO),
        ),
        card(
            "a".to_string(),
            "About / Summary".to_string(),
            document.about.clone(),
            Some(links::ABOUT),
        ),
        card(
            "s".to_string(),
            "Skills Batch".to_string(),
            document.skills.join(", "),
            Some(links::SKILLS),
        ),
    ];

    let mut career = Vec::new();
    for (i, exp) in document
        .experience
        .iter()
        .take(MAX_EXPERIENCE_CARDS)
        .enumerate()
    {
        career.push(card(
            format!("exp-{i}"),
            format!("Role: {}", exp.title),
            format!("{} at {}\n\n{}", exp.title, exp.company, exp.description),
            Some(links::EXPERIENCE),
        ));
    }
    for (i, edu) in document
        .education
        .iter()
        .take(MAX_EDUCATION_CARDS)
        .enumerate()
    {
        career.push(card(
            format!("edu-{i}"),
            "Latest Education".to_string(),
            format!("{} in {}\n{}", edu.degree, edu.field_of_study, edu.school),
            Some(links::EDUCATION),
        ));
    }

    let mut impact = Vec::new();
    for (i, project) in document.projects.iter().take(MAX_PROJECT_CARDS).enumerate() {
        impact.push(card(
            format!("proj-{i}"),
            format!("Project: {}", project.name),
            format!("{}\n\n{}", project.name, project.description),
            Some(links::PROJECTS),
        ));
    }
    for (i, publication) in document
        .publications
        .iter()
        .take(MAX_PUBLICATION_CARDS)
        .enumerate()
    {
        impact.push(card(
            format!("pub-{i}"),
            format!("Publication: {}", publication.title),
            format!(
                "{}\n{} | {}\n\n{}",
                publication.title,
                publication.publisher,
                publication.publication_date,
                publication.description
            ),
            Some(links::PUBLICATIONS),
        ));
    }

    vec![
        CardGroup {
            title: "Identity & Summary",
            cards: identity,
        },
        CardGroup {
            title: "Career History",
            cards: career,
        },
        CardGroup {
            title: "Impact & Projects",
            cards: impact,
        },
    ]
}

/// Clipboard text for one card id, or `None` for an unknown id.
pub fn card_text(document: &ProfileDocument, field_id: &str) -> Option<String> {
    card_groups(document, None)
        .into_iter()
        .flat_map(|group| group.cards)
        .find(|c| c.field_id == field_id)
        .map(|c| c.text)
}
