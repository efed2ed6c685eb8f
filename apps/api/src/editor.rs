//! Review-phase editor — the document presented across the three fixed tab
//! groups, whole-document replacement, and the confirm transition into sync.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{
    AwardEntry, CertificationEntry, EducationEntry, ExperienceEntry, PatentEntry,
    ProfileDocument, ProjectEntry, PublicationEntry, VolunteerEntry,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EditorView {
    pub core: CoreTab,
    pub recommended: RecommendedTab,
    pub additional: AdditionalTab,
}

#[derive(Debug, Serialize)]
pub struct CoreTab {
    pub name: String,
    pub headline: String,
    pub about: String,
    pub experience: Vec<ExperienceEntry>,
}

#[derive(Debug, Serialize)]
pub struct RecommendedTab {
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<CertificationEntry>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalTab {
    pub publications: Vec<PublicationEntry>,
    pub languages: Vec<String>,
    pub volunteer: Vec<VolunteerEntry>,
    pub awards: Vec<AwardEntry>,
    pub patents: Vec<PatentEntry>,
    pub test_scores: Vec<String>,
    pub organizations: Vec<String>,
}

/// Presentation-only grouping; the document itself is never restructured.
pub fn editor_view(document: &ProfileDocument) -> EditorView {
    EditorView {
        core: CoreTab {
            name: document.name.clone(),
            headline: document.headline.clone(),
            about: document.about.clone(),
            experience: document.experience.clone(),
        },
        recommended: RecommendedTab {
            education: document.education.clone(),
            skills: document.skills.clone(),
            certifications: document.certifications.clone(),
            projects: document.projects.clone(),
        },
        additional: AdditionalTab {
            publications: document.publications.clone(),
            languages: document.languages.clone(),
            volunteer: document.volunteer.clone(),
            awards: document.awards.clone(),
            patents: document.patents.clone(),
            test_scores: document.test_scores.clone(),
            organizations: document.organizations.clone(),
        },
    }
}

/// GET /api/v1/sessions/:id/editor
pub async fn handle_get_editor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EditorView>, AppError> {
    state.sessions.with_session(id, |session| {
        let document = session.require_document()?;
        Ok(Json(editor_view(document)))
    })
}

/// PUT /api/v1/sessions/:id/document
/// Every edit produces a new whole-document value; there is no partial or
/// diffed update, and no field-level validation.
pub async fn handle_replace_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(document): Json<ProfileDocument>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .with_session(id, |session| session.replace_document(document))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/confirm
/// Advances review → sync; the data passes through untouched.
pub async fn handle_confirm(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.with_session(id, |session| session.confirm())?;
    Ok(StatusCode::NO_CONTENT)
}
