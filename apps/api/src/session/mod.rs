//! Application state controller — one finite-state flow per session:
//! `idle → parsing → review → sync`, with an error-carrying return to
//! `idle` when extraction fails. The session owns the extracted document,
//! the error state, the parsing progress clock, and the transient copy
//! mark; all of it is in-memory and discarded on reset.

pub mod handlers;
pub mod progress;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileDocument;
use crate::session::progress::{progress_at, progress_idle, ProgressSnapshot};

/// How long a copied card stays in its transient "copied" state.
pub const COPIED_DISPLAY_DURATION: Duration = Duration::from_secs(2);

/// Single generic user-facing message for any extraction failure.
pub const EXTRACTION_FAILED_MESSAGE: &str =
    "AI Analysis encountered an issue. Try pasting plain text for faster results.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Parsing,
    Review,
    Sync,
}

#[derive(Debug)]
struct CopyMark {
    field_id: String,
    until: Instant,
}

#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub phase: Phase,
    pub document: Option<ProfileDocument>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    parsing_started: Option<Instant>,
    copied: Option<CopyMark>,
}

impl Session {
    fn new(id: Uuid) -> Self {
        Session {
            id,
            phase: Phase::Idle,
            document: None,
            error: None,
            created_at: Utc::now(),
            parsing_started: None,
            copied: None,
        }
    }

    /// `idle → parsing`. Clears any prior error and starts the progress
    /// clock. A submit while an extraction is already in flight — or after a
    /// document exists — is a conflict; exactly one extraction per session
    /// may be outstanding.
    pub fn begin_parsing(&mut self, now: Instant) -> Result<(), AppError> {
        match self.phase {
            Phase::Idle => {
                self.error = None;
                self.parsing_started = Some(now);
                self.phase = Phase::Parsing;
                Ok(())
            }
            Phase::Parsing => Err(AppError::Conflict(
                "An extraction is already in flight for this session".to_string(),
            )),
            Phase::Review | Phase::Sync => Err(AppError::Conflict(
                "This session already holds an extracted document; reset it to scan again"
                    .to_string(),
            )),
        }
    }

    /// `parsing → review`. A result arriving in any other phase has nothing
    /// to apply to and is dropped.
    pub fn complete_parsing(&mut self, document: ProfileDocument) {
        if self.phase != Phase::Parsing {
            return;
        }
        self.document = Some(document);
        self.parsing_started = None;
        self.phase = Phase::Review;
    }

    /// `parsing → idle` with a user-facing error. The failed attempt leaves
    /// no partial document.
    pub fn fail_parsing(&mut self, message: &str) {
        if self.phase != Phase::Parsing {
            return;
        }
        self.error = Some(message.to_string());
        self.parsing_started = None;
        self.phase = Phase::Idle;
    }

    /// Whole-document replacement — the single edit primitive. Allowed only
    /// while reviewing; no field-level validation is performed.
    pub fn replace_document(&mut self, document: ProfileDocument) -> Result<(), AppError> {
        if self.phase != Phase::Review {
            return Err(AppError::Conflict(
                "The document can only be edited while under review".to_string(),
            ));
        }
        self.document = Some(document);
        Ok(())
    }

    /// `review → sync`. No transformation of the data, only the transition.
    pub fn confirm(&mut self) -> Result<(), AppError> {
        if self.phase != Phase::Review {
            return Err(AppError::Conflict(
                "Only a reviewed document can be confirmed".to_string(),
            ));
        }
        self.phase = Phase::Sync;
        Ok(())
    }

    /// Unconditional return to `idle`: discards the document, the error,
    /// and any copy state. The only exit from `sync`. An in-flight
    /// extraction cannot be cancelled, so reset waits for it to settle.
    pub fn reset(&mut self) -> Result<(), AppError> {
        if self.phase == Phase::Parsing {
            return Err(AppError::Conflict(
                "An extraction is in flight; wait for it to finish before resetting".to_string(),
            ));
        }
        self.document = None;
        self.error = None;
        self.parsing_started = None;
        self.copied = None;
        self.phase = Phase::Idle;
        Ok(())
    }

    pub fn progress(&self, now: Instant) -> ProgressSnapshot {
        match self.parsing_started {
            Some(started) if self.phase == Phase::Parsing => progress_at(now - started),
            _ => progress_idle(),
        }
    }

    pub fn require_document(&self) -> Result<&ProfileDocument, AppError> {
        self.document.as_ref().ok_or_else(|| {
            AppError::Conflict("No document has been extracted for this session yet".to_string())
        })
    }

    /// Marks `field_id` copied for the fixed display duration, superseding
    /// any previous mark.
    pub fn mark_copied(&mut self, field_id: &str, now: Instant) {
        self.copied = Some(CopyMark {
            field_id: field_id.to_string(),
            until: now + COPIED_DISPLAY_DURATION,
        });
    }

    /// The field currently in its "copied" state, if any.
    pub fn copied_field(&self, now: Instant) -> Option<&str> {
        self.copied
            .as_ref()
            .filter(|mark| now < mark.until)
            .map(|mark| mark.field_id.as_str())
    }
}

/// In-memory session store. Documents live for the duration of one session
/// and are discarded on reset; nothing is persisted.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner
            .lock()
            .expect("session store poisoned")
            .insert(id, Session::new(id));
        id
    }

    /// Runs `f` against the session, or fails with a not-found error for an
    /// unknown id.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut sessions = self.inner.lock().expect("session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        f(session)
    }
}
