//! Countdown Entity
//!
//! A user-defined deadline: a title, an optional description and the
//! instant it counts down to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};
use super::instant::{format_instant, iso_instant, parse_instant};

/// A persisted countdown record
///
/// Serialized as `{id, title, description?, targetDate}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    /// Unique identifier, immutable after creation
    pub id: String,
    /// Non-empty label
    pub title: String,
    /// Optional notes; never `Some("")`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Instant the countdown ends
    #[serde(with = "iso_instant")]
    pub target_date: DateTime<Utc>,
}

impl Countdown {
    /// Validate a draft and build a record with the given id
    pub fn from_draft(id: String, draft: &CountdownDraft) -> DomainResult<Self> {
        Ok(Self {
            id,
            title: validate_title(&draft.title)?,
            description: normalize_description(draft.description.as_deref()),
            target_date: parse_instant(&draft.target_date)?,
        })
    }

    /// Re-check a record that came from storage rather than from a draft
    pub fn validated(self) -> DomainResult<Self> {
        if is_blank(&self.id) {
            return Err(DomainError::Validation("id is required".to_string()));
        }
        Ok(Self {
            title: validate_title(&self.title)?,
            description: normalize_description(self.description.as_deref()),
            ..self
        })
    }

    /// Target in canonical text form
    pub fn target_text(&self) -> String {
        format_instant(&self.target_date)
    }

    /// Apply a patch, returning the updated copy; `self` is left untouched
    pub fn patched(&self, patch: &CountdownPatch) -> DomainResult<Self> {
        let mut updated = self.clone();
        if let Some(title) = &patch.title {
            updated.title = validate_title(title)?;
        }
        if let Some(description) = &patch.description {
            updated.description = normalize_description(Some(description));
        }
        if let Some(target_date) = &patch.target_date {
            updated.target_date = parse_instant(target_date)?;
        }
        Ok(updated)
    }
}

/// Input for creating a countdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw date text, parsed on create
    pub target_date: String,
}

impl CountdownDraft {
    pub fn new(title: impl Into<String>, target_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            target_date: target_date.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update; `None` fields stay as they are
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownPatch {
    pub title: Option<String>,
    /// `Some("")` clears the description
    pub description: Option<String>,
    pub target_date: Option<String>,
}

impl CountdownPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.target_date.is_none()
    }
}

/// A countdown received through a share link, not yet accepted
///
/// Serialized as `{title, date, description?}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportDraft {
    pub title: String,
    /// Raw date text as it appeared in the link
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ImportDraft {
    /// Non-empty title and non-empty date
    pub fn is_valid(&self) -> bool {
        !is_blank(&self.title) && !is_blank(&self.date)
    }
}

impl From<&Countdown> for ImportDraft {
    fn from(countdown: &Countdown) -> Self {
        Self {
            title: countdown.title.clone(),
            date: countdown.target_text(),
            description: countdown.description.clone(),
        }
    }
}

impl From<&ImportDraft> for CountdownDraft {
    fn from(draft: &ImportDraft) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            target_date: draft.date.clone(),
        }
    }
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

pub(crate) fn normalize_description(description: Option<&str>) -> Option<String> {
    description.filter(|d| !is_blank(d)).map(str::to_string)
}

fn validate_title(title: &str) -> DomainResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::Validation("title is required".to_string()));
    }
    Ok(title.to_string())
}
