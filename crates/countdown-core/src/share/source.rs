//! Import Sources
//!
//! Both link shapes normalize to the same list of drafts.

use super::codec;
use super::query::query_value;
use crate::domain::{normalize_description, DomainError, DomainResult, ImportDraft};

/// Plain parameters of the single-countdown link shape
pub(crate) const LEGACY_PARAMS: [&str; 3] = ["title", "date", "description"];

/// Where a pending import came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    /// Base64 token carrying any number of countdowns
    Token(String),
    /// Three plain parameters describing exactly one countdown
    LegacySingle {
        title: String,
        date: String,
        description: Option<String>,
    },
}

impl ImportSource {
    /// Detect an import request in `location.search`.
    ///
    /// The token wins when both shapes are present. The legacy shape needs
    /// both `title` and `date`.
    pub fn from_query(search: &str, share_param: &str) -> Option<Self> {
        let get = |key: &str| query_value(search, key);

        if let Some(token) = get(share_param) {
            return Some(ImportSource::Token(token));
        }

        match (get("title"), get("date")) {
            (Some(title), Some(date)) => Some(ImportSource::LegacySingle {
                title,
                date,
                description: get("description"),
            }),
            _ => None,
        }
    }

    /// Drafts described by this source
    pub fn decode(&self) -> DomainResult<Vec<ImportDraft>> {
        match self {
            ImportSource::Token(token) => codec::decode(token),
            ImportSource::LegacySingle {
                title,
                date,
                description,
            } => {
                let draft = ImportDraft {
                    title: title.clone(),
                    date: date.clone(),
                    description: normalize_description(description.as_deref()),
                };
                if draft.is_valid() {
                    Ok(vec![draft])
                } else {
                    Err(DomainError::EmptyImport)
                }
            }
        }
    }
}
