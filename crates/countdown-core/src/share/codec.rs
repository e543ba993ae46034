//! Share Token Codec
//!
//! token = Base64(encodeURIComponent(JSON array of {title, date, description?}))

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode};
use serde_json::Value;

use super::URI_COMPONENT;
use crate::domain::{normalize_description, Countdown, DomainError, DomainResult, ImportDraft};

/// Standard alphabet; padding optional on the way in
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode countdowns into a share token. Ids are not shared.
pub fn encode(countdowns: &[Countdown]) -> String {
    let drafts: Vec<ImportDraft> = countdowns.iter().map(ImportDraft::from).collect();
    // Only string fields, so serialization has no failure path
    let json = serde_json::to_string(&drafts).unwrap_or_else(|_| String::from("[]"));
    let uri = utf8_percent_encode(&json, URI_COMPONENT).to_string();
    TOKEN_ENGINE.encode(uri)
}

/// Decode a share token into the drafts it carries.
///
/// Structural problems are `MalformedToken`; a well-formed list without a
/// single usable element is `EmptyImport`.
pub fn decode(token: &str) -> DomainResult<Vec<ImportDraft>> {
    let elements = decode_elements(token)?;
    let total = elements.len();

    let drafts: Vec<ImportDraft> = elements.iter().filter_map(draft_from_value).collect();
    if drafts.len() < total {
        debug!("[SHARE] Dropped {} invalid countdowns from token", total - drafts.len());
    }
    if drafts.is_empty() {
        return Err(DomainError::EmptyImport);
    }
    Ok(drafts)
}

fn decode_elements(token: &str) -> DomainResult<Vec<Value>> {
    // Query decoding turns an unescaped '+' into a space
    let token: String = token
        .trim()
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();

    let bytes = TOKEN_ENGINE
        .decode(token.as_bytes())
        .map_err(|e| DomainError::MalformedToken(format!("not valid base64: {}", e)))?;
    let uri = String::from_utf8(bytes)
        .map_err(|_| DomainError::MalformedToken("token is not text".to_string()))?;
    let json = percent_decode_str(&uri)
        .decode_utf8()
        .map_err(|_| DomainError::MalformedToken("not valid URI-encoded text".to_string()))?;
    let value: Value = serde_json::from_str(&json)
        .map_err(|e| DomainError::MalformedToken(format!("not valid JSON: {}", e)))?;

    match value {
        Value::Array(elements) => Ok(elements),
        _ => Err(DomainError::MalformedToken("expected a list of countdowns".to_string())),
    }
}

fn draft_from_value(value: &Value) -> Option<ImportDraft> {
    let object = value.as_object()?;
    let draft = ImportDraft {
        title: object.get("title")?.as_str()?.to_string(),
        date: object.get("date")?.as_str()?.to_string(),
        description: normalize_description(object.get("description").and_then(Value::as_str)),
    };
    draft.is_valid().then_some(draft)
}
