//! URL Query Helpers
//!
//! Reading import parameters out of `location.search`, building share links
//! and stripping consumed parameters from the visible address.

use url::form_urlencoded;
use url::Url;

use super::codec::encode;
use super::source::LEGACY_PARAMS;
use crate::domain::{Countdown, DomainError, DomainResult};

/// Decode `?a=1&b=two+words` into ordered key/value pairs
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query_bytes(search))
        .into_owned()
        .collect()
}

/// First decoded value for `key`
pub fn query_value(search: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query_bytes(search))
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.into_owned())
}

/// `search` without the share token and legacy import parameters.
///
/// Returns `""` when nothing is left, otherwise a string starting with `?`.
pub fn strip_import_params(search: &str, share_param: &str) -> String {
    let kept: Vec<(String, String)> = parse_query(search)
        .into_iter()
        .filter(|(key, _)| key != share_param && !LEGACY_PARAMS.contains(&key.as_str()))
        .collect();

    if kept.is_empty() {
        return String::new();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(kept)
        .finish();
    format!("?{}", query)
}

/// Link that imports `countdowns` when opened.
///
/// Any query or fragment already on `base` is dropped.
pub fn share_url(base: &str, share_param: &str, countdowns: &[Countdown]) -> DomainResult<String> {
    let mut url = Url::parse(base)
        .map_err(|e| DomainError::Validation(format!("invalid base address '{}': {}", base, e)))?;
    url.set_query(None);
    url.set_fragment(None);
    url.query_pairs_mut()
        .append_pair(share_param, &encode(countdowns));
    Ok(url.into())
}

fn query_bytes(search: &str) -> &[u8] {
    search.strip_prefix('?').unwrap_or(search).as_bytes()
}
