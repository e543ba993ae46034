//! Share Links
//!
//! Countdowns travel between browsers inside a URL: either as one Base64
//! token (`?countdowns=...`) or, for older links, as plain `title`, `date`
//! and `description` parameters.

mod codec;
mod qr;
mod query;
mod source;

pub use codec::{decode, encode};
pub use qr::qr_svg;
pub use query::{parse_query, query_value, share_url, strip_import_params};
pub use source::ImportSource;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by `encodeURIComponent`
pub(crate) const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');
