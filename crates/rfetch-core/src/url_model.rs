//! URL validation.
//!
//! The positional argument must be an absolute URL: a scheme plus an
//! authority, parseable without a base reference. Validation happens before
//! anything touches the network.

use anyhow::{bail, Context, Result};
use url::Url;

/// Parses `raw` as an absolute request URL.
///
/// Rejects empty strings, relative references, and authority-less schemes
/// such as `mailto:`. The parse error (or shape complaint) ends up in the
/// message shown to the user.
pub fn validate_request_url(raw: &str) -> Result<Url> {
    let parsed = Url::parse(raw).with_context(|| format!("invalid URL: {:?}", raw))?;
    if !parsed.has_host() {
        bail!("URL has no host: {:?}", raw);
    }
    Ok(parsed)
}
