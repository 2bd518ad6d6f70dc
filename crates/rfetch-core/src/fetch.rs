//! Single blocking HTTP GET.
//!
//! Uses the curl crate (libcurl Easy + transfer API) to fetch the validated
//! URL and drain the whole response body into memory. The transfer borrow is
//! scoped so the connection is released on every exit path.

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

use crate::config::RfetchConfig;

/// Outcome of a completed GET: the status code plus the full body bytes.
#[derive(Debug)]
pub struct FetchResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs one GET against `url` and reads the entire body.
///
/// Transport failures (DNS, refused connection, timeout) are errors; there is
/// no retry. A non-2xx status is not an error: the body (e.g. a server error
/// page) is returned verbatim with the status, and the caller writes it like
/// any other response.
pub fn fetch_body(url: &Url, cfg: &RfetchConfig) -> Result<FetchResponse> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str()).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(cfg.max_redirections)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.request_timeout_secs))?;
    if let Some(ua) = &cfg.user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let status = easy.response_code().context("no response code")?;
    if !(200..300).contains(&status) {
        tracing::warn!(status, url = %url, "non-success HTTP status");
    }
    tracing::debug!(status, bytes = body.len(), "response body read");

    Ok(FetchResponse { status, body })
}
