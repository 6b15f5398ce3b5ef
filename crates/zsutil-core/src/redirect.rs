//! Redirect resolution via HTTP HEAD.
//!
//! [`resolve_redirections`] only needs an [`HttpHeadProbe`]; [`CurlHeadProbe`]
//! implements it with libcurl, following redirects the same way the download
//! path does.

use anyhow::{Context, Result};
use std::time::Duration;

use crate::config::ProbeConfig;
use crate::error::ZsError;
use crate::url_class::is_url_absolute;

/// Status and final location of a HEAD request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadResponse {
    pub status: u32,
    /// URL after any redirects the probe followed.
    pub final_url: String,
}

/// Something that can issue a HEAD request for an absolute URL.
pub trait HttpHeadProbe {
    fn head(&self, url: &str) -> Result<HeadResponse>;
}

/// Returns the final URL for `url`, or `None` if the probe still ended on a 3xx.
///
/// 4xx and 5xx count as resolved: they are real answers from the final
/// location. A 3xx means the probe gave up following redirects.
pub fn resolve_redirections<P: HttpHeadProbe + ?Sized>(probe: &P, url: &str) -> Result<Option<String>> {
    if !is_url_absolute(url) {
        return Err(ZsError::NotAbsolute(url.to_string()).into());
    }
    let resp = probe.head(url)?;
    tracing::debug!(url, status = resp.status, final_url = %resp.final_url, "HEAD probe");
    if (300..400).contains(&resp.status) {
        return Ok(None);
    }
    Ok(Some(resp.final_url))
}

/// [`HttpHeadProbe`] using the `curl` crate.
///
/// Blocks the current thread; call from `spawn_blocking` in async code.
#[derive(Debug, Clone)]
pub struct CurlHeadProbe {
    connect_timeout: Duration,
    timeout: Duration,
    max_redirects: u32,
}

impl CurlHeadProbe {
    pub fn new(cfg: &ProbeConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_redirects: cfg.max_redirects,
        }
    }
}

impl Default for CurlHeadProbe {
    fn default() -> Self {
        Self::new(&ProbeConfig::default())
    }
}

impl HttpHeadProbe for CurlHeadProbe {
    fn head(&self, url: &str) -> Result<HeadResponse> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirects)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.perform()
            .with_context(|| format!("HEAD {} failed", url))?;

        let status = easy.response_code().context("no response code")?;
        let final_url = easy
            .effective_url()
            .context("no effective URL")?
            .unwrap_or(url)
            .to_string();
        Ok(HeadResponse { status, final_url })
    }
}
