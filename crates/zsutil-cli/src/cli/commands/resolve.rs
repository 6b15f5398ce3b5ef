//! `zsutil resolve <url>` – follow redirects with HEAD.

use anyhow::{Context, Result};
use zsutil_core::config::ZsConfig;
use zsutil_core::redirect::{resolve_redirections, CurlHeadProbe, HttpHeadProbe};

/// Final URL for `url`; an unresolved redirect is an error at the CLI level.
pub(crate) fn final_url<P: HttpHeadProbe + ?Sized>(probe: &P, url: &str) -> Result<String> {
    match resolve_redirections(probe, url)? {
        Some(final_url) => Ok(final_url),
        None => anyhow::bail!("redirect not resolved for {}", url),
    }
}

pub async fn run_resolve(url: &str, cfg: &ZsConfig) -> Result<()> {
    let probe = CurlHeadProbe::new(&cfg.probe);
    let resolved = tokio::task::spawn_blocking({
        let url = url.to_string();
        move || final_url(&probe, &url)
    })
    .await
    .context("resolve task join")??;

    println!("{}", resolved);
    Ok(())
}
