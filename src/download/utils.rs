use url::Url;

use crate::utils::{Error, Result};

const ALLOWED_HOSTS: &[&str] = &["1001tracklists.com", "www.1001tracklists.com"];

/// Checks that `raw` is an http(s) link to a page on 1001tracklists.
pub fn validate_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::Validation(format!("{}: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::Validation(format!("unsupported scheme '{}'", url.scheme())));
    }

    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    if !ALLOWED_HOSTS.contains(&host.as_str()) {
        return Err(Error::Validation(format!("not a 1001tracklists url: {}", raw)));
    }

    if url.path().trim_matches('/').is_empty() {
        return Err(Error::Validation(format!("no tracklist path in {}", raw)));
    }

    Ok(url)
}
