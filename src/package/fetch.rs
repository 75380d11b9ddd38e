//! Installer probing and downloads.

use anyhow::{anyhow, Context};
use reqwest::StatusCode;
use std::path::Path;
use std::time::Duration;

use crate::config::UpdaterConfig;
use crate::error::Result;

/// Fetches installer binaries over HTTP.
///
/// # Example
///
/// ```no_run
/// use claude_desktop_nix::config::UpdaterConfig;
/// use claude_desktop_nix::package::InstallerFetcher;
/// use std::path::Path;
///
/// let fetcher = InstallerFetcher::new(&UpdaterConfig::default()).unwrap();
/// let url = "https://example.com/Claude-Setup-x64.exe";
/// if fetcher.is_accessible(url) {
///     fetcher.download(url, Path::new("/tmp/claude-setup.exe")).unwrap();
/// }
/// ```
pub struct InstallerFetcher {
    /// Timeout for HEAD probes.
    probe_timeout: Duration,
    /// Timeout for downloads.
    download_timeout: Duration,
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl InstallerFetcher {
    /// Create a fetcher from updater settings.
    pub fn new(config: &UpdaterConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            probe_timeout: config.probe_timeout,
            download_timeout: config.download_timeout,
            client,
        })
    }

    /// Whether `url` answers a HEAD request with 200 OK.
    ///
    /// Transport errors and timeouts count as inaccessible.
    pub fn is_accessible(&self, url: &str) -> bool {
        match self
            .client
            .head(url)
            .timeout(self.probe_timeout)
            .send()
        {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                tracing::debug!("HEAD {} failed: {}", url, e);
                false
            }
        }
    }

    /// Download `url` to `dest`, replacing any existing file.
    pub fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self
            .client
            .get(url)
            .timeout(self.download_timeout)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} fetching {}", response.status(), url).into());
        }

        let bytes = response
            .bytes()
            .with_context(|| format!("Failed to read response from {}", url))?;
        std::fs::write(dest, &bytes)?;

        tracing::debug!("Downloaded {} bytes from {} to {}", bytes.len(), url, dest.display());
        Ok(())
    }
}
