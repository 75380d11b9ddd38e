//! Package updater configuration.
//!
//! Defaults mirror the locations and limits the packaging has always used.
//! The CLI overrides individual fields from flags or `CCD_*` environment
//! variables.

use std::path::PathBuf;
use std::time::Duration;

/// Unversioned download location of the Windows arm64 installer.
pub const DEFAULT_ARM64_URL: &str = "https://storage.googleapis.com/osprey-downloads-c02f6a0d-347c-492b-a752-3e0651722e97/nest-win-arm64/Claude-Setup-arm64.exe";

/// Some CDNs reject requests without a browser user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Settings for [`Updater`](crate::package::Updater).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    /// Where to fetch the arm64 installer from.
    pub arm64_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Timeout for HEAD accessibility probes.
    pub probe_timeout: Duration,
    /// Timeout for installer downloads.
    pub download_timeout: Duration,
    /// The 7-Zip executable used to inspect installers.
    pub seven_zip: PathBuf,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            arm64_url: DEFAULT_ARM64_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            probe_timeout: Duration::from_secs(10),
            download_timeout: Duration::from_secs(30),
            seven_zip: PathBuf::from("7z"),
        }
    }
}

impl UpdaterConfig {
    pub fn with_arm64_url(mut self, url: impl Into<String>) -> Self {
        self.arm64_url = url.into();
        self
    }

    pub fn with_seven_zip(mut self, program: impl Into<PathBuf>) -> Self {
        self.seven_zip = program.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_packaging_constants() {
        let config = UpdaterConfig::default();
        assert!(config.arm64_url.ends_with("Claude-Setup-arm64.exe"));
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert_eq!(config.probe_timeout, Duration::from_secs(10));
        assert_eq!(config.download_timeout, Duration::from_secs(30));
        assert_eq!(config.seven_zip, PathBuf::from("7z"));
    }

    #[test]
    fn builders_override_fields() {
        let config = UpdaterConfig::default()
            .with_arm64_url("http://127.0.0.1/arm64.exe")
            .with_seven_zip("/nix/store/p7zip/bin/7z");
        assert_eq!(config.arm64_url, "http://127.0.0.1/arm64.exe");
        assert_eq!(config.seven_zip, PathBuf::from("/nix/store/p7zip/bin/7z"));
    }
}
