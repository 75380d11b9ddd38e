//! Bumping `package.nix` to the latest Claude Desktop release.
//!
//! The flow:
//! 1. Read the current version, commit hash and x64 URL from `package.nix`
//! 2. Make sure both installers are reachable
//! 3. Download the x64 installer and read the version it bundles
//! 4. If it differs, hash both installers and rewrite `package.nix`

use std::path::Path;

use tempfile::TempDir;

use super::descriptor::{apply_update, PackageDescriptor};
use super::fetch::InstallerFetcher;
use super::hash::sri_hash_file;
use super::installer::{SevenZip, VersionProbe};
use crate::config::UpdaterConfig;
use crate::error::{CcdError, Result};
use crate::ui::UserInterface;

/// Command to suggest after a successful update.
pub const VERIFY_HINT: &str = "NIXPKGS_ALLOW_UNFREE=1 nix build .#claude-desktop --impure";

/// What an update run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The packaged version already matches the installer.
    UpToDate { version: String },
    /// `package.nix` was rewritten.
    Updated { from: String, to: String },
}

/// Updates a Claude Desktop `package.nix` in place.
pub struct Updater {
    config: UpdaterConfig,
    fetcher: InstallerFetcher,
    probe: Box<dyn VersionProbe>,
}

impl Updater {
    /// Create an updater that inspects installers with 7-Zip.
    pub fn new(config: UpdaterConfig) -> Result<Self> {
        let fetcher = InstallerFetcher::new(&config)?;
        let probe = Box::new(SevenZip::new(config.seven_zip.clone()));
        Ok(Self {
            config,
            fetcher,
            probe,
        })
    }

    /// Use a different installer version probe.
    pub fn with_probe(mut self, probe: Box<dyn VersionProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// Run the update against `package_file`.
    pub fn run(&self, package_file: &Path, ui: &mut dyn UserInterface) -> Result<UpdateOutcome> {
        if !package_file.exists() {
            return Err(CcdError::PackageNotFound {
                path: package_file.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(package_file)?;
        let descriptor = PackageDescriptor::parse(&content, package_file)?;
        ui.message(&format!("Current version: {}", descriptor.version));
        ui.message(&format!(
            "Current x64CommitHash: {}",
            descriptor.x64_commit_hash
        ));

        let x64_url = descriptor.x64_url();
        let arm64_url = self.config.arm64_url.as_str();

        ui.message("Checking installers...");
        ui.detail(&format!("x64 URL: {}", x64_url));
        ui.detail(&format!("arm64 URL: {}", arm64_url));
        self.require_accessible("x64", &x64_url, ui)?;
        self.require_accessible("arm64", arm64_url, ui)?;

        let workdir = TempDir::new()?;
        let x64_file = workdir.path().join("claude-x64.exe");

        ui.message("Extracting version from installer...");
        let version = match self.fetcher.download(&x64_url, &x64_file) {
            Ok(()) => self.probe.installer_version(&x64_file),
            Err(e) => {
                ui.warning(&format!("Failed to extract version: {}", e));
                None
            }
        };
        let version = version.ok_or(CcdError::VersionUndetected)?;
        ui.success(&format!("Detected version: {}", version));

        if version == descriptor.version {
            ui.message(&format!("Version {} is already up to date!", version));
            return Ok(UpdateOutcome::UpToDate { version });
        }

        if !is_newer_version(&version, &descriptor.version) {
            tracing::warn!(
                "Installer version {} is older than packaged {}",
                version,
                descriptor.version
            );
            ui.warning(&format!(
                "Installer reports {} which is older than {}",
                version, descriptor.version
            ));
        }

        ui.message(&format!(
            "New version available: {} → {}",
            descriptor.version, version
        ));

        ui.message("Calculating hashes...");
        let x64_hash = sri_hash_file(&x64_file)?;
        ui.success(&format!("x64 hash: {}", x64_hash));

        let arm64_file = workdir.path().join("claude-arm64.exe");
        ui.message("Downloading arm64 installer...");
        self.fetcher.download(arm64_url, &arm64_file)?;
        let arm64_hash = sri_hash_file(&arm64_file)?;
        ui.success(&format!("arm64 hash: {}", arm64_hash));

        let updated = apply_update(&content, &version, &x64_hash, &arm64_hash);
        std::fs::write(package_file, updated)?;
        tracing::info!(
            from = %descriptor.version,
            to = %version,
            "Updated {}",
            package_file.display()
        );

        ui.success(&format!(
            "Update complete! {} → {}",
            descriptor.version, version
        ));
        ui.message("Please verify the changes and test the build:");
        ui.message(&format!("  {}", VERIFY_HINT));

        Ok(UpdateOutcome::Updated {
            from: descriptor.version,
            to: version,
        })
    }

    fn require_accessible(&self, arch: &str, url: &str, ui: &mut dyn UserInterface) -> Result<()> {
        if !self.fetcher.is_accessible(url) {
            return Err(CcdError::InstallerUnreachable {
                arch: arch.to_string(),
                url: url.to_string(),
            });
        }
        ui.success(&format!("{} installer is accessible", arch));
        Ok(())
    }
}

/// Compare versions to check if `latest` is newer than `current`.
fn is_newer_version(latest: &str, current: &str) -> bool {
    let parse_version = |v: &str| -> Vec<u32> {
        v.split('.')
            .take(3)
            .filter_map(|s| s.parse().ok())
            .collect()
    };

    let latest_parts = parse_version(latest);
    let current_parts = parse_version(current);

    for (l, c) in latest_parts.iter().zip(current_parts.iter()) {
        if l > c {
            return true;
        }
        if l < c {
            return false;
        }
    }

    latest_parts.len() > current_parts.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::hash::sri_hash_bytes;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use httpmock::Method::HEAD;

    struct FixedVersion(Option<&'static str>);

    impl VersionProbe for FixedVersion {
        fn installer_version(&self, _installer: &Path) -> Option<String> {
            self.0.map(String::from)
        }
    }

    fn package_nix(server: &MockServer, version: &str) -> String {
        format!(
            r#"let
  version = "{version}";
  x64CommitHash = "abc123";
  srcs = {{
    x86_64-linux = fetchurl {{
      url = "{base}/releases/${{version}}/Claude-${{x64CommitHash}}.exe";
      hash = "sha256-AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";
    }};
    aarch64-linux = fetchurl {{
      url = "{base}/arm64/Claude-Setup-arm64.exe";
      hash = "sha256-BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB=";
    }};
  }};
in {{ }}
"#,
            version = version,
            base = server.base_url()
        )
    }

    fn write_package(server: &MockServer, version: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.nix");
        std::fs::write(&path, package_nix(server, version)).unwrap();
        (temp, path)
    }

    fn serve_installers(server: &MockServer, x64_path: &str) {
        server.mock(|when, then| {
            when.method(HEAD).path(x64_path);
            then.status(200);
        });
        server.mock(|when, then| {
            when.method(GET).path(x64_path);
            then.status(200).body("x64 installer");
        });
        server.mock(|when, then| {
            when.method(HEAD).path("/arm64/Claude-Setup-arm64.exe");
            then.status(200);
        });
        server.mock(|when, then| {
            when.method(GET).path("/arm64/Claude-Setup-arm64.exe");
            then.status(200).body("arm64 installer");
        });
    }

    fn updater(server: &MockServer, version: Option<&'static str>) -> Updater {
        let config = UpdaterConfig::default()
            .with_arm64_url(server.url("/arm64/Claude-Setup-arm64.exe"));
        Updater::new(config)
            .unwrap()
            .with_probe(Box::new(FixedVersion(version)))
    }

    #[test]
    fn missing_package_file_is_reported() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let err = updater(&server, Some("1.0.0"))
            .run(&temp.path().join("package.nix"), &mut ui)
            .unwrap_err();
        assert!(matches!(err, CcdError::PackageNotFound { .. }));
    }

    #[test]
    fn new_version_rewrites_package() {
        let server = MockServer::start();
        serve_installers(&server, "/releases/0.9.0/Claude-abc123.exe");
        let (_temp, path) = write_package(&server, "0.9.0");
        let mut ui = MockUI::new();

        let outcome = updater(&server, Some("0.10.0")).run(&path, &mut ui).unwrap();

        assert_eq!(
            outcome,
            UpdateOutcome::Updated {
                from: "0.9.0".into(),
                to: "0.10.0".into()
            }
        );

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(r#"version = "0.10.0";"#));
        assert!(content.contains(&sri_hash_bytes(b"x64 installer")));
        assert!(content.contains(&sri_hash_bytes(b"arm64 installer")));
        assert!(content.contains(r#"x64CommitHash = "abc123";"#));
        assert!(ui.has_success("Update complete! 0.9.0 → 0.10.0"));
        assert!(ui.has_message(VERIFY_HINT));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn same_version_is_up_to_date_and_untouched() {
        let server = MockServer::start();
        serve_installers(&server, "/releases/0.9.0/Claude-abc123.exe");
        let (_temp, path) = write_package(&server, "0.9.0");
        let before = std::fs::read_to_string(&path).unwrap();
        let mut ui = MockUI::new();

        let outcome = updater(&server, Some("0.9.0")).run(&path, &mut ui).unwrap();

        assert_eq!(
            outcome,
            UpdateOutcome::UpToDate {
                version: "0.9.0".into()
            }
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
        assert!(ui.has_message("already up to date"));
    }

    #[test]
    fn older_installer_warns_but_applies() {
        let server = MockServer::start();
        serve_installers(&server, "/releases/0.9.0/Claude-abc123.exe");
        let (_temp, path) = write_package(&server, "0.9.0");
        let mut ui = MockUI::new();

        let outcome = updater(&server, Some("0.8.5")).run(&path, &mut ui).unwrap();

        assert!(matches!(outcome, UpdateOutcome::Updated { .. }));
        assert!(ui.has_warning("older than 0.9.0"));
    }

    #[test]
    fn undetectable_version_is_an_error() {
        let server = MockServer::start();
        serve_installers(&server, "/releases/0.9.0/Claude-abc123.exe");
        let (_temp, path) = write_package(&server, "0.9.0");
        let mut ui = MockUI::new();

        let err = updater(&server, None).run(&path, &mut ui).unwrap_err();
        assert!(matches!(err, CcdError::VersionUndetected));
    }

    #[test]
    fn unreachable_x64_installer_is_an_error() {
        let server = MockServer::start();
        let (_temp, path) = write_package(&server, "0.9.0");
        let mut ui = MockUI::new();

        let err = updater(&server, Some("1.0.0"))
            .run(&path, &mut ui)
            .unwrap_err();
        match err {
            CcdError::InstallerUnreachable { arch, url } => {
                assert_eq!(arch, "x64");
                assert!(url.ends_with("/releases/0.9.0/Claude-abc123.exe"));
            }
            other => panic!("Expected InstallerUnreachable, got {:?}", other),
        }
    }

    #[test]
    fn unreachable_arm64_installer_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(HEAD).path("/releases/0.9.0/Claude-abc123.exe");
            then.status(200);
        });
        let (_temp, path) = write_package(&server, "0.9.0");
        let mut ui = MockUI::new();

        let err = updater(&server, Some("1.0.0"))
            .run(&path, &mut ui)
            .unwrap_err();
        assert!(matches!(
            err,
            CcdError::InstallerUnreachable { ref arch, .. } if arch == "arm64"
        ));
        assert!(ui.has_success("x64 installer is accessible"));
    }

    #[test]
    fn failed_x64_download_is_a_warning_then_undetected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(HEAD).path("/releases/0.9.0/Claude-abc123.exe");
            then.status(200);
        });
        server.mock(|when, then| {
            when.method(GET).path("/releases/0.9.0/Claude-abc123.exe");
            then.status(500);
        });
        server.mock(|when, then| {
            when.method(HEAD).path("/arm64/Claude-Setup-arm64.exe");
            then.status(200);
        });
        let (_temp, path) = write_package(&server, "0.9.0");
        let mut ui = MockUI::new();

        let err = updater(&server, Some("1.0.0"))
            .run(&path, &mut ui)
            .unwrap_err();
        assert!(matches!(err, CcdError::VersionUndetected));
        assert!(ui.has_warning("Failed to extract version"));
    }

    #[test]
    fn newer_version_comparison() {
        assert!(is_newer_version("0.10.0", "0.9.9"));
        assert!(is_newer_version("1.0.0", "0.99.0"));
        assert!(!is_newer_version("0.8.5", "0.9.0"));
        assert!(!is_newer_version("1.2.3", "1.2.3"));
        assert!(is_newer_version("1.2.3", "1.2"));
    }
}
