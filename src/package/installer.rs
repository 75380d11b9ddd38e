//! Reading the Claude Desktop version out of a Windows installer.
//!
//! The Squirrel installer bundles a NuGet package named
//! `AnthropicClaude-<version>-full.nupkg`; the version is taken from that
//! name, either straight from the archive listing or from the extracted
//! files.

use regex::Regex;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use crate::error::{CcdError, Result};

static NUPKG_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AnthropicClaude-(\d+\.\d+\.\d+)").expect("valid regex"));

/// Anything that can tell which version an installer ships.
pub trait VersionProbe {
    /// Version bundled in `installer`, or `None` if it can't be determined.
    fn installer_version(&self, installer: &Path) -> Option<String>;
}

/// Find the first `AnthropicClaude-x.y.z` version in `text`.
pub fn version_from_listing(text: &str) -> Option<String> {
    NUPKG_VERSION_RE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Version probe backed by the `7z` command-line tool.
#[derive(Debug, Clone)]
pub struct SevenZip {
    program: PathBuf,
}

impl SevenZip {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `7z l <installer>`.
    pub fn list(&self, installer: &Path) -> Result<String> {
        let output = self.run(&[OsStr::new("l"), installer.as_os_str()])?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    /// `7z x -y <installer> -o<dest>`.
    pub fn extract(&self, installer: &Path, dest: &Path) -> Result<()> {
        let mut out_flag = OsString::from("-o");
        out_flag.push(dest.as_os_str());
        self.run(&[
            OsStr::new("x"),
            OsStr::new("-y"),
            installer.as_os_str(),
            out_flag.as_os_str(),
        ])?;
        Ok(())
    }

    fn run(&self, args: &[&OsStr]) -> Result<Vec<u8>> {
        let output = Command::new(&self.program).args(args).output()?;

        if !output.status.success() {
            let command = std::iter::once(self.program.as_os_str())
                .chain(args.iter().copied())
                .map(|a| a.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ");
            return Err(CcdError::CommandFailed {
                command,
                code: output.status.code(),
            });
        }

        Ok(output.stdout)
    }

    fn version_from_extracted(&self, installer: &Path) -> Result<Option<String>> {
        let temp = tempfile::TempDir::new()?;
        self.extract(installer, temp.path())?;

        for entry in std::fs::read_dir(temp.path())? {
            let name = entry?.file_name();
            let name = name.to_string_lossy();
            if name.starts_with("AnthropicClaude-") && name.ends_with(".nupkg") {
                if let Some(version) = version_from_listing(&name) {
                    return Ok(Some(version));
                }
            }
        }

        Ok(None)
    }
}

impl Default for SevenZip {
    fn default() -> Self {
        Self::new("7z")
    }
}

impl VersionProbe for SevenZip {
    fn installer_version(&self, installer: &Path) -> Option<String> {
        let listed = match self.list(installer) {
            Ok(listing) => version_from_listing(&listing),
            Err(e) => {
                tracing::debug!("7z listing failed: {}", e);
                return None;
            }
        };

        if listed.is_some() {
            return listed;
        }

        match self.version_from_extracted(installer) {
            Ok(version) => version,
            Err(e) => {
                tracing::debug!("7z extraction failed: {}", e);
                None
            }
        }
    }
}
