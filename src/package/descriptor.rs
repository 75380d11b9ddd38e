//! Reading and rewriting `package.nix`.
//!
//! Only the handful of assignments the updater owns are touched; the rest
//! of the file is preserved byte for byte.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{CcdError, Result};

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"version\s*=\s*"([^"]+)""#).expect("valid regex"));

static COMMIT_HASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"x64CommitHash\s*=\s*"([^"]+)""#).expect("valid regex"));

// Body of a `fetchurl { ... }` block up to the attribute we want. `${...}`
// interpolations may contain `}` without closing the block.
const BLOCK_BODY: &str = r"(?:\$\{[^}]*\}|[^}])*?";

static X64_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"x86_64-linux\s*=\s*fetchurl\s*\{{{BLOCK_BODY}url\s*=\s*"([^"]+)""#
    ))
    .expect("valid regex")
});

static X64_HASH_RE: LazyLock<Regex> = LazyLock::new(|| fetchurl_hash_re("x86_64-linux"));

static ARM64_HASH_RE: LazyLock<Regex> = LazyLock::new(|| fetchurl_hash_re("aarch64-linux"));

fn fetchurl_hash_re(system: &str) -> Regex {
    Regex::new(&format!(
        r#"({system}\s*=\s*fetchurl\s*\{{{BLOCK_BODY}hash\s*=\s*")sha256-[A-Za-z0-9+/=]+""#
    ))
    .expect("valid regex")
}

/// The updater-owned fields of a Claude Desktop `package.nix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    /// Current packaged version.
    pub version: String,
    /// Commit hash embedded in the x64 download URL.
    pub x64_commit_hash: String,
    /// x64 URL with `${version}` / `${x64CommitHash}` placeholders.
    pub x64_url_template: String,
}

impl PackageDescriptor {
    /// Parse the descriptor fields out of `content`.
    ///
    /// `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let capture = |re: &Regex, field: &str| -> Result<String> {
            re.captures(content)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .ok_or_else(|| CcdError::PackageFieldMissing {
                    field: field.to_string(),
                    path: path.to_path_buf(),
                })
        };

        Ok(Self {
            version: capture(&VERSION_RE, "version")?,
            x64_commit_hash: capture(&COMMIT_HASH_RE, "x64CommitHash")?,
            x64_url_template: capture(&X64_URL_RE, "x86_64-linux URL")?,
        })
    }

    /// The x64 installer URL for the current version.
    pub fn x64_url(&self) -> String {
        self.x64_url_template
            .replace("${version}", &self.version)
            .replace("${x64CommitHash}", &self.x64_commit_hash)
    }
}

/// Rewrite `content` for a new version and installer hashes.
///
/// Every `version = "..."` assignment is replaced, as are the `sha256-`
/// hashes inside the `x86_64-linux` and `aarch64-linux` fetchurl blocks.
pub fn apply_update(content: &str, version: &str, x64_hash: &str, arm64_hash: &str) -> String {
    let content = VERSION_RE.replace_all(content, |_: &regex::Captures<'_>| {
        format!(r#"version = "{}""#, version)
    });
    let content = X64_HASH_RE.replace_all(&content, |caps: &regex::Captures<'_>| {
        format!(r#"{}{}""#, &caps[1], x64_hash)
    });
    let content = ARM64_HASH_RE.replace_all(&content, |caps: &regex::Captures<'_>| {
        format!(r#"{}{}""#, &caps[1], arm64_hash)
    });
    content.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKAGE_NIX: &str = r#"{ lib, stdenvNoCC, fetchurl, p7zip }:
let
  version = "0.14.10";
  x64CommitHash = "3f2a1b9";
  srcs = {
    x86_64-linux = fetchurl {
      url = "https://downloads.claude.ai/releases/win32/x64/${version}/Claude-${x64CommitHash}.exe";
      hash = "sha256-AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";
    };
    aarch64-linux = fetchurl {
      url = "https://storage.googleapis.com/nest-win-arm64/Claude-Setup-arm64.exe";
      hash = "sha256-BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB=";
    };
  };
in
stdenvNoCC.mkDerivation {
  pname = "claude-desktop";
  inherit version;
}
"#;

    fn parse(content: &str) -> Result<PackageDescriptor> {
        PackageDescriptor::parse(content, Path::new("package.nix"))
    }

    #[test]
    fn parses_descriptor_fields() {
        let desc = parse(PACKAGE_NIX).unwrap();
        assert_eq!(desc.version, "0.14.10");
        assert_eq!(desc.x64_commit_hash, "3f2a1b9");
        assert!(desc.x64_url_template.contains("${version}"));
    }

    #[test]
    fn x64_url_substitutes_placeholders() {
        let desc = parse(PACKAGE_NIX).unwrap();
        assert_eq!(
            desc.x64_url(),
            "https://downloads.claude.ai/releases/win32/x64/0.14.10/Claude-3f2a1b9.exe"
        );
    }

    #[test]
    fn missing_version_is_reported() {
        let content = PACKAGE_NIX.replace(r#"version = "0.14.10";"#, "");
        let err = parse(&content).unwrap_err();
        assert!(matches!(
            err,
            CcdError::PackageFieldMissing { ref field, .. } if field == "version"
        ));
    }

    #[test]
    fn missing_commit_hash_is_reported() {
        let content = PACKAGE_NIX.replace("x64CommitHash = ", "commit = ");
        let err = parse(&content).unwrap_err();
        assert!(err.to_string().contains("x64CommitHash"));
    }

    #[test]
    fn missing_x64_block_is_reported() {
        let content = PACKAGE_NIX.replace("x86_64-linux", "i686-linux");
        let err = parse(&content).unwrap_err();
        assert!(err.to_string().contains("x86_64-linux URL"));
    }

    #[test]
    fn apply_update_rewrites_version_and_hashes() {
        let updated = apply_update(
            PACKAGE_NIX,
            "0.15.0",
            "sha256-x64x64x64x64x64x64x64x64x64x64x64x64x64x64x6=",
            "sha256-armarmarmarmarmarmarmarmarmarmarmarmarmarma=",
        );

        assert!(updated.contains(r#"version = "0.15.0";"#));
        assert!(!updated.contains("0.14.10"));
        assert!(updated.contains(
            r#"hash = "sha256-x64x64x64x64x64x64x64x64x64x64x64x64x64x64x6=";"#
        ));
        assert!(updated.contains(
            r#"hash = "sha256-armarmarmarmarmarmarmarmarmarmarmarmarmarma=";"#
        ));
        assert!(!updated.contains("AAAAAAAA"));
        assert!(!updated.contains("BBBBBBBB"));
    }

    #[test]
    fn apply_update_keeps_commit_hash_and_other_lines() {
        let updated = apply_update(PACKAGE_NIX, "0.15.0", "sha256-x=", "sha256-y=");
        assert!(updated.contains(r#"x64CommitHash = "3f2a1b9";"#));
        assert!(updated.contains(r#"pname = "claude-desktop";"#));
        assert!(updated.contains("inherit version;"));
        assert_eq!(
            updated.lines().count(),
            PACKAGE_NIX.lines().count(),
            "line structure must be preserved"
        );
    }

    #[test]
    fn updated_content_parses_with_new_version() {
        let updated = apply_update(PACKAGE_NIX, "1.0.0", "sha256-x=", "sha256-y=");
        let desc = parse(&updated).unwrap();
        assert_eq!(desc.version, "1.0.0");
        assert!(desc.x64_url().contains("/1.0.0/"));
    }
}
