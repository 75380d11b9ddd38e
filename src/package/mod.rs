//! Maintenance of the Claude Desktop `package.nix`.
//!
//! The Linux package repackages the Windows installers, so keeping it
//! current means finding the newest installer, reading its version and
//! pinning both architectures' hashes.
//!
//! # Modules
//!
//! - [`descriptor`] - Parsing and rewriting `package.nix`
//! - [`fetch`] - Installer accessibility probes and downloads
//! - [`hash`] - SRI hashes for `fetchurl`
//! - [`installer`] - Installer version extraction
//! - [`update`] - The end-to-end update flow

pub mod descriptor;
pub mod fetch;
pub mod hash;
pub mod installer;
pub mod update;

pub use descriptor::{apply_update, PackageDescriptor};
pub use fetch::InstallerFetcher;
pub use hash::{sri_hash_bytes, sri_hash_file};
pub use installer::{version_from_listing, SevenZip, VersionProbe};
pub use update::{UpdateOutcome, Updater, VERIFY_HINT};
