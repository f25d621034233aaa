//! Substring replacement engine and the ordered propagation plan
//!
//! Substitutions are plain substring replaces of all occurrences, never
//! regex. Where a target embeds the version inside a larger literal (the
//! telemetry tag path, the marketing-version assignment), old and new
//! patterns are built by filling the template with the respective versions
//! before the replace runs. Steps run in a fixed order with no rollback; a
//! mid-sequence failure leaves earlier files already rewritten.

use crate::core::config::{BumpConfig, PBX_MARKETING_TEMPLATE};
use crate::core::error::{ReleaseResult, ResultExt};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fill a `{}` template with a version string
pub fn fill(template: &str, version: &str) -> String {
  template.replace("{}", version)
}

/// Truncate at the first `-beta` marker and drop everything after it.
/// Project build settings do not accept pre-release suffixes.
pub fn strip_prerelease(version: &str) -> &str {
  match version.find("-beta") {
    Some(idx) => &version[..idx],
    None => version,
  }
}

/// One pending file rewrite in the propagation sequence
#[derive(Debug, Clone, Serialize)]
pub struct Replacement {
  pub label: &'static str,
  pub path: PathBuf,
  pub from: String,
  pub to: String,
}

/// Replace every occurrence of `from` with `to` in the file at `path`,
/// truncating and rewriting it in place. Returns the occurrence count;
/// an absent pattern is a silent no-op, not an error.
pub fn replace_in_file(path: &Path, from: &str, to: &str) -> ReleaseResult<usize> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  let count = content.matches(from).count();
  if count > 0 && from != to {
    fs::write(path, content.replace(from, to)).with_context(|| format!("Failed to write {}", path.display()))?;
  }
  Ok(count)
}

/// Ordered dependent-file rewrites for one bump run. The manifest
/// write-back is the final step and is handled by the caller, which
/// already holds the parsed document.
pub fn plan(config: &BumpConfig, old_version: &str) -> Vec<Replacement> {
  let targets = config.targets();

  vec![
    Replacement {
      label: "telemetry",
      path: config.resolve(targets.telemetry_file),
      from: fill(targets.telemetry_template, old_version),
      to: fill(targets.telemetry_template, &config.new_version),
    },
    // Bare, unanchored replace: corrupts unrelated text that happens to
    // contain the old version string. Known sharp edge, kept as-is.
    Replacement {
      label: "readme",
      path: config.resolve(targets.readme),
      from: old_version.to_string(),
      to: config.new_version.clone(),
    },
    Replacement {
      label: "pbxproj",
      path: config.resolve(targets.pbxproj),
      from: fill(PBX_MARKETING_TEMPLATE, strip_prerelease(old_version)),
      to: fill(PBX_MARKETING_TEMPLATE, strip_prerelease(&config.new_version)),
    },
  ]
}
