//! Podspec field extraction and rewriting
//!
//! Values are located by a literal field-name anchor and the next line
//! break, then narrowed with a version-shaped pattern. A missing anchor or
//! a segment with no version-shaped substring is fatal; there is no
//! default and no recovery.

use crate::core::error::{ReleaseError, ReleaseResult, ResultExt};
use crate::core::propagate::replace_in_file;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Three dotted components with an optional `-identifier.N` suffix
fn full_version_pattern() -> Regex {
  Regex::new(r"(?i)\d+\.\d+\.\d+(-[a-z]+\.\d+)?").expect("regex for full versions")
}

/// Bare `MAJOR.MINOR` pair, used for swift and platform fields
fn short_version_pattern() -> Regex {
  Regex::new(r"\d+\.\d+").expect("regex for short versions")
}

/// Smallest substring between the literal `anchor` and the next line break
pub fn extract_segment<'a>(content: &'a str, anchor: &str, file: &Path) -> ReleaseResult<&'a str> {
  let start = content
    .find(anchor)
    .ok_or_else(|| ReleaseError::lookup(anchor, file.display()))?;
  let rest = &content[start + anchor.len()..];
  let end = rest
    .find('\n')
    .ok_or_else(|| ReleaseError::lookup(anchor, file.display()))?;
  Ok(&rest[..end])
}

/// First version-shaped substring within the segment after `anchor`
fn extract_version(content: &str, anchor: &str, pattern: &Regex, file: &Path) -> ReleaseResult<String> {
  let segment = extract_segment(content, anchor, file)?;
  let found = pattern
    .find(segment)
    .ok_or_else(|| ReleaseError::lookup(format!("version after '{}'", anchor), file.display()))?;
  Ok(found.as_str().to_string())
}

/// Outcome of one podspec field rewrite
#[derive(Debug, Clone, Serialize)]
pub struct FieldUpdate {
  pub field: &'static str,
  pub old: String,
  pub new: String,
}

/// Update the primary `spec.version` field: extract the current value with
/// the full-version pattern, then substring-replace it across the file.
pub fn update_version_field(path: &Path, anchor: &'static str, new_version: &str) -> ReleaseResult<FieldUpdate> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  let current = extract_version(&content, anchor, &full_version_pattern(), path)?;
  replace_in_file(path, &current, new_version)?;
  Ok(FieldUpdate {
    field: anchor,
    old: current,
    new: new_version.to_string(),
  })
}

/// Update a short-form field (`spec.swift_version`, `spec.platform`)
pub fn update_short_field(path: &Path, anchor: &'static str, new_value: &str) -> ReleaseResult<FieldUpdate> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  let current = extract_version(&content, anchor, &short_version_pattern(), path)?;
  replace_in_file(path, &current, new_value)?;
  Ok(FieldUpdate {
    field: anchor,
    old: current,
    new: new_value.to_string(),
  })
}

/// Read a dotted-pair build-setting value from the Xcode project file.
/// Used by derived mode; a missing anchor is fatal.
pub fn derive_from_project(pbxproj: &Path, anchor: &str) -> ReleaseResult<String> {
  let content = fs::read_to_string(pbxproj).with_context(|| format!("Failed to read {}", pbxproj.display()))?;
  extract_version(&content, anchor, &short_version_pattern(), pbxproj)
}
