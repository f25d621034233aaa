//! `podspec` command: rewrite version fields inside the composite's podspec
//!
//! `spec.version` always updates. `spec.swift_version` and `spec.platform`
//! update from user-supplied flags (absent flag = logged skip) or, with
//! `--from-project`, from the Xcode project's build settings, in which case
//! both steps always run and any user-supplied values are ignored.

use crate::core::config::{
  FieldSource, PodspecConfig, PBX_PLATFORM_ANCHOR, PBX_SWIFT_ANCHOR, SPEC_PLATFORM_ANCHOR, SPEC_SWIFT_ANCHOR,
  SPEC_VERSION_ANCHOR,
};
use crate::core::error::{ReleaseError, ReleaseResult};
use crate::core::podspec::{self, FieldUpdate};
use serde::Serialize;
use std::path::Path;

/// Machine-readable summary of a podspec run
#[derive(Debug, Serialize)]
pub struct PodspecReport {
  pub composite: String,
  pub version: FieldUpdate,
  pub swift: Option<FieldUpdate>,
  pub platform: Option<FieldUpdate>,
}

pub fn run_podspec(config: &PodspecConfig) -> ReleaseResult<()> {
  if config.new_version.is_empty() {
    return Err(ReleaseError::usage_with_help(
      "A new version is required",
      "Usage: composite-release podspec -c <calling|chat> -v NEW_VERSION [-s SWIFT_VERSION] [-p PLATFORM_VERSION] [--from-project]",
    ));
  }

  let targets = config.targets();
  let podspec_path = config.resolve(targets.podspec);

  let version = podspec::update_version_field(&podspec_path, SPEC_VERSION_ANCHOR, &config.new_version)?;
  notice(config, 1, Some(&version));

  // Resolve swift/platform values up front so derived-mode lookup failures
  // surface before either field is rewritten
  let (swift_value, platform_value) = match &config.source {
    FieldSource::User { swift, platform } => (swift.clone(), platform.clone()),
    FieldSource::Project => {
      let pbxproj = config.resolve(targets.pbxproj);
      (
        Some(podspec::derive_from_project(&pbxproj, PBX_SWIFT_ANCHOR)?),
        Some(podspec::derive_from_project(&pbxproj, PBX_PLATFORM_ANCHOR)?),
      )
    }
  };

  let swift = update_optional(config, &podspec_path, SPEC_SWIFT_ANCHOR, swift_value.as_deref(), 2)?;
  let platform = update_optional(config, &podspec_path, SPEC_PLATFORM_ANCHOR, platform_value.as_deref(), 3)?;

  if config.json {
    let report = PodspecReport {
      composite: config.composite.to_string(),
      version,
      swift,
      platform,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
  }

  Ok(())
}

fn update_optional(
  config: &PodspecConfig,
  podspec_path: &Path,
  anchor: &'static str,
  value: Option<&str>,
  step: usize,
) -> ReleaseResult<Option<FieldUpdate>> {
  match value {
    Some(new_value) => {
      let update = podspec::update_short_field(podspec_path, anchor, new_value)?;
      notice(config, step, Some(&update));
      Ok(Some(update))
    }
    None => {
      notice(config, step, None);
      Ok(None)
    }
  }
}

fn notice(config: &PodspecConfig, step: usize, update: Option<&FieldUpdate>) {
  if config.json {
    return;
  }
  match update {
    Some(u) => println!("Step {} of 3, {} updated to {} from {}", step, u.field, u.new, u.old),
    None => println!("Step {} of 3. Skipped", step),
  }
}
