//! `bump` command: propagate a new version across the composite's files
//!
//! Reads the canonical current version from the manifest plist, then
//! rewrites the telemetry tag, README, and project build settings before
//! writing the new version back into the manifest. Old == new is a
//! deliberate no-op success, never an error.

use crate::core::config::BumpConfig;
use crate::core::error::{ReleaseError, ReleaseResult};
use crate::core::manifest::Manifest;
use crate::core::propagate;
use serde::Serialize;

/// Outcome of one propagation step, for `--json` reports
#[derive(Debug, Serialize)]
pub struct StepReport {
  pub step: &'static str,
  pub file: String,
  pub replaced: usize,
}

/// Machine-readable summary of a bump run
#[derive(Debug, Serialize)]
pub struct PropagationReport {
  pub composite: String,
  pub old_version: String,
  pub new_version: String,
  pub skipped: bool,
  pub steps: Vec<StepReport>,
}

pub fn run_bump(config: &BumpConfig) -> ReleaseResult<()> {
  if config.new_version.is_empty() {
    return Err(ReleaseError::usage_with_help(
      "A new version is required",
      "Usage: composite-release bump -c <calling|chat> -v NEW_VERSION",
    ));
  }

  let targets = config.targets();
  let manifest_path = config.resolve(targets.info_plist);
  let mut manifest = Manifest::load(&manifest_path)?;
  let old_version = manifest.version()?.to_string();

  if old_version == config.new_version {
    if config.json {
      let report = PropagationReport {
        composite: config.composite.to_string(),
        old_version,
        new_version: config.new_version.clone(),
        skipped: true,
        steps: Vec::new(),
      };
      println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
      println!("Update skipped, new version and old version are the same");
    }
    return Ok(());
  }

  if !config.json {
    println!(
      "Current version is {}, upgrading to {}",
      old_version, config.new_version
    );
  }

  let plan = propagate::plan(config, &old_version);
  let total = plan.len() + 1; // manifest write-back is the final step
  let mut steps = Vec::new();

  for (i, step) in plan.iter().enumerate() {
    let replaced = propagate::replace_in_file(&step.path, &step.from, &step.to)?;
    if !config.json {
      println!("✅ {} - done, {} of {}", step.label, i + 1, total);
    }
    steps.push(StepReport {
      step: step.label,
      file: step.path.display().to_string(),
      replaced,
    });
  }

  manifest.set_version(&config.new_version)?;
  manifest.save()?;
  if !config.json {
    println!("✅ manifest - done, {} of {}", total, total);
  }
  steps.push(StepReport {
    step: "manifest",
    file: manifest_path.display().to_string(),
    replaced: 1,
  });

  if config.json {
    let report = PropagationReport {
      composite: config.composite.to_string(),
      old_version,
      new_version: config.new_version.clone(),
      skipped: false,
      steps,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
  }

  Ok(())
}
