//! Integration tests for the `podspec` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_podspec_updates_version_and_skips_optional_fields() -> Result<()> {
  let repo = TestRepo::new("1.0.0-beta.3")?;

  let output = run_release(&repo.path, &["podspec", "-c", "calling", "-v", "1.0.0-beta.4"])?;

  let podspec = repo.read(CALLING_PODSPEC)?;
  assert!(podspec.contains("spec.version = '1.0.0-beta.4'"));
  assert!(podspec.contains("spec.swift_version = '5.0'"));
  assert!(podspec.contains("spec.platform = :ios, '13.0'"));

  let out = stdout(&output);
  assert!(out.contains("Step 1 of 3, spec.version updated to 1.0.0-beta.4 from 1.0.0-beta.3"));
  assert!(out.contains("Step 2 of 3. Skipped"));
  assert!(out.contains("Step 3 of 3. Skipped"));
  Ok(())
}

#[test]
fn test_podspec_user_supplied_swift_and_platform() -> Result<()> {
  let repo = TestRepo::new("1.0.0")?;

  let output = run_release(
    &repo.path,
    &["podspec", "-c", "calling", "-v", "1.1.0", "-s", "5.5", "-p", "14.0"],
  )?;

  let podspec = repo.read(CALLING_PODSPEC)?;
  assert!(podspec.contains("spec.version = '1.1.0'"));
  assert!(podspec.contains("spec.swift_version = '5.5'"));
  assert!(podspec.contains("spec.platform = :ios, '14.0'"));

  let out = stdout(&output);
  assert!(out.contains("Step 2 of 3, spec.swift_version updated to 5.5 from 5.0"));
  assert!(out.contains("Step 3 of 3, spec.platform updated to 14.0 from 13.0"));
  Ok(())
}

#[test]
fn test_podspec_derived_mode_ignores_user_flags() -> Result<()> {
  let repo = TestRepo::new("1.0.0")?;
  // Project file records 5.0 / 13.0; the flags below must lose
  let output = run_release(
    &repo.path,
    &[
      "podspec",
      "-c",
      "calling",
      "-v",
      "1.1.0",
      "-s",
      "9.9",
      "-p",
      "99.0",
      "--from-project",
    ],
  )?;

  let podspec = repo.read(CALLING_PODSPEC)?;
  assert!(podspec.contains("spec.swift_version = '5.0'"));
  assert!(podspec.contains("spec.platform = :ios, '13.0'"));
  assert!(!podspec.contains("9.9"));

  let out = stdout(&output);
  assert!(!out.contains("Skipped"));
  Ok(())
}

#[test]
fn test_podspec_derived_mode_rewrites_changed_platform() -> Result<()> {
  let repo = TestRepo::new("1.0.0")?;
  repo.write(
    CALLING_PBXPROJ,
    "buildSettings = {\n    IPHONEOS_DEPLOYMENT_TARGET = 15.0;\n    MARKETING_VERSION = 1.0.0;\n    SWIFT_VERSION = 5.9;\n};\n",
  )?;

  run_release(&repo.path, &["podspec", "-c", "calling", "-v", "1.1.0", "--from-project"])?;

  let podspec = repo.read(CALLING_PODSPEC)?;
  assert!(podspec.contains("spec.swift_version = '5.9'"));
  assert!(podspec.contains("spec.platform = :ios, '15.0'"));
  Ok(())
}

#[test]
fn test_podspec_derived_mode_missing_anchor_is_fatal() -> Result<()> {
  let repo = TestRepo::new("1.0.0")?;
  repo.write(CALLING_PBXPROJ, "buildSettings = {\n    MARKETING_VERSION = 1.0.0;\n};\n")?;

  let output = run_release_raw(&repo.path, &["podspec", "-c", "calling", "-v", "1.1.0", "--from-project"])?;

  assert_eq!(output.status.code(), Some(3));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("SWIFT_VERSION"));
  Ok(())
}

#[test]
fn test_podspec_missing_version_anchor_is_fatal() -> Result<()> {
  let repo = TestRepo::new("1.0.0")?;
  repo.write(CALLING_PODSPEC, "Pod::Spec.new do |spec|\n  spec.name = 'X'\nend\n")?;

  let output = run_release_raw(&repo.path, &["podspec", "-c", "calling", "-v", "1.1.0"])?;

  assert_eq!(output.status.code(), Some(3));
  Ok(())
}

#[test]
fn test_podspec_unknown_composite_touches_nothing() -> Result<()> {
  let repo = TestRepo::new("1.0.0")?;
  let before = repo.snapshot()?;

  let output = run_release_raw(&repo.path, &["podspec", "-c", "video", "-v", "1.1.0"])?;

  assert_eq!(output.status.code(), Some(1));
  assert_eq!(repo.snapshot()?, before);
  Ok(())
}

#[test]
fn test_podspec_json_report() -> Result<()> {
  let repo = TestRepo::new("1.0.0")?;

  let output = run_release(
    &repo.path,
    &["podspec", "-c", "calling", "-v", "1.1.0", "-s", "5.5", "--json"],
  )?;

  let report: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(report["composite"], "calling");
  assert_eq!(report["version"]["old"], "1.0.0");
  assert_eq!(report["version"]["new"], "1.1.0");
  assert_eq!(report["swift"]["new"], "5.5");
  assert!(report["platform"].is_null());
  Ok(())
}
