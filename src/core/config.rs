//! Per-composite file targets and run configuration
//!
//! The tables below are the single source of truth for which files a
//! propagation touches and how the version is anchored inside each one.
//! Paths are fixed relative to the repository root (the invocation
//! directory); they are deliberately not user-configurable.

use crate::core::composite::Composite;
use std::path::PathBuf;

/// Key in the manifest plist holding the canonical current version
pub const MANIFEST_VERSION_KEY: &str = "UILibrarySemVersion";

/// Marketing version assignment inside project.pbxproj; `{}` takes the
/// version with any pre-release suffix stripped
pub const PBX_MARKETING_TEMPLATE: &str = "MARKETING_VERSION = {}";

/// Build-setting anchors read by the derived-mode podspec update
pub const PBX_SWIFT_ANCHOR: &str = "SWIFT_VERSION";
pub const PBX_PLATFORM_ANCHOR: &str = "IPHONEOS_DEPLOYMENT_TARGET";

/// Field anchors inside a podspec
pub const SPEC_VERSION_ANCHOR: &str = "spec.version";
pub const SPEC_SWIFT_ANCHOR: &str = "spec.swift_version";
pub const SPEC_PLATFORM_ANCHOR: &str = "spec.platform";

/// Fixed file set for one composite, paths relative to the repo root
#[derive(Debug)]
pub struct CompositeTargets {
  /// Authoritative manifest holding `UILibrarySemVersion`
  pub info_plist: &'static str,
  /// Test source carrying the telemetry tag
  pub telemetry_file: &'static str,
  /// Telemetry tag template; `{}` takes the full version
  pub telemetry_template: &'static str,
  /// Xcode project build settings
  pub pbxproj: &'static str,
  /// Main repo README; replaced by bare version, unanchored
  pub readme: &'static str,
  /// CocoaPods packaging spec
  pub podspec: &'static str,
}

const CALLING: CompositeTargets = CompositeTargets {
  info_plist: "AzureCommunicationUI/sdk/AzureCommunicationUICalling/Sources/Info.plist",
  telemetry_file: "AzureCommunicationUI/sdk/AzureCommunicationUICalling/Tests/CallCompositeOptions/DiagnosticConfigTests.swift",
  telemetry_template: "aci110/{}",
  pbxproj: "AzureCommunicationUI/sdk/AzureCommunicationUICalling/AzureCommunicationUICalling.xcodeproj/project.pbxproj",
  readme: "README.md",
  podspec: "AzureCommunicationUI/sdk/AzureCommunicationUICalling/AzureCommunicationUICalling.podspec",
};

const CHAT: CompositeTargets = CompositeTargets {
  info_plist: "AzureCommunicationUI/sdk/AzureCommunicationUIChat/Sources/Info.plist",
  telemetry_file: "AzureCommunicationUI/sdk/AzureCommunicationUIChat/Tests/ChatCompositeOptions/DiagnosticConfigTests.swift",
  telemetry_template: "aci120/{}",
  pbxproj: "AzureCommunicationUI/sdk/AzureCommunicationUIChat/AzureCommunicationUIChat.xcodeproj/project.pbxproj",
  readme: "README.md",
  podspec: "AzureCommunicationUI/sdk/AzureCommunicationUIChat/AzureCommunicationUIChat.podspec",
};

impl CompositeTargets {
  /// Look up the fixed file set for a composite
  pub fn for_composite(composite: Composite) -> &'static CompositeTargets {
    match composite {
      Composite::Calling => &CALLING,
      Composite::Chat => &CHAT,
    }
  }
}

/// Immutable configuration for a `bump` run, built once from parsed arguments
#[derive(Debug)]
pub struct BumpConfig {
  pub repo_root: PathBuf,
  pub composite: Composite,
  pub new_version: String,
  pub json: bool,
}

impl BumpConfig {
  pub fn targets(&self) -> &'static CompositeTargets {
    CompositeTargets::for_composite(self.composite)
  }

  pub fn resolve(&self, relative: &str) -> PathBuf {
    self.repo_root.join(relative)
  }
}

/// Where the swift/platform values of a `podspec` run come from
#[derive(Debug)]
pub enum FieldSource {
  /// Values supplied on the command line; `None` skips that step
  User {
    swift: Option<String>,
    platform: Option<String>,
  },
  /// Values read from the Xcode project file; both steps always run
  Project,
}

/// Immutable configuration for a `podspec` run
#[derive(Debug)]
pub struct PodspecConfig {
  pub repo_root: PathBuf,
  pub composite: Composite,
  pub new_version: String,
  pub source: FieldSource,
  pub json: bool,
}

impl PodspecConfig {
  pub fn targets(&self) -> &'static CompositeTargets {
    CompositeTargets::for_composite(self.composite)
  }

  pub fn resolve(&self, relative: &str) -> PathBuf {
    self.repo_root.join(relative)
  }
}
