//! Authoritative property-list manifest holding the canonical version
//!
//! The manifest is parsed fully into memory so the final write-back reuses
//! the already-loaded document instead of re-reading the file.

use crate::core::config::MANIFEST_VERSION_KEY;
use crate::core::error::{ReleaseError, ReleaseResult};
use plist::Value;
use std::path::{Path, PathBuf};

/// A loaded manifest document
pub struct Manifest {
  path: PathBuf,
  doc: Value,
}

impl Manifest {
  /// Parse the manifest at `path`; an unparsable document is fatal
  pub fn load(path: &Path) -> ReleaseResult<Self> {
    let doc = Value::from_file(path)?;
    Ok(Self {
      path: path.to_path_buf(),
      doc,
    })
  }

  /// Current recorded version under `UILibrarySemVersion`
  pub fn version(&self) -> ReleaseResult<&str> {
    self
      .doc
      .as_dictionary()
      .and_then(|dict| dict.get(MANIFEST_VERSION_KEY))
      .and_then(Value::as_string)
      .ok_or_else(|| ReleaseError::lookup(MANIFEST_VERSION_KEY, self.path.display()))
  }

  /// Mutate the recorded version in memory; `save` persists it
  pub fn set_version(&mut self, new_version: &str) -> ReleaseResult<()> {
    let dict = self
      .doc
      .as_dictionary_mut()
      .ok_or_else(|| ReleaseError::lookup(MANIFEST_VERSION_KEY, self.path.display()))?;
    dict.insert(MANIFEST_VERSION_KEY.to_string(), Value::String(new_version.to_string()));
    Ok(())
  }

  /// Re-serialize the whole document as XML to its original path
  pub fn save(&self) -> ReleaseResult<()> {
    self.doc.to_file_xml(&self.path)?;
    Ok(())
  }
}
