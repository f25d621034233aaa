//! Target package identity ("composite") selection
//!
//! A composite names the product whose file set a run updates. Parsing is
//! strict: anything other than the known identities is a usage error, surfaced
//! before any file I/O happens.

use crate::core::error::ReleaseError;
use std::fmt;
use std::str::FromStr;

/// The composite whose file set this run updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
  Calling,
  Chat,
}

impl Composite {
  pub fn as_str(self) -> &'static str {
    match self {
      Composite::Calling => "calling",
      Composite::Chat => "chat",
    }
  }
}

impl fmt::Display for Composite {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Composite {
  type Err = ReleaseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "calling" => Ok(Composite::Calling),
      "chat" => Ok(Composite::Chat),
      other => Err(ReleaseError::usage_with_help(
        format!("Unknown composite '{}'", other),
        "Supported composites are 'calling' and 'chat'.",
      )),
    }
  }
}
