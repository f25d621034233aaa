//! Error types for composite-release with contextual messages and exit codes
//!
//! Errors fall into three categories with distinct exit codes: usage errors
//! (reported before any file I/O), system errors (I/O, malformed manifest),
//! and lookup failures (an anchor or version-shaped pattern missing from a
//! file that was expected to contain one).

use std::fmt;
use std::io;

/// Exit codes for composite-release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// Usage error (missing version, unknown composite)
  Usage = 1,
  /// System error (I/O, unparsable manifest)
  System = 2,
  /// Lookup failure (anchor or version pattern not found in a file)
  Lookup = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for composite-release
#[derive(Debug)]
pub enum ReleaseError {
  /// Operator mistakes, surfaced before any file is touched
  Usage { message: String, help: Option<String> },

  /// An anchor or version-shaped pattern was not found where expected
  Lookup { what: String, file: String },

  /// The property-list manifest could not be parsed or re-serialized
  Manifest(plist::Error),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message { message: String, context: Option<String> },
}

impl ReleaseError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
    }
  }

  /// Create a usage error with help text
  pub fn usage_with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ReleaseError::Usage {
      message: msg.into(),
      help: Some(help.into()),
    }
  }

  /// Create a lookup failure for a missing anchor or pattern
  pub fn lookup(what: impl Into<String>, file: impl fmt::Display) -> Self {
    ReleaseError::Lookup {
      what: what.into(),
      file: file.to_string(),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ReleaseError::Message { message, context } => ReleaseError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
      },
      ReleaseError::Io(e) => ReleaseError::Message {
        message: format!("{}: {}", ctx_str, e),
        context: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReleaseError::Usage { .. } => ExitCode::Usage,
      ReleaseError::Lookup { .. } => ExitCode::Lookup,
      ReleaseError::Manifest(_) => ExitCode::System,
      ReleaseError::Io(_) => ExitCode::System,
      ReleaseError::Message { .. } => ExitCode::System,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::Usage { help, .. } => help.clone(),
      ReleaseError::Lookup { file, .. } => Some(format!(
        "Check that {} has the expected layout; earlier steps of this run may already be written.",
        file
      )),
      _ => None,
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::Usage { message, .. } => write!(f, "{}", message),
      ReleaseError::Lookup { what, file } => {
        write!(f, "'{}' not found in {}", what, file)
      }
      ReleaseError::Manifest(e) => write!(f, "Manifest error: {}", e),
      ReleaseError::Io(e) => write!(f, "I/O error: {}", e),
      ReleaseError::Message { message, context } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ReleaseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReleaseError::Io(e) => Some(e),
      ReleaseError::Manifest(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ReleaseError {
  fn from(err: io::Error) -> Self {
    ReleaseError::Io(err)
  }
}

impl From<plist::Error> for ReleaseError {
  fn from(err: plist::Error) -> Self {
    ReleaseError::Manifest(err)
  }
}

impl From<regex::Error> for ReleaseError {
  fn from(err: regex::Error) -> Self {
    ReleaseError::message(format!("Regex error: {}", err))
  }
}

impl From<serde_json::Error> for ReleaseError {
  fn from(err: serde_json::Error) -> Self {
    ReleaseError::message(format!("JSON error: {}", err))
  }
}

impl From<String> for ReleaseError {
  fn from(msg: String) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<&str> for ReleaseError {
  fn from(msg: &str) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<anyhow::Error> for ReleaseError {
  fn from(err: anyhow::Error) -> Self {
    ReleaseError::message(err.to_string())
  }
}

/// Result type alias for composite-release
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ReleaseError>,
{
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ReleaseError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
