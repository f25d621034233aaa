//! CLI commands for composite-release
//!
//! - **bump**: propagate a new version across the composite's dependent
//!   files and the authoritative manifest
//! - **podspec**: rewrite version-shaped fields inside the composite's
//!   packaging spec, user-supplied or derived from the project file

pub mod bump;
pub mod podspec;

pub use bump::run_bump;
pub use podspec::run_podspec;
