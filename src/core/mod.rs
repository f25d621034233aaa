//! Core engine for composite-release operations
//!
//! - **composite**: target package identity parsing
//! - **config**: per-composite file target tables and run configuration
//! - **error**: categorized error types with exit codes
//! - **manifest**: property-list manifest read/mutate/write
//! - **podspec**: anchored podspec field extraction and rewriting
//! - **propagate**: substring replacement engine and the propagation plan

pub mod composite;
pub mod config;
pub mod error;
pub mod manifest;
pub mod podspec;
pub mod propagate;
