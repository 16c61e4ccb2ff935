#![forbid(unsafe_code)]
//! Fledge - scaffolding CLI for Flutter-style projects
//!
//! Given a symbolic feature name, fledge emits Dart source files from
//! templates (pages, models, entities) and merges new page declarations into
//! the central route registry without parsing Dart: recognized structural
//! anchors mark where imports, constant pairs and route entries may be
//! spliced in, and every other byte is preserved.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: template modules emit Dart as string literals; Dart
//!   syntax in those strings is output text, not Rust code.

pub mod cli;
pub mod naming;
pub mod registry;
pub mod scaffold;

pub use naming::{NameError, NameForms, derive};
pub use registry::{
    MissingAnchor, PatchDetail, PatchError, PatchOutcome, RegistryPatcher, RouteDescriptor,
    patch_document,
};
pub use scaffold::{ScaffoldError, Scaffolder};
