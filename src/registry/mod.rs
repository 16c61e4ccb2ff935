//! Route registry patching
//!
//! The registry (`lib/routes/app_router.dart`) is a generated, possibly
//! hand-edited Dart file with three append-only regions: import lines, the
//! constant pairs inside `abstract class Router {`, and the `routes` list.
//! Registering a page means merging one declaration into each region while
//! leaving every other byte untouched.
//!
//! ## Modules
//!
//! - `scanner` - locates anchor offsets in free-form text
//! - `merger` - computes idempotent insertions against those anchors
//! - `patcher` - orchestrates one atomic read-modify-write cycle
//!
//! ## Design
//!
//! The three insertions are planned against a single scan of the original
//! document and applied in one pass: either the registry gains all of them
//! (minus any that are already present) or it is left byte-identical. Missing
//! anchors are outcomes, not errors; only I/O fails hard.

pub mod merger;
pub mod patcher;
pub mod scanner;

pub use patcher::{DocumentPatch, PatchError, RegistryPatcher, patch_document};

use crate::naming::NameForms;

/// Everything the patcher needs to register one page.
///
/// Derived from a [`NameForms`] per generation call; never mutated, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Bare Dart identifier used as the constant stem (`userProfile`)
    pub identifier: String,
    /// Route path with leading slash (`/user_profile`)
    pub path: String,
    /// Route name (`user_profile`)
    pub route_name: String,
    /// Page widget type (`UserProfilePage`)
    pub widget_type: String,
    /// Import path of the page file, relative to the registry
    pub import_path: String,
}

impl RouteDescriptor {
    pub fn from_forms(forms: &NameForms) -> Self {
        Self {
            identifier: forms.identifier.clone(),
            path: forms.path.clone(),
            route_name: forms.route_name().to_string(),
            widget_type: forms.page_type(),
            import_path: format!("../pages/{snake}/{snake}_page.dart", snake = forms.snake),
        }
    }

    /// The import line merged into the import block.
    pub fn import_line(&self) -> String {
        format!("import '{}';", self.import_path)
    }

    /// The constant pair merged into the `Router` container.
    pub fn constant_lines(&self) -> String {
        format!(
            "  static const String {id} = '{path}';\n  static const String {id}Name = '{name}';",
            id = self.identifier,
            path = self.path,
            name = self.route_name,
        )
    }

    /// The entry block merged into the `routes` list.
    pub fn entry_block(&self) -> String {
        format!(
            "    AppRoute(\n      path: Router.{id},\n      name: Router.{id}Name,\n      builder: (context) => const {widget}(),\n    ),",
            id = self.identifier,
            widget = self.widget_type,
        )
    }
}

/// Which anchor blocked a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingAnchor {
    /// No import line anywhere in the document
    Imports,
    /// No `abstract class Router {` container
    ConstantBlock,
    /// Container present but no existing constant pair to anchor on
    ConstantPair,
    /// No `routes = [` list, or no matching closing bracket
    RouteList,
}

impl MissingAnchor {
    pub fn describe(self) -> &'static str {
        match self {
            MissingAnchor::Imports => "no import line",
            MissingAnchor::ConstantBlock => "no Router container",
            MissingAnchor::ConstantPair => "no existing constant pair",
            MissingAnchor::RouteList => "no routes list",
        }
    }
}

/// How one patch invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchDetail {
    /// At least one declaration was inserted and the file rewritten
    Applied,
    /// All three declarations were already present; nothing written
    AlreadyRegistered,
    /// Registry file does not exist; nothing written
    SkippedNoRegistry,
    /// A required anchor is missing; nothing written
    SkippedMissingAnchor(MissingAnchor),
}

/// Outcome reported back to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchOutcome {
    /// True when the document changed
    pub applied: bool,
    pub detail: PatchDetail,
}

impl PatchOutcome {
    pub fn from_detail(detail: PatchDetail) -> Self {
        Self {
            applied: matches!(detail, PatchDetail::Applied),
            detail,
        }
    }
}
