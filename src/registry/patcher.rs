//! Patch orchestration
//!
//! One invocation is one read-modify-write cycle against the registry file:
//! load, scan, plan all three insertions, splice, persist. The cycle is
//! terminal (no retry) and atomic with respect to the document: a missing
//! anchor leaves the file byte-identical instead of half-registered.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{MissingAnchor, PatchDetail, PatchOutcome, RouteDescriptor, merger, scanner};

/// Hard failures while patching. Missing anchors are *not* errors; they are
/// reported through [`PatchDetail`].
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("registry I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of patching a document in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPatch {
    /// New document text, or `None` when the document is unchanged
    pub updated: Option<String>,
    pub detail: PatchDetail,
}

impl DocumentPatch {
    fn unchanged(detail: PatchDetail) -> Self {
        Self {
            updated: None,
            detail,
        }
    }
}

/// Merge one route's declarations into a registry document.
///
/// Pure: no I/O, no caching across calls. Idempotent: patching the output of
/// a patch with the same descriptor is a no-op reported as
/// [`PatchDetail::AlreadyRegistered`].
pub fn patch_document(doc: &str, route: &RouteDescriptor) -> DocumentPatch {
    let anchors = scanner::scan(doc);

    // Anchor checks happen up front so a late miss cannot leave a document
    // with an import but no constants or route entry.
    let Some(import_end) = anchors.import_end else {
        return DocumentPatch::unchanged(PatchDetail::SkippedMissingAnchor(MissingAnchor::Imports));
    };
    if anchors.container.is_none() {
        return DocumentPatch::unchanged(PatchDetail::SkippedMissingAnchor(
            MissingAnchor::ConstantBlock,
        ));
    }
    let Some(constant_end) = anchors.constant_end else {
        return DocumentPatch::unchanged(PatchDetail::SkippedMissingAnchor(
            MissingAnchor::ConstantPair,
        ));
    };
    let Some(list) = anchors.list else {
        return DocumentPatch::unchanged(PatchDetail::SkippedMissingAnchor(
            MissingAnchor::RouteList,
        ));
    };

    let mut pending = Vec::with_capacity(3);
    pending.extend(merger::insert_after_line(doc, import_end, &route.import_line()));
    pending.extend(merger::insert_after_line(doc, constant_end, &route.constant_lines()));
    pending.extend(merger::insert_entry(doc, list, &route.entry_block()));

    if pending.is_empty() {
        return DocumentPatch::unchanged(PatchDetail::AlreadyRegistered);
    }

    DocumentPatch {
        updated: Some(merger::apply(doc, pending)),
        detail: PatchDetail::Applied,
    }
}

/// File-backed patcher owned by the generator.
///
/// Holds only the registry path; the document itself lives on disk and is
/// held in memory for the duration of one cycle.
pub struct RegistryPatcher {
    path: PathBuf,
}

impl RegistryPatcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run one read-modify-write cycle for `route`.
    ///
    /// An absent registry is a skip, not an error: the page was still
    /// generated and the caller decides how loudly to warn.
    pub fn patch(&self, route: &RouteDescriptor) -> Result<PatchOutcome, PatchError> {
        if !self.path.exists() {
            tracing::warn!(
                registry = %self.path.display(),
                "registry not found; page left unregistered"
            );
            return Ok(PatchOutcome::from_detail(PatchDetail::SkippedNoRegistry));
        }

        let doc = fs::read_to_string(&self.path)?;
        let patch = patch_document(&doc, route);

        match &patch.detail {
            PatchDetail::Applied => {
                tracing::debug!(route = %route.route_name, "registry updated");
            }
            PatchDetail::AlreadyRegistered => {
                tracing::debug!(route = %route.route_name, "route already registered");
            }
            PatchDetail::SkippedMissingAnchor(missing) => {
                tracing::warn!(
                    registry = %self.path.display(),
                    "cannot register route ({}); registry left untouched",
                    missing.describe()
                );
            }
            // patch_document never reports this; existence is checked above.
            PatchDetail::SkippedNoRegistry => {}
        }

        if let Some(updated) = &patch.updated {
            fs::write(&self.path, updated)?;
        }

        Ok(PatchOutcome::from_detail(patch.detail))
    }
}
