//! Scaffolding - creates directories and emits template files
//!
//! The [`Scaffolder`] is the generator side of the tool: it derives name
//! forms, writes template bodies under `lib/`, and hands page registrations
//! to the registry patcher. File generation and registration succeed or fail
//! independently; a page can be written while its registration is skipped.

pub mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::naming::{self, NameError, NameForms};
use crate::registry::{PatchError, PatchOutcome, RegistryPatcher, RouteDescriptor};

/// Errors from a scaffolding command.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid name: {0}")]
    Name(#[from] NameError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Patch(#[from] PatchError),
}

/// One emitted file and whether it was actually written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub path: PathBuf,
    /// False when the file already existed and was left alone
    pub created: bool,
}

/// Report for `create page`: the file plus its registration outcome.
#[derive(Debug)]
pub struct PageReport {
    pub file: EmittedFile,
    pub registration: PatchOutcome,
}

/// Generator rooted at a project directory.
pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn registry_path(&self) -> PathBuf {
        self.root.join("lib").join("routes").join("app_router.dart")
    }

    fn page_path(&self, forms: &NameForms) -> PathBuf {
        self.root
            .join("lib")
            .join("pages")
            .join(&forms.snake)
            .join(format!("{}_page.dart", forms.snake))
    }

    /// Seed a project: `lib/` layout, the `AppRoute` support type, a registry
    /// with a `home` route, and the home page itself.
    ///
    /// Existing files are left alone, so `init` is safe to re-run.
    pub fn init(&self) -> Result<Vec<EmittedFile>, ScaffoldError> {
        let forms = naming::derive("home")?;
        let seed = RouteDescriptor::from_forms(&forms);

        let routes_dir = self.root.join("lib").join("routes");
        for dir in ["pages", "models", "entities", "routes"] {
            fs::create_dir_all(self.root.join("lib").join(dir))?;
        }

        let mut emitted = Vec::new();
        emitted.push(self.write_new(routes_dir.join("app_route.dart"), &templates::app_route())?);
        emitted.push(self.write_new(self.registry_path(), &templates::registry(&seed))?);

        let page_path = self.page_path(&forms);
        if let Some(parent) = page_path.parent() {
            fs::create_dir_all(parent)?;
        }
        emitted.push(self.write_new(page_path, &templates::page(&forms))?);

        Ok(emitted)
    }

    /// Generate a page and register it in the route table.
    pub fn create_page(&self, name: &str) -> Result<PageReport, ScaffoldError> {
        let forms = naming::derive(name)?;
        let path = self.page_path(&forms);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = self.write_new(path, &templates::page(&forms))?;

        let route = RouteDescriptor::from_forms(&forms);
        let registration = RegistryPatcher::new(self.registry_path()).patch(&route)?;

        Ok(PageReport { file, registration })
    }

    /// Generate a model under `lib/models/`. No registration.
    pub fn create_model(&self, name: &str) -> Result<EmittedFile, ScaffoldError> {
        let forms = naming::derive(name)?;
        let dir = self.root.join("lib").join("models");
        fs::create_dir_all(&dir)?;
        self.write_new(dir.join(format!("{}_model.dart", forms.snake)), &templates::model(&forms))
    }

    /// Generate an entity under `lib/entities/`. No registration.
    pub fn create_entity(&self, name: &str) -> Result<EmittedFile, ScaffoldError> {
        let forms = naming::derive(name)?;
        let dir = self.root.join("lib").join("entities");
        fs::create_dir_all(&dir)?;
        self.write_new(dir.join(format!("{}.dart", forms.snake)), &templates::entity(&forms))
    }

    /// Write a file unless it already exists. Never overwrites.
    fn write_new(&self, path: PathBuf, contents: &str) -> Result<EmittedFile, ScaffoldError> {
        if path.exists() {
            tracing::warn!(file = %path.display(), "already exists; skipped");
            return Ok(EmittedFile {
                path,
                created: false,
            });
        }
        fs::write(&path, contents)?;
        tracing::info!(file = %path.display(), "created");
        Ok(EmittedFile {
            path,
            created: true,
        })
    }
}
