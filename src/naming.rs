//! Name derivation
//!
//! Every scaffolding command starts from one free-form, user-supplied name
//! ("user_profile", "UserProfile", "user profile", ...). This module turns it
//! into the fixed set of forms the templates and the route registry need.
//!
//! Derivation is a pure, total function over non-degenerate input:
//! the name is split on separators (`_`, `-`, whitespace) and case boundaries,
//! then re-cased per form. For `"product_catalog"`:
//!
//! - `snake`      → `product_catalog` (file names, route name)
//! - `identifier` → `productCatalog`  (Dart constant stem)
//! - `pascal`     → `ProductCatalog`  (type names)
//! - `title`      → `Product Catalog` (display strings)
//! - `path`       → `/product_catalog`
//!
//! Casing itself is delegated to `heck`; this module only validates and
//! assembles the derived forms.

use heck::{ToLowerCamelCase, ToSnakeCase, ToTitleCase, ToUpperCamelCase};
use thiserror::Error;

/// Errors from name derivation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("name is empty")]
    Empty,

    #[error("name '{0}' contains no usable identifier characters")]
    NoIdentifierChars(String),

    #[error("name '{0}' would produce an identifier starting with a digit")]
    LeadingDigit(String),
}

/// All derived forms of one feature name.
///
/// Created once per command via [`derive`], never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForms {
    /// `user_profile` - file names and the route name
    pub snake: String,
    /// `userProfile` - bare Dart identifier (constant stem)
    pub identifier: String,
    /// `UserProfile` - type name stem
    pub pascal: String,
    /// `User Profile` - human-readable display name
    pub title: String,
    /// `/user_profile` - route path (always leading slash)
    pub path: String,
}

impl NameForms {
    /// Route name as registered in the constant table (`user_profile`).
    pub fn route_name(&self) -> &str {
        &self.snake
    }

    /// Widget type for the generated page (`UserProfilePage`).
    pub fn page_type(&self) -> String {
        format!("{}Page", self.pascal)
    }

    /// Model type for the generated model (`UserProfileModel`).
    pub fn model_type(&self) -> String {
        format!("{}Model", self.pascal)
    }
}

/// Derive all name forms from a free-form user-supplied name.
///
/// ## Errors
///
/// Returns an error if the name is empty, contains no alphanumeric
/// characters, or would yield an identifier starting with a digit.
pub fn derive(raw: &str) -> Result<NameForms, NameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }

    let snake = trimmed.to_snake_case();
    if snake.is_empty() {
        return Err(NameError::NoIdentifierChars(trimmed.to_string()));
    }
    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(NameError::LeadingDigit(trimmed.to_string()));
    }

    Ok(NameForms {
        identifier: trimmed.to_lower_camel_case(),
        pascal: trimmed.to_upper_camel_case(),
        title: trimmed.to_title_case(),
        path: format!("/{}", snake),
        snake,
    })
}
