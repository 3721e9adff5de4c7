//! All error types for the android-strings-gen crate.
//!
//! These are returned from all fallible operations (template parsing,
//! catalog loading, qualifier derivation, file generation).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The base template is not well-formed XML. Fatal for the whole run.
    #[error("malformed template: {0}")]
    MalformedTemplate(#[from] quick_xml::Error),

    /// The template parsed as XML but violates the string-table structure.
    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    /// No catalog file exists for the language. The driver only iterates
    /// languages discovered on disk, so hitting this indicates a defect.
    #[error("no catalog found for language `{0}`")]
    CatalogNotFound(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    /// The language identifier matches neither the regional nor the
    /// BCP 47-like shape, so no resource qualifier can be derived.
    #[error("invalid language code: `{0}`")]
    InvalidLanguageCode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}
