//! Android localized resource generation from gettext catalogs.
//!
//! Reads a base-language `strings.xml` template and a directory of PO
//! catalogs, then writes one `values-<qualifier>/strings.xml` per language
//! plus a generated C++ stub that feeds the translation-extraction pipeline.
//! A one-shot build step: no runtime component, no persistent state.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod qualifier;
pub mod stub;
pub mod template;
pub mod traits;
pub mod transform;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::Catalog,
    config::Config,
    error::Error,
    generator::{Generator, RunSummary},
    template::{StringResource, StringTable},
};
