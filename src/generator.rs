//! The driver: enumerates catalogs and produces every output artifact.
//!
//! The stub is written first from the untransformed template. Then each
//! language gets an independent pipeline run on a freshly loaded template,
//! so one language's substitutions can never leak into another's output.
//! Per-language failures are recorded and the remaining languages still run,
//! unless `fail_fast` restores abort-on-first-error semantics.

use std::{fs, path::PathBuf};

use tracing::{error, info, warn};

use crate::{
    catalog::Catalog, config::Config, error::Error, qualifier, stub, template::StringTable,
    traits::Parser, transform,
};

pub struct Generator {
    config: Config,
}

/// What a run produced, and what it could not.
#[derive(Debug)]
pub struct RunSummary {
    /// `(language, output path)` for each generated resource file.
    pub written: Vec<(String, PathBuf)>,

    /// `(language, error)` for each language that failed.
    pub failed: Vec<(String, Error)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Generator { config }
    }

    /// Runs the whole generation.
    ///
    /// A template that fails to load is fatal; there is nothing to generate
    /// from. Everything after that is per-language.
    pub fn run(&self) -> Result<RunSummary, Error> {
        let table = StringTable::read_from(&self.config.template)?;
        stub::generate_stub(
            &table,
            self.config.stub_header.as_deref(),
            &self.config.stub_path,
        )?;
        info!(path = %self.config.stub_path.display(), "wrote extraction stub");

        let mut summary = RunSummary {
            written: Vec::new(),
            failed: Vec::new(),
        };

        for language in self.enumerate_catalogs()? {
            match self.generate_language(&language) {
                Ok(path) => {
                    info!(language = %language, path = %path.display(), "wrote resource file");
                    summary.written.push((language, path));
                }
                Err(err) if self.config.fail_fast => return Err(err),
                Err(err) => {
                    error!(language = %language, error = %err, "failed to generate resources");
                    summary.failed.push((language, err));
                }
            }
        }

        Ok(summary)
    }

    /// Lists the language identifiers that have a catalog on disk, sorted
    /// for deterministic processing order, with the skip list applied.
    fn enumerate_catalogs(&self) -> Result<Vec<String>, Error> {
        let mut languages = Vec::new();

        for dir_entry in fs::read_dir(&self.config.catalog_dir)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("po") {
                continue;
            }
            let Some(language) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if self.config.skip_languages.iter().any(|s| s == language) {
                warn!(language = %language, "skipping incompatible language");
                continue;
            }
            languages.push(language.to_string());
        }

        languages.sort();
        Ok(languages)
    }

    /// Generates `values-<qualifier>/strings.xml` for one language.
    fn generate_language(&self, language: &str) -> Result<PathBuf, Error> {
        // Fresh template per language; the transform consumes a copy.
        let table = StringTable::read_from(&self.config.template)?;
        let catalog = Catalog::read_from(&self.config.catalog_dir, language)?;
        let translated = transform::apply_translations(&table, &catalog);

        let dir = self
            .config
            .resource_root
            .join(qualifier::values_dir_name(language)?);
        fs::create_dir_all(&dir)?;

        let path = dir.join("strings.xml");
        translated.write_to(&path)?;
        Ok(path)
    }
}
