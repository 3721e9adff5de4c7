//! Loading of gettext PO message catalogs, one per target language.
//!
//! Catalogs live in a single directory and follow the `<language>.po` naming
//! convention. Only reviewed singular entries survive loading: an entry is
//! kept iff its source text and translation are both non-empty and it is not
//! flagged fuzzy. Plural entries have no singular translation and are skipped.

use std::{
    collections::HashMap,
    panic::{self, AssertUnwindSafe},
    path::Path,
};

use polib::po_file;

use crate::error::Error;

/// Header fields polib's metadata parser unwraps. A catalog missing one of
/// them would abort the process instead of failing as `CatalogParse`, so
/// they are checked up front.
const REQUIRED_HEADER_FIELDS: &[&str] = &[
    "Project-Id-Version",
    "POT-Creation-Date",
    "PO-Revision-Date",
    "Language-Team",
    "Language",
    "MIME-Version",
    "Content-Type",
    "Content-Transfer-Encoding",
    "Plural-Forms",
];

/// The usable translations of one language, keyed by source text.
#[derive(Debug, Clone)]
pub struct Catalog {
    language: String,
    translations: HashMap<String, String>,
}

impl Catalog {
    /// Loads `<dir>/<language>.po` and filters it down to usable entries.
    pub fn read_from(dir: &Path, language: &str) -> Result<Self, Error> {
        let path = dir.join(format!("{language}.po"));
        if !path.is_file() {
            return Err(Error::CatalogNotFound(language.to_string()));
        }

        let content = std::fs::read_to_string(&path)?;
        let missing = missing_header_fields(&content);
        if !missing.is_empty() {
            return Err(Error::CatalogParse(format!(
                "{}: header is missing required field(s): {}",
                path.display(),
                missing.join(", ")
            )));
        }

        // polib panics instead of returning an error on header layouts the
        // field check above does not recognize.
        let parsed = match panic::catch_unwind(AssertUnwindSafe(|| po_file::parse(&path))) {
            Ok(result) => result
                .map_err(|e| Error::CatalogParse(format!("{}: {}", path.display(), e)))?,
            Err(_) => {
                return Err(Error::CatalogParse(format!(
                    "{}: PO parser aborted on malformed header",
                    path.display()
                )));
            }
        };

        let mut translations = HashMap::new();
        for message in parsed.messages() {
            let Ok(msgstr) = message.msgstr() else {
                continue;
            };
            if message.msgid().is_empty() || msgstr.is_empty() || message.is_fuzzy() {
                continue;
            }
            translations.insert(message.msgid().to_string(), msgstr.to_string());
        }

        Ok(Catalog {
            language: language.to_string(),
            translations,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Looks up the translation for a verbatim source text.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.translations.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

/// Reports required header fields absent from the catalog's header entry
/// (the continuation strings of the leading `msgstr ""`, up to the first
/// blank line).
fn missing_header_fields(content: &str) -> Vec<&'static str> {
    let header = content
        .lines()
        .skip_while(|line| !line.starts_with("msgstr"))
        .take_while(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    REQUIRED_HEADER_FIELDS
        .iter()
        .filter(|field| !header.contains(&format!("{field}:")))
        .copied()
        .collect()
}
