//! Run configuration, loadable from an optional TOML file.
//!
//! Every knob has a default matching the conventional project layout, so the
//! tool runs with no configuration at all. The skip list exists because some
//! locales are rejected by the platform resource compiler (`be-tarask`
//! triggers an AAPT "invalid locale" error); keeping it in configuration
//! lets that set grow without a code change.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base-language template file.
    pub template: PathBuf,

    /// Directory holding one `<language>.po` catalog per language.
    pub catalog_dir: PathBuf,

    /// Root under which `values-<qualifier>` directories are created.
    pub resource_root: PathBuf,

    /// Path of the generated extraction stub.
    pub stub_path: PathBuf,

    /// Optional file (e.g. the project license block) prepended to the
    /// generated stub ahead of the auto-generated notice.
    pub stub_header: Option<PathBuf>,

    /// Language identifiers to skip entirely.
    pub skip_languages: Vec<String>,

    /// Abort the whole run on the first failing language instead of
    /// recording the failure and continuing with the rest.
    pub fail_fast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            template: PathBuf::from("res/values/strings.xml"),
            catalog_dir: PathBuf::from("po"),
            resource_root: PathBuf::from("res"),
            stub_path: PathBuf::from("strings.xml.cpp"),
            stub_header: None,
            skip_languages: vec!["be-tarask".to_string()],
            fail_fast: false,
        }
    }
}

impl Config {
    /// Loads a configuration from a TOML file. Missing keys fall back to
    /// their defaults; unknown keys are rejected.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Re-roots every configured path under `base`. Absolute paths are
    /// left untouched.
    pub fn resolved_against(self, base: &Path) -> Self {
        Config {
            template: base.join(self.template),
            catalog_dir: base.join(self.catalog_dir),
            resource_root: base.join(self.resource_root),
            stub_path: base.join(self.stub_path),
            stub_header: self.stub_header.map(|p| base.join(p)),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn defaults_match_the_conventional_layout() {
        let config = Config::default();
        assert_eq!(config.template, PathBuf::from("res/values/strings.xml"));
        assert_eq!(config.catalog_dir, PathBuf::from("po"));
        assert_eq!(config.skip_languages, vec!["be-tarask".to_string()]);
        assert!(!config.fail_fast);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gen.toml");
        std::fs::write(
            &path,
            indoc! {r#"
                catalog_dir = "translations"
                skip_languages = ["be-tarask", "xx_XX"]
            "#},
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.catalog_dir, PathBuf::from("translations"));
        assert_eq!(config.skip_languages.len(), 2);
        assert_eq!(config.template, PathBuf::from("res/values/strings.xml"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gen.toml");
        std::fs::write(&path, "no_such_key = true\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn paths_resolve_against_a_base_directory() {
        let mut config = Config::default();
        config.stub_header = Some(PathBuf::from("LICENSE.header"));

        let config = config.resolved_against(Path::new("/project"));
        assert_eq!(
            config.template,
            PathBuf::from("/project/res/values/strings.xml")
        );
        assert_eq!(config.stub_path, PathBuf::from("/project/strings.xml.cpp"));
        assert_eq!(
            config.stub_header,
            Some(PathBuf::from("/project/LICENSE.header"))
        );
    }
}
