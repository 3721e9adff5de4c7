//! Mapping of language identifiers to Android resource directory qualifiers.
//!
//! Two mutually exclusive shapes are recognized, checked in order since the
//! regional shape is a subset of the general one:
//!
//! - regional (`pt`, `pt_BR`): underscores become `-r`, so `pt_BR` selects
//!   `values-pt-rBR`;
//! - BCP 47-like (`zh_Hans`, `sr_Latn_RS`): subtags are joined with `+` and
//!   prefixed with `b+`, so `zh_Hans` selects `values-b+zh+Hans`.
//!
//! Anything else has no valid qualifier and is rejected.
//! See <https://developer.android.com/guide/topics/resources/providing-resources#AlternativeResources>

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    static ref REGIONAL_CODE: Regex = Regex::new(r"^[a-z]{2}([-_][a-zA-Z0-9]{2})?$").unwrap();
    static ref BCP47_CODE: Regex = Regex::new(r"^[a-z]{1,8}([-_][a-zA-Z0-9]{1,8})*$").unwrap();
}

/// Derives the qualifier part of a `values-<qualifier>` directory name.
pub fn lang_qualifier(code: &str) -> Result<String, Error> {
    if REGIONAL_CODE.is_match(code) {
        Ok(code.replace('_', "-r"))
    } else if BCP47_CODE.is_match(code) {
        let subtags: Vec<&str> = code.split(['-', '_']).collect();
        Ok(format!("b+{}", subtags.join("+")))
    } else {
        Err(Error::InvalidLanguageCode(code.to_string()))
    }
}

/// The full resource directory name for a language.
pub fn values_dir_name(code: &str) -> Result<String, Error> {
    Ok(format!("values-{}", lang_qualifier(code)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_codes_use_the_r_separator() {
        assert_eq!(lang_qualifier("fr").unwrap(), "fr");
        assert_eq!(lang_qualifier("pt_BR").unwrap(), "pt-rBR");
        assert_eq!(lang_qualifier("zh_CN").unwrap(), "zh-rCN");
    }

    #[test]
    fn multi_subtag_codes_use_the_bcp47_form() {
        assert_eq!(lang_qualifier("zh_Hans").unwrap(), "b+zh+Hans");
        assert_eq!(lang_qualifier("sr_Latn_RS").unwrap(), "b+sr+Latn+RS");
        assert_eq!(lang_qualifier("be-tarask").unwrap(), "b+be+tarask");
    }

    #[test]
    fn invalid_codes_are_rejected() {
        assert!(matches!(
            lang_qualifier("xx@invalid"),
            Err(Error::InvalidLanguageCode(code)) if code == "xx@invalid"
        ));
        assert!(lang_qualifier("").is_err());
        assert!(lang_qualifier("FR").is_err());
        assert!(lang_qualifier("toolongsubtag1").is_err());
    }

    #[test]
    fn directory_names_carry_the_values_prefix() {
        assert_eq!(values_dir_name("pt_BR").unwrap(), "values-pt-rBR");
        assert_eq!(values_dir_name("zh_Hans").unwrap(), "values-b+zh+Hans");
    }
}
