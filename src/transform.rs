//! Turns the base template into a translated string table for one language.
//!
//! The policy is strict: an entry either gets its translation (escaped for
//! the Android resource compiler) or is dropped entirely. Untranslated
//! entries never fall back to the source language in a generated file.

use crate::{catalog::Catalog, template::StringTable};

/// Escapes characters with special meaning in Android string resources.
///
/// The order matters: escaping `@` or `?` after the quote passes would
/// double-escape the backslashes those passes introduced.
/// See <https://developer.android.com/guide/topics/resources/string-resource#escaping_quotes>
pub fn escape_android(text: &str) -> String {
    let mut escaped = text.replace('@', r"\@");
    escaped = escaped.replace('?', r"\?");
    escaped = escaped.replace('\'', r"\'");
    escaped = escaped.replace('"', "\\\"");
    escaped = escaped.replace('\n', r"\n");
    escaped = escaped.replace('\t', r"\t");
    escaped
}

/// Rebuilds the table with each entry's text replaced by its escaped
/// translation, preserving document order and attributes. Entries whose
/// source text has no usable translation are omitted.
pub fn apply_translations(table: &StringTable, catalog: &Catalog) -> StringTable {
    let strings = table
        .strings
        .iter()
        .filter_map(|sr| {
            catalog.get(&sr.value).map(|translated| {
                let mut translated_sr = sr.clone();
                translated_sr.value = escape_android(translated);
                translated_sr
            })
        })
        .collect();

    StringTable { strings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Catalog, template::StringResource, traits::Parser};
    use indoc::indoc;

    fn catalog_from(entries: &[(&str, &str)]) -> Catalog {
        let dir = tempfile::tempdir().unwrap();
        let mut content = String::from(indoc! {r#"
            msgid ""
            msgstr ""
            "Project-Id-Version: frobnicator 1.0\n"
            "POT-Creation-Date: 2024-05-01 12:00+0000\n"
            "PO-Revision-Date: 2024-05-02 09:30+0000\n"
            "Last-Translator: A Translator <xx@example.org>\n"
            "Language-Team: Testing\n"
            "Language: xx\n"
            "MIME-Version: 1.0\n"
            "Content-Type: text/plain; charset=UTF-8\n"
            "Content-Transfer-Encoding: 8bit\n"
            "Plural-Forms: nplurals=2; plural=(n != 1);\n"

        "#});
        for (msgid, msgstr) in entries {
            content.push_str(&format!("msgid \"{msgid}\"\nmsgstr \"{msgstr}\"\n\n"));
        }
        std::fs::write(dir.path().join("xx.po"), content).unwrap();
        Catalog::read_from(dir.path(), "xx").unwrap()
    }

    #[test]
    fn escapes_special_characters() {
        assert_eq!(escape_android("user@host"), r"user\@host");
        assert_eq!(escape_android("Sure?"), r"Sure\?");
        assert_eq!(escape_android("it's"), r"it\'s");
        assert_eq!(escape_android("He said \"hi\""), "He said \\\"hi\\\"");
        assert_eq!(escape_android("a\nb"), r"a\nb");
        assert_eq!(escape_android("a\tb"), r"a\tb");
    }

    #[test]
    fn escaping_never_doubles_backslashes() {
        // A quote next to an @ must yield two independent escapes.
        assert_eq!(escape_android("\"@\""), "\\\"\\@\\\"");
    }

    #[test]
    fn translated_entries_are_replaced_and_untranslated_dropped() {
        let xml = r#"
        <resources>
            <string name="hello">Hello</string>
            <string name="bye">Goodbye</string>
        </resources>
        "#;
        let table = StringTable::from_str(xml).unwrap();
        let catalog = catalog_from(&[("Hello", "Bonjour")]);

        let translated = apply_translations(&table, &catalog);
        assert_eq!(
            translated.strings,
            vec![StringResource {
                name: "hello".to_string(),
                value: "Bonjour".to_string(),
                translatable: None,
            }]
        );
    }

    #[test]
    fn preserves_document_order_and_attributes() {
        let xml = r#"
        <resources>
            <string name="b" translatable="true">Beta</string>
            <string name="a">Alpha</string>
        </resources>
        "#;
        let table = StringTable::from_str(xml).unwrap();
        let catalog = catalog_from(&[("Alpha", "Alpha!"), ("Beta", "Beta!")]);

        let translated = apply_translations(&table, &catalog);
        let names: Vec<&str> = translated.strings.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(translated.strings[0].translatable, Some(true));
    }

    #[test]
    fn translations_are_escaped_on_the_way_in() {
        let xml = r#"<resources><string name="q">Really quit?</string></resources>"#;
        let table = StringTable::from_str(xml).unwrap();
        let catalog = catalog_from(&[("Really quit?", "Vraiment quitter ?")]);

        let translated = apply_translations(&table, &catalog);
        assert_eq!(translated.strings[0].value, r"Vraiment quitter \?");
    }
}
