//! The base-language Android `strings.xml` template.
//!
//! Only singular `<string>` elements are supported; that is all the base
//! template contains. Parsing keeps document order and the `translatable`
//! attribute, both of which the downstream generation steps rely on.

use quick_xml::{
    Reader, Writer,
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{BufRead, Write};

use crate::{error::Error, traits::Parser};

/// An ordered string table read from (or written as) a `strings.xml` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    pub strings: Vec<StringResource>,
}

/// A single `<string>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringResource {
    pub name: String,
    pub value: String,
    pub translatable: Option<bool>,
}

impl StringResource {
    /// Entries without `translatable="false"` are eligible for translation.
    pub fn is_translatable(&self) -> bool {
        self.translatable != Some(false)
    }
}

impl Parser for StringTable {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut strings = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"string" => {
                    let sr = parse_string_resource(e, &mut xml_reader)?;
                    strings.push(sr);
                }
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"string" => {
                    let (name, translatable) = parse_string_attributes(e)?;
                    strings.push(StringResource {
                        name,
                        value: String::new(),
                        translatable,
                    });
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::MalformedTemplate(e)),
            }
            buf.clear();
        }
        Ok(StringTable { strings })
    }

    /// Write to any writer with a UTF-8 declaration, 2-space indentation,
    /// and a trailing newline. Overwrites whatever the writer points at.
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        {
            let mut xml_writer = Writer::new_with_indent(&mut writer, b' ', 2);

            xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
            xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;

            for sr in &self.strings {
                let mut elem = BytesStart::new("string");
                elem.push_attribute(("name", sr.name.as_str()));
                if let Some(translatable) = sr.translatable {
                    elem.push_attribute(("translatable", if translatable { "true" } else { "false" }));
                }

                xml_writer.write_event(Event::Start(elem))?;
                // Partial escape keeps backslash-escaped quotes as literal
                // bytes; only `&`, `<` and `>` become entities.
                xml_writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(
                    sr.value.as_str(),
                ))))?;
                xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
            }

            xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        }
        writer.write_all(b"\n")?;
        Ok(())
    }
}

fn parse_string_attributes(e: &BytesStart) -> Result<(String, Option<bool>), Error> {
    let mut name = None;
    let mut translatable = None;

    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::InvalidTemplate(e.to_string()))?;
        match attr.key.as_ref() {
            b"name" => name = Some(attr.unescape_value()?.to_string()),
            b"translatable" => {
                let v = attr.unescape_value()?.to_string();
                translatable = Some(v == "true");
            }
            _ => {}
        }
    }
    let name =
        name.ok_or_else(|| Error::InvalidTemplate("string tag missing 'name'".to_string()))?;
    Ok((name, translatable))
}

fn parse_string_resource<R: BufRead>(
    e: &BytesStart,
    xml_reader: &mut Reader<R>,
) -> Result<StringResource, Error> {
    let (name, translatable) = parse_string_attributes(e)?;

    let mut buf = Vec::new();
    // Read until text or end
    let value = loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                let v = e.unescape().map_err(Error::MalformedTemplate)?.to_string();
                break v;
            }
            Ok(Event::End(_)) => break String::new(),
            Ok(Event::Eof) => {
                return Err(Error::InvalidTemplate("unexpected EOF".to_string()));
            }
            Ok(_) => (),
            Err(e) => return Err(Error::MalformedTemplate(e)),
        }
        buf.clear();
    };
    Ok(StringResource {
        name,
        value,
        translatable,
    })
}
