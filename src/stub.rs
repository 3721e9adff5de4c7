//! Emits the generated C++ stub that feeds the translation pipeline.
//!
//! The stub is never compiled. It exists so gettext extraction tooling can
//! pick up the base-language strings: one declaration per translatable
//! template entry, each wrapping the original text in a `_()` marker call.
//! The file is regenerated wholesale on every run.

use indoc::indoc;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{error::Error, template::StringTable};

const STUB_PREAMBLE: &str = indoc! {r#"
    /*
     * This is an auto generated dummy file used for sticking strings from
     * res/values/strings.xml into our translation system
     *
     */

    #include "common/translation.h" // For catching the file during POTFILES reviews

"#};

/// Writes the stub for the given (untransformed) template. An optional
/// license header goes first, before the generated-file notice.
pub fn write_stub<W: Write>(
    table: &StringTable,
    license_header: Option<&str>,
    mut writer: W,
) -> Result<(), Error> {
    if let Some(header) = license_header {
        writer.write_all(header.as_bytes())?;
        if !header.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        writer.write_all(b"\n")?;
    }
    writer.write_all(STUB_PREAMBLE.as_bytes())?;
    for sr in table.strings.iter().filter(|sr| sr.is_translatable()) {
        writeln!(
            writer,
            "static Common::U32String {} = _(\"{}\");",
            sr.name, sr.value
        )?;
    }
    Ok(())
}

/// Writes the stub to a file, replacing any previous content. The license
/// header, if configured, is read from `header_path`.
pub fn generate_stub<P: AsRef<Path>>(
    table: &StringTable,
    header_path: Option<&Path>,
    path: P,
) -> Result<(), Error> {
    let license_header = header_path.map(std::fs::read_to_string).transpose()?;
    let file = File::create(path)?;
    write_stub(table, license_header.as_deref(), BufWriter::new(file))
}
