//! # Codes File IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    codes::{CodeTable, MergePair, SUPPORTED_CODES_VERSION},
    errors::{WSResult, WordsnipError},
};

/// The prefix of a codes version header line.
pub const VERSION_PREFIX: &str = "#version:";

/// Load a [`CodeTable`] from a codes file.
///
/// Any failure to open or read the file is reported as
/// [`WordsnipError::CodesLoad`]; parse errors pass through.
///
/// # Arguments
/// * `path` - the path to the codes file.
pub fn load_codes_path<P: AsRef<Path>>(path: P) -> WSResult<CodeTable> {
    let path = path.as_ref();
    let into_load_error = |source| WordsnipError::CodesLoad {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(into_load_error)?);
    let table = read_codes(reader).map_err(|e| match e {
        WordsnipError::Io(source) => into_load_error(source),
        e => e,
    })?;

    log::debug!(
        "Loaded {} merge codes from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Read a [`CodeTable`] from a codes line reader.
///
/// Lines are:
/// ```terminaloutput
/// #version: 0.2
/// {LEFT} {RIGHT}
/// ```
///
/// Version headers and blank lines do not consume a rank. Repeated pairs
/// and versions other than [`SUPPORTED_CODES_VERSION`] are warned about
/// and loading continues.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_codes<R: BufRead>(reader: R) -> WSResult<CodeTable> {
    let mut table = CodeTable::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let s = line.trim();

        if s.is_empty() {
            continue;
        }
        if let Some(version) = s.strip_prefix(VERSION_PREFIX) {
            table.set_version(version.trim());
            continue;
        }

        let mut parts = s.split_whitespace();
        let pair = match (parts.next(), parts.next(), parts.next()) {
            (Some(left), Some(right), None) => MergePair::new(left, right),
            _ => {
                return Err(WordsnipError::MalformedCodesLine {
                    line: idx + 1,
                    content: line.clone(),
                });
            }
        };

        table.push_pair(pair, idx + 1);
    }

    Ok(table)
}

/// Save a [`CodeTable`] to a codes file.
///
/// # Arguments
/// * `table` - the table to save.
/// * `path` - the path to save the table to.
pub fn save_codes_path<P: AsRef<Path>>(
    table: &CodeTable,
    path: P,
) -> WSResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_codes(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`CodeTable`] to a [`Write`] writer, with a version header.
///
/// # Arguments
/// * `table` - the table to save.
/// * `writer` - the writer to target.
pub fn write_codes<W: Write>(
    table: &CodeTable,
    writer: &mut W,
) -> WSResult<()> {
    writeln!(writer, "{VERSION_PREFIX} {SUPPORTED_CODES_VERSION}")?;
    for pair in table.iter() {
        writeln!(writer, "{pair}")?;
    }
    Ok(())
}
