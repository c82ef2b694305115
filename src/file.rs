// src/file.rs

use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

use chrono::NaiveDateTime;

use crate::config::consts::LIST_SOURCE_URL;
use crate::error::{Error, Result};

/// The comment block at the top of `Uniques.txt`: five `;` lines, then a blank one.
pub fn header_lines(generated: NaiveDateTime) -> Vec<String> {
    vec![
        format!("; Data from {LIST_SOURCE_URL}"),
        "; The \"@\" symbol marks a mod as implicit. This means a separator line will be appended \
         after this mod. If there are multiple implicit mods, mark the last one in line."
            .to_string(),
        "; Comments can be made with \";\", blank lines will be ignored.".to_string(),
        ";".to_string(),
        format!(
            "; This file was auto-generated by scrape_uniques on {}",
            generated.format("%Y-%m-%d at %H:%M:%S")
        ),
        String::new(),
    ]
}

/// Create/truncate the output file and write the header block.
pub fn write_header(path: &Path, generated: NaiveDateTime) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    for line in header_lines(generated) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Append record lines to an output file that `write_header` already created.
pub fn append_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut out = BufWriter::new(file);
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
