//! Tabular persisted form of font records (made by FontLab https://www.fontlab.com/)
//!
//! One row per [`FontInfo`]: attribute enums as their symbolic names, tags as a `|`-joined
//! list (`"MONO|UI"`), and `local_path` only when present.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::fontinfo::FontInfo;

/// Write records as prettified JSON array.
pub fn write_json_pretty(fonts: &[FontInfo], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(fonts)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write records as newline-delimited JSON (NDJSON).
pub fn write_ndjson(fonts: &[FontInfo], mut w: impl Write) -> Result<()> {
    for font in fonts {
        let line = serde_json::to_string(font)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Read a JSON array written by [`write_json_pretty`].
pub fn read_json(r: impl BufRead) -> Result<Vec<FontInfo>> {
    serde_json::from_reader(r).context("reading font records as JSON array")
}

/// Read NDJSON written by [`write_ndjson`]. Blank lines are ignored.
pub fn read_ndjson(r: impl BufRead) -> Result<Vec<FontInfo>> {
    let mut fonts = Vec::new();
    for (index, line) in r.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let font = serde_json::from_str(&line)
            .with_context(|| format!("parsing font record on line {}", index + 1))?;
        fonts.push(font);
    }
    Ok(fonts)
}
