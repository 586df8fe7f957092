use serde::Serialize;
use std::io::{self, Write};

use crate::table::{Row, Table};

/// Notation used for a glyph's UTF-8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteStyle {
    /// Byte-string literal such as `b'\xe2\x86\x92'`
    #[default]
    Literal,
    /// Lowercase hex digits such as `e28692`
    Hex,
}

/// Renders bytes as a byte-string literal.
///
/// Printable ASCII is kept verbatim, everything else is escaped. Single
/// quotes delimit the literal unless the bytes contain a single quote and no
/// double quote.
pub fn byte_literal(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(bytes.len() * 4 + 3);
    out.push('b');
    out.push(quote);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b if b as char == quote => {
                out.push('\\');
                out.push(quote);
            }
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{:02x}", b)),
        }
    }
    out.push(quote);
    out
}

pub fn render_bytes(glyph: char, style: ByteStyle) -> String {
    let mut buf = [0u8; 4];
    let bytes = glyph.encode_utf8(&mut buf).as_bytes();
    match style {
        ByteStyle::Literal => byte_literal(bytes),
        ByteStyle::Hex => hex::encode(bytes),
    }
}

/// Formats a row as `<code> <glyph> <bytes>`.
///
/// Continuation rows leave the code field blank.
pub fn render_row(row: &Row, style: ByteStyle) -> String {
    let bytes = render_bytes(row.glyph, style);
    if row.continuation {
        format!("{:5} {} {}", "", row.glyph, bytes)
    } else {
        format!("{:#x} {} {}", row.code, row.glyph, bytes)
    }
}

/// Writes the table as text, one blank line between blocks.
pub fn write_text<W: Write>(out: &mut W, table: &Table, style: ByteStyle) -> io::Result<()> {
    for (i, block) in table.blocks().iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        for row in block.rows() {
            writeln!(out, "{}", render_row(&row, style))?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    block: &'a str,
    code: u8,
    glyph: String,
    bytes: String,
    continuation: bool,
}

/// Writes the table as a pretty-printed JSON array of rows.
pub fn write_json<W: Write>(out: &mut W, table: &Table) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<JsonRow<'_>> = table
        .blocks()
        .iter()
        .flat_map(|block| {
            block.rows().map(move |row| JsonRow {
                block: block.name(),
                code: row.code,
                glyph: row.glyph.to_string(),
                bytes: render_bytes(row.glyph, ByteStyle::Hex),
                continuation: row.continuation,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}
