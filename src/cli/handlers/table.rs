use std::io::{self, Write};

use crate::cli::args::OutputFormat;
use hd44780_charset::{ByteStyle, CharsetRegistry, Table, write_json, write_text};

pub fn handle(
    registry: &CharsetRegistry,
    blocks: &[String],
    format: OutputFormat,
    style: ByteStyle,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = Table::select(registry, blocks)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let written: Result<(), Box<dyn std::error::Error>> = match format {
        OutputFormat::Text => write_text(&mut out, &table, style).map_err(Into::into),
        OutputFormat::Json => write_json(&mut out, &table),
    };

    written
        .and_then(|()| out.flush().map_err(Into::into))
        .map_err(|e| format!("error: cannot write table: {}", e).into())
}
