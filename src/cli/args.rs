use clap::ValueEnum;
use hd44780_charset::ByteStyle;

/// Output formats for the table
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `<code> <glyph> <bytes>` line per row
    #[default]
    Text,
    /// Pretty-printed JSON array of rows
    Json,
}

/// Byte notations for text output
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ByteStyleCli {
    /// Byte-string literal, e.g. b'\xe2\x86\x92'
    #[default]
    Literal,
    /// Bare hex digits, e.g. e28692
    Hex,
}

impl From<ByteStyleCli> for ByteStyle {
    fn from(cli: ByteStyleCli) -> Self {
        match cli {
            ByteStyleCli::Literal => ByteStyle::Literal,
            ByteStyleCli::Hex => ByteStyle::Hex,
        }
    }
}
