//! HD44780 character ROM lookup table.
//!
//! The character map is described in an embedded TOML registry
//! (`charset.toml`) as ordered blocks of codes. Each block is validated into
//! a [`Block`] and walked row by row, one row per glyph, with shared codes
//! assigned to two consecutive glyphs.
//!
//! ```
//! use hd44780_charset::{CharsetRegistry, Table, render_row, ByteStyle};
//!
//! let registry = CharsetRegistry::load_default().unwrap();
//! let table = Table::select(&registry, &["arrows".to_string()]).unwrap();
//! let first = table.blocks()[0].rows().next().unwrap();
//! assert_eq!(render_row(&first, ByteStyle::Literal), "0x7e → b'\\xe2\\x86\\x92'");
//! ```

mod core;
mod errors;
mod format;
mod table;

pub use crate::core::block::Block;
pub use crate::core::config::{BlockConfig, CharsetRegistry};
pub use errors::{BlockNotFoundError, CharsetError, find_closest_block};
pub use format::{ByteStyle, byte_literal, render_bytes, render_row, write_json, write_text};
pub use table::{Row, Rows, Table};
