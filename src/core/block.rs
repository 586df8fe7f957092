use super::config::BlockConfig;
use crate::errors::CharsetError;
use crate::table::Rows;

/// A validated block of the character map, ready to be printed.
///
/// Every glyph of a block is guaranteed to land on a code in `0x00..=0xff`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    name: String,
    start: u8,
    glyphs: String,
    shared: Vec<u8>,
}

impl Block {
    /// Builds a block from its configuration, checking that it fits the
    /// HD44780 code space.
    pub fn from_config(config: &BlockConfig) -> Result<Self, CharsetError> {
        let name = config.name.as_str();
        let glyphs = config
            .effective_chars()
            .map_err(|reason| CharsetError::invalid_definition(name, reason))?;

        if glyphs.is_empty() {
            return Err(CharsetError::EmptyBlock {
                block: name.to_string(),
            });
        }

        let start = u8::try_from(config.start).map_err(|_| CharsetError::StartOutOfRange {
            block: name.to_string(),
            start: config.start,
        })?;

        let shared = config
            .shared
            .iter()
            .map(|&code| match u8::try_from(code) {
                Ok(c) if c >= start => Ok(c),
                _ => Err(CharsetError::SharedOutOfRange {
                    block: name.to_string(),
                    code,
                }),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let block = Block {
            name: name.to_string(),
            start,
            glyphs,
            shared,
        };

        let mut rows = block.rows();
        let emitted = rows.by_ref().count();
        let next_code = u32::from(rows.next_code());
        if let Some(glyph) = block.glyphs.chars().nth(emitted) {
            return Err(CharsetError::CodeOverflow {
                block: name.to_string(),
                glyph,
                code: next_code,
            });
        }

        Ok(block)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    /// Iterates the rows of the block in print order.
    pub fn rows(&self) -> Rows<'_> {
        Rows::new(&self.glyphs, self.start, &self.shared)
    }

    /// Number of rows, one per glyph.
    pub fn row_count(&self) -> usize {
        self.glyphs.chars().count()
    }

    /// Code of the last row.
    pub fn last_code(&self) -> u8 {
        self.rows().last().map_or(self.start, |row| row.code)
    }
}
