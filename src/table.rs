use std::str::Chars;

use crate::core::block::Block;
use crate::core::config::CharsetRegistry;
use crate::errors::{BlockNotFoundError, find_closest_block};

/// One line of the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// HD44780 code the glyph is stored at
    pub code: u8,
    /// Unicode scalar value printed for the code
    pub glyph: char,
    /// Second glyph of a shared code; printed without its code
    pub continuation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    Skip,
}

/// Walks a glyph sequence, assigning consecutive codes.
///
/// A shared code is assigned to two glyphs: the first yields a normal row,
/// the second a continuation row, and only then does the code advance.
/// Iteration stops early if the code would leave `0x00..=0xff`.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    glyphs: Chars<'a>,
    shared: &'a [u8],
    code: u16,
    state: State,
}

impl<'a> Rows<'a> {
    pub fn new(glyphs: &'a str, start: u8, shared: &'a [u8]) -> Self {
        Self {
            glyphs: glyphs.chars(),
            shared,
            code: u16::from(start),
            state: State::Normal,
        }
    }

    /// Code the next glyph would be assigned.
    pub fn next_code(&self) -> u16 {
        self.code
    }
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let code = u8::try_from(self.code).ok()?;
        let glyph = self.glyphs.next()?;

        match self.state {
            State::Normal => {
                if self.shared.contains(&code) {
                    self.state = State::Skip;
                } else {
                    self.code += 1;
                }
                Some(Row {
                    code,
                    glyph,
                    continuation: false,
                })
            }
            State::Skip => {
                self.state = State::Normal;
                self.code += 1;
                Some(Row {
                    code,
                    glyph,
                    continuation: true,
                })
            }
        }
    }
}

/// The blocks selected for printing, in registry order.
#[derive(Debug, Clone)]
pub struct Table {
    blocks: Vec<Block>,
}

impl Table {
    /// Builds every block of the registry.
    pub fn from_registry(registry: &CharsetRegistry) -> Result<Self, Box<dyn std::error::Error>> {
        Self::select(registry, &[])
    }

    /// Builds the named blocks, or every block when `names` is empty.
    ///
    /// Blocks keep registry order regardless of the order of `names`.
    pub fn select(
        registry: &CharsetRegistry,
        names: &[String],
    ) -> Result<Self, Box<dyn std::error::Error>> {
        for name in names {
            if registry.get_block(name).is_none() {
                let suggestion = find_closest_block(name, &registry.names());
                return Err(BlockNotFoundError::new(name.as_str(), suggestion).into());
            }
        }

        let blocks = registry
            .blocks
            .iter()
            .filter(|config| names.is_empty() || names.contains(&config.name))
            .map(Block::from_config)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Table { blocks })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_table() -> Table {
        Table::from_registry(&CharsetRegistry::load_default().unwrap()).unwrap()
    }

    fn block_rows(name: &str) -> Vec<Row> {
        let table = default_table();
        let block = table.blocks().iter().find(|b| b.name() == name).unwrap();
        block.rows().collect()
    }

    fn coded(code: u8, glyph: char) -> Row {
        Row {
            code,
            glyph,
            continuation: false,
        }
    }

    fn glyphs_at(rows: &[Row], code: u8) -> Vec<char> {
        rows.iter()
            .filter(|r| r.code == code)
            .map(|r| r.glyph)
            .collect()
    }

    #[test]
    fn test_plain_sequence() {
        let rows: Vec<Row> = Rows::new("ab", 0x10, &[]).collect();
        assert_eq!(rows, vec![coded(0x10, 'a'), coded(0x11, 'b')]);
    }

    #[test]
    fn test_shared_code_reused_once() {
        let codes: Vec<(u8, bool)> = Rows::new("abcd", 0x10, &[0x11])
            .map(|row| (row.code, row.continuation))
            .collect();
        assert_eq!(
            codes,
            vec![(0x10, false), (0x11, false), (0x11, true), (0x12, false)]
        );
    }

    #[test]
    fn test_stops_at_end_of_code_space() {
        let mut rows = Rows::new("abc", 0xff, &[]);
        assert_eq!(rows.next().map(|r| r.code), Some(0xff));
        assert_eq!(rows.next(), None);
        assert_eq!(rows.next_code(), 0x100);
    }

    #[test]
    fn test_ascii_rows_match_code_points() {
        let rows = block_rows("ascii");
        assert_eq!(rows.len(), 94);
        for row in &rows {
            assert_eq!(row.glyph as u32, u32::from(row.code));
            assert!(!row.continuation);
        }
        assert!(rows.contains(&coded(0x41, 'A')));
    }

    #[test]
    fn test_arrow_rows() {
        let rows = block_rows("arrows");
        assert_eq!(rows, vec![coded(0x7e, '→'), coded(0x7f, '←')]);
    }

    #[test]
    fn test_kana_rows() {
        let rows = block_rows("kana");
        assert_eq!(rows.len(), 97);
        assert_eq!(rows[0], coded(0xa1, '。'));
        assert_eq!(rows.last().copied(), Some(coded(0xff, '█')));

        for shared in [0xe9u8, 0xf8] {
            let at: Vec<&Row> = rows.iter().filter(|r| r.code == shared).collect();
            assert_eq!(at.len(), 2);
            assert!(!at[0].continuation);
            assert!(at[1].continuation);
        }

        assert_eq!(glyphs_at(&rows, 0xe9), vec!['⁻', '¹']);
        assert_eq!(glyphs_at(&rows, 0xf8), vec!['x', '\u{305}']);

        let after = rows.iter().position(|r| r.code == 0xea).unwrap();
        assert_eq!(rows[after - 1].code, 0xe9);
        assert_eq!(rows.iter().filter(|r| r.continuation).count(), 2);
    }

    #[test]
    fn test_select_keeps_registry_order() {
        let registry = CharsetRegistry::load_default().unwrap();
        let names = ["kana".to_string(), "ascii".to_string()];
        let table = Table::select(&registry, &names).unwrap();
        let selected: Vec<&str> = table.blocks().iter().map(|b| b.name()).collect();
        assert_eq!(selected, vec!["ascii", "kana"]);
    }

    #[test]
    fn test_select_unknown_block_suggests() {
        let registry = CharsetRegistry::load_default().unwrap();
        let err = Table::select(&registry, &["arrow".to_string()]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("block 'arrow' not found"));
        assert!(msg.contains("did you mean 'arrows'?"));
    }
}
