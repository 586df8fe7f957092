use serde::Deserialize;
use std::path::Path;

/// Configuration for a single code block loaded from TOML.
///
/// A block is defined either as a code range (`start` + `end`, where each
/// code's glyph is the code point itself) or as an explicit glyph sequence
/// (`start` + `chars`).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BlockConfig {
    /// Name used to select the block from the command line
    pub name: String,
    /// First code of the block
    pub start: u32,
    /// Exclusive end code for range-based blocks
    #[serde(default)]
    pub end: Option<u32>,
    /// Explicit glyphs, assigned to consecutive codes from `start`
    #[serde(default)]
    pub chars: Option<String>,
    /// Codes consumed by two consecutive glyphs
    #[serde(default)]
    pub shared: Vec<u32>,
}

impl BlockConfig {
    /// Returns the glyph sequence of the block, generating it from the code
    /// range if needed.
    pub fn effective_chars(&self) -> Result<String, String> {
        match (&self.chars, self.end) {
            (Some(_), Some(_)) => Err("block defines both `chars` and `end`".to_string()),
            (Some(chars), None) => Ok(chars.clone()),
            (None, Some(end)) => Self::generate_range(self.start, end),
            (None, None) => Err("block defines neither `chars` nor `end`".to_string()),
        }
    }

    fn generate_range(start: u32, end: u32) -> Result<String, String> {
        if start >= end || end > 0x100 {
            return Err(format!(
                "code range {:#x}..{:#x} is empty or leaves the 8-bit code space",
                start, end
            ));
        }

        (start..end)
            .map(|code| {
                char::from_u32(code)
                    .ok_or_else(|| format!("invalid codepoint U+{:04X}", code))
            })
            .collect()
    }
}

/// Ordered collection of block configurations loaded from TOML files.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CharsetRegistry {
    /// Blocks in print order
    #[serde(rename = "block", default)]
    pub blocks: Vec<BlockConfig>,
}

impl CharsetRegistry {
    /// Parses block configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in HD44780 character map.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../charset.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in character map
    /// 2. `~/.config/hd44780-charset/charset.toml` (user overrides)
    /// 3. `./charset.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching block names.
    /// Unreadable override files are reported on stderr unless `quiet` is set.
    pub fn load_with_overrides(quiet: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("hd44780-charset").join("charset.toml");
            config.merge_optional(&user_config_path, "user", quiet);
        }

        config.merge_optional(Path::new("charset.toml"), "local", quiet);

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path, origin: &str, quiet: bool) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => {
                if !quiet {
                    eprintln!(
                        "Warning: Failed to load {} config from {:?}: {}",
                        origin, path, e
                    );
                }
            }
        }
    }

    /// Merges another registry into this one.
    ///
    /// A block with a known name replaces the existing one in place; new
    /// names are appended.
    pub fn merge(&mut self, other: CharsetRegistry) {
        for block in other.blocks {
            match self.blocks.iter_mut().find(|b| b.name == block.name) {
                Some(existing) => *existing = block,
                None => self.blocks.push(block),
            }
        }
    }

    pub fn get_block(&self, name: &str) -> Option<&BlockConfig> {
        self.blocks.iter().find(|b| b.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.blocks.iter().map(|b| b.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(name: &str, start: u32, chars: &str) -> BlockConfig {
        BlockConfig {
            name: name.to_string(),
            start,
            end: None,
            chars: Some(chars.to_string()),
            shared: Vec::new(),
        }
    }

    #[test]
    fn test_load_default_config() {
        let config = CharsetRegistry::load_default().unwrap();
        assert_eq!(config.names(), vec!["ascii", "arrows", "kana"]);
    }

    #[test]
    fn test_default_kana_block() {
        let config = CharsetRegistry::load_default().unwrap();
        let kana = config.get_block("kana").unwrap();
        assert_eq!(kana.start, 0xa1);
        assert_eq!(kana.shared, vec![0xe9, 0xf8]);
        let chars = kana.effective_chars().unwrap();
        assert_eq!(chars.chars().count(), 97);
        assert!(chars.starts_with("。「」"));
        assert!(chars.contains("x\u{305}y"));
        assert!(chars.ends_with("÷ █"));
    }

    #[test]
    fn test_ascii_range_chars() {
        let config = CharsetRegistry::load_default().unwrap();
        let chars = config
            .get_block("ascii")
            .unwrap()
            .effective_chars()
            .unwrap();
        assert_eq!(chars.len(), 0x7e - 0x20);
        assert!(chars.starts_with(" !\"#"));
        assert!(chars.ends_with("{|}"));
    }

    #[test]
    fn test_range_rejects_bad_bounds() {
        let mut config = block("bad", 0x80, "");
        config.chars = None;
        config.end = Some(0x80);
        assert!(config.effective_chars().is_err());
        config.end = Some(0x101);
        assert!(config.effective_chars().is_err());
    }

    #[test]
    fn test_chars_and_end_conflict() {
        let mut config = block("both", 0x20, "ab");
        config.end = Some(0x30);
        let err = config.effective_chars().unwrap_err();
        assert!(err.contains("both"));
    }

    #[test]
    fn test_merge_replaces_in_place_and_appends() {
        let mut config = CharsetRegistry {
            blocks: vec![block("a", 0x10, "x"), block("b", 0x20, "y")],
        };
        config.merge(CharsetRegistry {
            blocks: vec![block("c", 0x30, "z"), block("a", 0x40, "w")],
        });

        assert_eq!(config.names(), vec!["a", "b", "c"]);
        assert_eq!(config.get_block("a").unwrap().start, 0x40);
    }

    #[test]
    fn test_from_toml_hex_integers() {
        let config = CharsetRegistry::from_toml(
            r#"
            [[block]]
            name = "custom"
            start = 0xa0
            chars = "ab"
            shared = [0xa0]
            "#,
        )
        .unwrap();
        let custom = config.get_block("custom").unwrap();
        assert_eq!(custom.start, 0xa0);
        assert_eq!(custom.shared, vec![0xa0]);
    }
}
