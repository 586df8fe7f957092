use std::fmt;

/// Errors raised while turning a block configuration into a printable block.
#[derive(Debug, PartialEq, Eq)]
pub enum CharsetError {
    /// The block's glyph source is missing, ambiguous, or out of range
    InvalidDefinition { block: String, reason: String },
    /// The block produces no rows
    EmptyBlock { block: String },
    /// The first code does not fit the 8-bit code space
    StartOutOfRange { block: String, start: u32 },
    /// A shared code lies before the block or outside the code space
    SharedOutOfRange { block: String, code: u32 },
    /// A glyph would need a code past 0xFF
    CodeOverflow {
        block: String,
        glyph: char,
        code: u32,
    },
}

impl CharsetError {
    pub fn invalid_definition(block: &str, reason: impl Into<String>) -> Self {
        CharsetError::InvalidDefinition {
            block: block.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CharsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            write!(f, "\x1b[1;31merror:\x1b[0m ")?;
        } else {
            write!(f, "error: ")?;
        }

        match self {
            CharsetError::InvalidDefinition { block, reason } => {
                write!(f, "block '{}': {}", block, reason)
            }
            CharsetError::EmptyBlock { block } => {
                write!(f, "block '{}' has no glyphs", block)
            }
            CharsetError::StartOutOfRange { block, start } => {
                write!(
                    f,
                    "block '{}' starts at {:#x}, outside the 8-bit code space",
                    block, start
                )
            }
            CharsetError::SharedOutOfRange { block, code } => {
                write!(
                    f,
                    "block '{}': shared code {:#x} is not inside the block",
                    block, code
                )
            }
            CharsetError::CodeOverflow { block, glyph, code } => {
                writeln!(
                    f,
                    "block '{}': glyph U+{:04X} would need code {:#x}",
                    block, *glyph as u32, code
                )?;
                writeln!(f)?;
                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m HD44780 codes end at 0xff")
                } else {
                    write!(f, "hint: HD44780 codes end at 0xff")
                }
            }
        }
    }
}

impl std::error::Error for CharsetError {}

fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a block name is not found
#[derive(Debug)]
pub struct BlockNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl BlockNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for BlockNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m block '{}' not found", self.name)?;
        } else {
            writeln!(f, "error: block '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`hd44780-charset --list`\x1b[0m to see all blocks"
            )
        } else {
            write!(f, "      run `hd44780-charset --list` to see all blocks")
        }
    }
}

impl std::error::Error for BlockNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }

    let mut prev: Vec<usize> = (0..=s2.len()).collect();
    let mut curr = vec![0; s2.len() + 1];

    for (i, c1) in s1.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in s2.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2.len()]
}

/// Find the closest matching block name
pub fn find_closest_block(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
