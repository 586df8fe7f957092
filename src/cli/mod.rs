mod args;
mod handlers;

use clap::Parser;
use hd44780_charset::CharsetRegistry;
use std::path::PathBuf;

use args::{ByteStyleCli, OutputFormat};

#[derive(Parser)]
#[command(name = "hd44780-charset")]
#[command(version)]
#[command(about = "Print the HD44780 character ROM as a code to UTF-8 lookup table", long_about = None)]
struct Cli {
    /// Only print this block (repeatable)
    #[arg(short = 'b', long = "block", value_name = "NAME")]
    blocks: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Notation for the UTF-8 bytes of each glyph
    #[arg(long, value_enum, default_value_t = ByteStyleCli::Literal)]
    bytes: ByteStyleCli,

    /// List available blocks
    #[arg(short, long)]
    list: bool,

    /// Extra charset file applied after the standard overrides
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress warnings about unreadable override files
    #[arg(short, long)]
    quiet: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut registry = CharsetRegistry::load_with_overrides(cli.quiet)
        .map_err(|e| format!("error: cannot load built-in charset: {}", e))?;

    if let Some(path) = &cli.config {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let extra = CharsetRegistry::load_from_file(&PathBuf::from(expanded))
            .map_err(|e| {
                format!(
                    "error: cannot load charset file '{}': {}",
                    path.display(),
                    e
                )
            })?;
        registry.merge(extra);
    }

    if cli.list {
        return handlers::list::handle(&registry);
    }

    handlers::table::handle(&registry, &cli.blocks, cli.format, cli.bytes.into())
}
