use crate::export::PrintFormat;
use crate::medialib::LibraryIndex;
use clap::Parser;
use std::path::PathBuf;

/// medialib-tree - browse your music library as a tree 🌲
#[derive(Parser, Debug, Default)]
#[command(name = "medialib-tree", version, about)]
pub struct Args {
    /// Music directory to scan (repeatable, overrides config.toml)
    #[arg(long = "music-dir", short = 'd', value_name = "DIR")]
    pub music_dirs: Vec<PathBuf>,

    /// Group by album, artist, genre or folder
    #[arg(long, short = 'i')]
    pub index: Option<LibraryIndex>,

    /// Only show tracks matching this query
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Print the whole tree to stdout and exit
    #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "text")]
    pub print: Option<PrintFormat>,

    /// Use another configuration directory
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}
