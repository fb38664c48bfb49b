use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "csdoc",
    about = "C# codebase documentation index and markup cross-reference generator",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Root directory to scan (default: current directory)
    #[arg(short, long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Force JSON for the stdout summary (default: YAML, or JSON when not a TTY)
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract type and member structure into a documentation index
    Docs {
        /// Output JSON file
        #[arg(short, long, default_value = "docs_index.json")]
        output: PathBuf,
    },

    /// Link XML tag values to known C# types via the documentation index
    XmlLinks {
        /// Previously generated documentation index to read type names from
        #[arg(short, long, default_value = "docs_index.json")]
        index: PathBuf,

        /// Output JSON file
        #[arg(short, long, default_value = "xml_class_links.json")]
        output: PathBuf,
    },

    /// Cross-reference .Translate() call sites against XML translation keys
    Translations {
        /// Directory holding the XML definitions (default: the root)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output JSON file
        #[arg(short, long, default_value = "translation_links.json")]
        output: PathBuf,
    },
}
