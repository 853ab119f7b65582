use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notehub")]
#[command(about = "Publish markdown notes from a vault into a shared public folder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault root (defaults to $NOTEHUB_VAULT, then the current directory)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List publish-requested notes and their validation status
    #[command(alias = "s")]
    Scan,

    /// Scan, confirm a selection, and move it into the public folder
    #[command(alias = "p")]
    Publish {
        /// Publish all valid notes without the interactive prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Move published notes back to the notes folder
    #[command(alias = "u")]
    Unpublish {
        /// Vault-relative paths of notes under the public folder
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (public-folder, notes-folder, required-fields)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
