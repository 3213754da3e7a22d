use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Classify files under a directory and upload them per the routing config
    Upload {
        /// Source directory to upload
        #[arg(default_value = ".")]
        path: PathBuf,

        /// JSON config with routes and backend sections
        #[arg(short, long)]
        config: PathBuf,

        /// Classify and route without transferring anything
        #[arg(short, long)]
        dry_run: bool,

        /// Skip hidden files and directories
        #[arg(long)]
        skip_hidden: bool,

        /// Maximum traversal depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Follow symbolic links
        #[arg(long)]
        follow_symlinks: bool,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
}
