//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use imgls_core::StoreConfig;
use imgls_core::config::DEFAULT_STORAGE_DRIVER;
use imgls_core::config::DEFAULT_STORAGE_ROOT;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgls")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Storage root directory
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_STORAGE_ROOT)]
    pub root: PathBuf,

    /// Storage driver whose image index is read
    #[arg(long, global = true, value_name = "NAME", default_value = DEFAULT_STORAGE_DRIVER)]
    pub storage_driver: String,

    /// Print debug logs to stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

impl Cli {
    /// Store location selected by the global options.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            root: self.root.clone(),
            driver: self.storage_driver.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List images in local storage
    #[command(long_about = "Lists locally stored images.")]
    Images(ImagesArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct ImagesArgs {
    /// Display only image IDs
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not print column headings
    #[arg(short = 'n', long = "noheading")]
    pub no_heading: bool,

    /// Do not truncate output
    #[arg(long = "notruncate")]
    pub no_truncate: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
