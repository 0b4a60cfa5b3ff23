//! Images command implementation

use crate::cli::ImagesArgs;
use crate::error::add_store_context;
use anyhow::Result;
use imgls_core::ImagesOptions;
use imgls_core::JsonFileStore;
use imgls_core::StoreConfig;
use imgls_core::list_images;
use log::debug;
use std::io::Write;

impl From<&ImagesArgs> for ImagesOptions {
    fn from(args: &ImagesArgs) -> Self {
        Self {
            quiet: args.quiet,
            no_heading: args.no_heading,
            truncate: !args.no_truncate,
            json: args.json,
        }
    }
}

pub fn execute<W: Write>(args: &ImagesArgs, config: &StoreConfig, out: &mut W) -> Result<()> {
    let options = ImagesOptions::from(args);
    let store = JsonFileStore::new(config);
    debug!("reading images from {}", store.index_path().display());

    add_store_context(list_images(&store, &options, out), config)?;
    out.flush()?;

    Ok(())
}
