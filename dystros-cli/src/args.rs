//! The `--kind` / `--inputdir` option group shared by every command.

use anyhow::Result;
use clap::Args;
use dystros_core::CollectionSet;
use dystros_core::config::DystrosConfig;

#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Path Settings")]
pub struct CollectionSetArgs {
    /// List of kinds separated by commas [default: calendar]
    #[arg(long)]
    pub kind: Option<String>,

    /// Input directory [default: ~/.config/calypso/collections/jelmer]
    #[arg(long)]
    pub inputdir: Option<String>,
}

impl CollectionSetArgs {
    /// Flags win over the config file, which wins over the built-in defaults.
    pub fn collection_set(&self, config: &DystrosConfig) -> Result<CollectionSet> {
        let inputdir = self.inputdir.clone().or_else(|| config.inputdir_str());
        let kind = self.kind.as_deref().unwrap_or(&config.kind);

        Ok(CollectionSet::from_options(inputdir.as_deref(), kind)?)
    }
}
