//! Command-line surface.
//!
//! Every flag defaults to the zero-argument behaviour: look up key `a` in the
//! embedded `config/application.properties`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use propkit_core::{ConfigFormat, DEFAULT_KEY, DEFAULT_RESOURCE};

#[derive(Debug, Parser)]
#[command(name = "propkit", version, about = "Prints one key from a bundled properties resource")]
pub struct Cli {
    /// Resolve resources under this directory instead of the embedded set
    #[arg(long, env = "PROPKIT_RESOURCE_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Logical name of the properties resource
    #[arg(long, env = "PROPKIT_RESOURCE", value_name = "NAME", default_value = DEFAULT_RESOURCE)]
    pub resource: String,

    /// Key to look up
    #[arg(long, env = "PROPKIT_KEY", default_value = DEFAULT_KEY, conflicts_with = "list")]
    pub key: String,

    /// Value to print when the key is absent
    #[arg(long = "default", value_name = "VALUE", conflicts_with = "list")]
    pub default_value: Option<String>,

    /// Print every entry instead of a single key
    #[arg(long)]
    pub list: bool,

    /// Output format for --list
    #[arg(long, value_enum, default_value_t = ListFormat::Properties)]
    pub format: ListFormat,
}

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Properties,
    Json,
}

impl From<ListFormat> for ConfigFormat {
    fn from(format: ListFormat) -> Self {
        match format {
            ListFormat::Properties => ConfigFormat::Properties,
            ListFormat::Json => ConfigFormat::Json,
        }
    }
}
