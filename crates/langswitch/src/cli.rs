use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Langswitch: language switcher widgets for multilingual sites
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the renderers found below a storage root
    Catalog {
        /// Directory containing `widgets/`
        root: PathBuf,
    },
    /// Print the language links of one page
    Links {
        /// Site configuration (.toml, .yaml or .json)
        #[arg(short, long)]
        config: PathBuf,
        /// Current URL without language selector
        #[arg(short, long)]
        url: String,
        /// Language the page is shown in; the default language when omitted
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Render every active widget for one or more pages
    Render {
        /// Site configuration (.toml, .yaml or .json)
        #[arg(short, long)]
        config: PathBuf,
        /// Page URLs, each rendered as its own request
        #[arg(short, long = "url", required = true, num_args = 1..)]
        urls: Vec<String>,
        /// Language the pages are shown in; the default language when omitted
        #[arg(short, long)]
        lang: Option<String>,
        /// Render in translation edit mode
        #[arg(long)]
        edit: bool,
        /// Treat the pages as not-found pages
        #[arg(long)]
        not_found: bool,
        /// Stored default-language preference of the visitor
        #[arg(long)]
        preferred: Option<String>,
    },
}
