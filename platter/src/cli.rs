use clap::{Parser, Subcommand};
use platter_common::{PageContext, ViewMode};
use platter_core::search::SortKey;

/// Browse the Discogs vinyl catalog and manage collection entries.
#[derive(Parser, Debug)]
#[command(name = "platter", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the catalog
    Search {
        /// Free-text query
        query: String,
        /// Result order: "relevance" or "date" (newest additions first)
        #[arg(long, default_value = "relevance")]
        sort: SortKey,
        /// Card layout: block, list or detail
        #[arg(long, default_value = "list")]
        view: ViewMode,
        /// Page of results
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Print HTML instead of text
        #[arg(long)]
        html: bool,
    },
    /// Show one release with every detail and its tracklist
    Release {
        /// Discogs release id
        id: String,
        /// "all" to offer adding, "collection" to offer removal
        #[arg(long, default_value = "all")]
        page: PageContext,
        /// Owner of the collection being viewed
        #[arg(long)]
        owner: Option<String>,
        /// Print HTML instead of text
        #[arg(long)]
        html: bool,
    },
    /// Add a release to one of your collections
    Add {
        released_id: String,
    },
    /// Remove a release from your collection
    Remove {
        released_id: String,
    },
}
