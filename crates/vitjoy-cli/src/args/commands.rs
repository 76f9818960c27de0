use clap::Subcommand;

use super::enums::{DensityArg, ImageFitArg, RatioArg, SortKey, ViewModeArg};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Query and inspect catalog products")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    #[command(about = "Read and update persisted display preferences")]
    Display {
        #[command(subcommand)]
        command: DisplayCommand,
    },

    #[command(about = "Browse the catalog interactively")]
    Browse,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    #[command(about = "List products with filtering and sorting")]
    List {
        /// Case-insensitive substring match against product titles
        #[arg(long, default_value = "")]
        search: String,

        /// Inclusive lower price bound, tenge
        #[arg(long, default_value = "0")]
        min_price: u64,

        /// Inclusive upper price bound, tenge
        #[arg(long, default_value = "50000")]
        max_price: u64,

        /// Only products explicitly marked as in stock
        #[arg(long)]
        in_stock: bool,

        #[arg(long, default_value = "name")]
        sort: SortKey,
    },

    #[command(about = "Show one product in detail")]
    Show {
        /// Product id (the stable key, e.g. green-boost)
        id: String,

        /// Image index to open the gallery at (0-based)
        #[arg(long)]
        image: Option<usize>,
    },

    #[command(about = "Check catalog integrity (ids, images, links, assets)")]
    Doctor,
}

#[derive(Subcommand)]
pub enum DisplayCommand {
    #[command(about = "Print the current display preferences")]
    Show,

    #[command(about = "Update display preferences (merge, unnamed fields keep their value)")]
    Set {
        #[arg(long)]
        view_mode: Option<ViewModeArg>,

        /// Grid column count (1-4)
        #[arg(long)]
        columns: Option<u8>,

        #[arg(long)]
        density: Option<DensityArg>,

        #[arg(long)]
        ratio: Option<RatioArg>,

        #[arg(long)]
        image_fit: Option<ImageFitArg>,

        #[arg(long)]
        show_description: Option<bool>,
    },

    #[command(about = "Reset display preferences to defaults")]
    Reset,
}
