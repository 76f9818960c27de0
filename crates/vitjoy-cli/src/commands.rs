use std::path::PathBuf;

use anyhow::Result;
use vitjoy_runtime::{resolve_data_dir, Catalog, DisplayStore};
use vitjoy_types::{DisplayPatch, Filters, PriceRange};

use crate::args::{CatalogCommand, Cli, Commands, DisplayCommand};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let assets_root = cli.assets_root.as_ref().map(PathBuf::from);

    match cli.command {
        Commands::Catalog { command } => {
            let catalog = Catalog::load(&data_dir)?;

            match command {
                CatalogCommand::List {
                    search,
                    min_price,
                    max_price,
                    in_stock,
                    sort,
                } => {
                    let filters = Filters {
                        search,
                        price: PriceRange::new(min_price, max_price),
                        in_stock_only: in_stock,
                        sort: sort.into(),
                    };
                    handlers::list::handle(&catalog, &filters, cli.format)
                }
                CatalogCommand::Show { id, image } => {
                    handlers::show::handle(&catalog, &id, image, assets_root.as_deref(), cli.format)
                }
                CatalogCommand::Doctor => {
                    handlers::doctor::handle(&catalog, assets_root.as_deref(), cli.format)
                }
            }
        }

        Commands::Display { command } => {
            let mut store = DisplayStore::load(&data_dir);

            match command {
                DisplayCommand::Show => handlers::display::show(&store, cli.format),
                DisplayCommand::Set {
                    view_mode,
                    columns,
                    density,
                    ratio,
                    image_fit,
                    show_description,
                } => {
                    let patch = DisplayPatch {
                        view_mode: view_mode.map(Into::into),
                        columns,
                        density: density.map(Into::into),
                        ratio: ratio.map(Into::into),
                        image_fit: image_fit.map(Into::into),
                        show_description,
                    };
                    handlers::display::set(&mut store, &patch, cli.format)
                }
                DisplayCommand::Reset => handlers::display::reset(&mut store, cli.format),
            }
        }

        Commands::Browse => {
            let catalog = Catalog::load(&data_dir)?;
            let store = DisplayStore::load(&data_dir);
            handlers::browse::handle(catalog, store, assets_root)
        }
    }
}
