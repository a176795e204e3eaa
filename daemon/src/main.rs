#![allow(clippy::module_inception)]

mod api;
mod catalog;
mod clap;
mod import;
mod index;
mod likes;
mod prelude;

use crate::prelude::*;

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut config = Args::parse();
    if let Some(Command::Import(import)) = config.command.take() {
        match import_catalog(&import).await {
            Ok(count) => info!("Wrote {count} series to {:?}", import.output),
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let config = Arc::new(config);
    if config.result_limit == 0 {
        warn!("The result limit is 0, every search will come back empty.")
    }

    let catalog = match load_catalog(&config.catalog).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    if catalog.is_empty() {
        warn!("The catalog at {:?} is empty", config.catalog);
    }

    let index = Arc::new(SeriesIndex::new(catalog));
    info!("Indexed {} series ({} distinct words)", index.len(), index.word_count());

    let likes = Arc::new(LikeTable::new());
    serve_api(config, index, likes).await;
}
