//! Product controller demo: add one sample product, list, exit.

use log::info;
use shopdesk_core::db::open_db;
use shopdesk_core::{
    core_version, init_logging, AppConfig, InMemoryRepository, Product, ProductController,
    ProductService, Repository, SqliteRepository, StorageBackend,
};
use std::error::Error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("product_demo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("product_demo: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok app=product_demo core_version={}",
        core_version()
    );

    match &config.storage {
        StorageBackend::Memory => run_demo(InMemoryRepository::<Product>::new()),
        StorageBackend::Sqlite(path) => {
            let conn = open_db(path)?;
            run_demo(SqliteRepository::<Product>::try_new(&conn)?)
        }
    }
}

fn run_demo<R: Repository<Product>>(repo: R) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut controller = ProductController::new(ProductService::new(repo), stdout.lock());
    controller.run_demo()?;
    Ok(())
}
