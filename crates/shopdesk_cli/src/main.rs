//! Customer console entry point.
//!
//! # Responsibility
//! - Resolve configuration, start file logging and pick the storage backend.
//! - Hand stdin/stdout to the customer menu until the user exits.

use log::info;
use shopdesk_core::db::open_db;
use shopdesk_core::{
    core_version, init_logging, AppConfig, Customer, CustomerConsole, CustomerService,
    InMemoryRepository, Repository, SqliteRepository, StorageBackend,
};
use std::error::Error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shopdesk: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    // Logging is best effort; the menu still works without it.
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("shopdesk: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok app=customers core_version={} storage={:?}",
        core_version(),
        config.storage
    );

    match &config.storage {
        StorageBackend::Memory => run_console(InMemoryRepository::<Customer>::new()),
        StorageBackend::Sqlite(path) => {
            let conn = open_db(path)?;
            run_console(SqliteRepository::<Customer>::try_new(&conn)?)
        }
    }
}

fn run_console<R: Repository<Customer>>(repo: R) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console =
        CustomerConsole::new(CustomerService::new(repo), stdin.lock(), stdout.lock());
    console.run()?;
    Ok(())
}
