//! authgate - Entry Point
//!
//! A terminal shell over the demo auth core: log in, check the session and
//! reset a password, with state kept in a key/value store.

use std::io;
use std::process::ExitCode;

use log::{error, info};

use authgate::auth::credentials::seed_directory;
use authgate::config::{AppConfig, StorageBackend};
use authgate::error::AppError;
use authgate::session::AuthContext;
use authgate::shell::run_shell;
use authgate::storage::{FileStorage, MemoryStorage, Storage};
use authgate::utils::logging::setup_logging;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            setup_logging("info");
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    setup_logging(&config.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    let storage: Box<dyn Storage> = match config.storage_backend {
        StorageBackend::File => {
            info!("Using file storage at {:?}", config.storage_root_path());
            Box::new(FileStorage::open(config.storage_root_path())?)
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Box::new(MemoryStorage::new())
        }
    };

    let mut ctx = AuthContext::initialize(storage, &seed_directory(), config.auth_limits())?;

    let stdin = io::stdin();
    run_shell(&mut ctx, stdin.lock(), io::stdout().lock())?;

    info!("Bye");
    Ok(())
}
