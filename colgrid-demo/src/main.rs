mod app;
mod config;
mod error;
mod paths;
mod runtime;
mod view;

use std::fs::{self, File};
use std::process::ExitCode;

use log::{LevelFilter, error, info};
use simplelog::{Config, WriteLogger};

use crate::app::App;
use crate::config::DemoConfig;
use crate::error::DemoError;

fn init_logging(level: LevelFilter) {
    paths::rotate_logs();

    let Some(path) = paths::log_file() else {
        eprintln!("No cache directory; logging disabled");
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

async fn start() -> Result<(), DemoError> {
    let config = DemoConfig::from_env()?;

    init_logging(config.log_level);
    info!("Starting with {:?}", config);

    let app = App::from_config(&config)?;
    runtime::run(app).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
