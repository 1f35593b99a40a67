use std::process::ExitCode;

use scoop::config::Config;
use scoop::routes::{self, App};
use scoop::store::Store;
use scoop::Server;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), scoop::Error> {
    let config = Config::load()?;

    info!(database = %config.database.display(), "opening store");
    let store = Store::open(&config.database)?;

    let app = routes::router(App::new(store));
    Server::bind(config.bind).await?.serve(app).await
}
