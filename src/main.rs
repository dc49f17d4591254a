mod model;
mod server;

use clap::Parser;

use crate::server::{cli::Cli, config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();

    let result = match Config::from_env() {
        Ok(config) => cli.run(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
