use clap::Parser;
use hawaii_climate_api::cli::{run, Cli};
use hawaii_climate_api::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
