use anyhow::Result;
use clap::Parser;
use sky_stage::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    sky_stage::run(cli).await
}
