//! Deploy `TestERC20` and print its deployment record as JSON.
use clap::Parser;
use test_erc20_script::{config, config::DeployArgs, deploy, logging};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let env_file = config::load_env();
    logging::init();
    if let Some(path) = env_file {
        debug!(path = %path.display(), "loaded environment file");
    }

    let args = DeployArgs::parse();
    let record = deploy::run(&args).await?;

    let json = serde_json::to_string_pretty(&record)?;
    println!("{json}");

    if let Some(path) = &args.output {
        std::fs::write(path, &json)?;
        info!(path = %path.display(), "deployment record written");
    }

    Ok(())
}
