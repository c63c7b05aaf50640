//! Walk a deployed `TestERC20` through minting, transferring and burning.
use clap::Parser;
use test_erc20_script::{
    config, config::InteractArgs, interact::Scenario, logging,
};
use tracing::{debug, error};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let env_file = config::load_env();
    logging::init();
    if let Some(path) = env_file {
        debug!(path = %path.display(), "loaded environment file");
    }

    let args = InteractArgs::parse();
    let scenario = Scenario::new(&args)?;

    scenario.log_supply("initial state").await?;

    if let Err(e) = scenario.run().await {
        error!("interaction failed: {e:#}");
    }

    scenario.log_supply("final state").await?;

    Ok(())
}
