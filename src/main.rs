use std::{env, io, sync::Arc};

use dex_deployer::{runner, DirArtifactStore, EthereumBackend, DEX_CONTRACT};
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{LocalWallet, Signer},
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    // All configuration comes from the environment; the tool itself
    // takes no arguments.
    let private_key = env::var("PRIVATE_KEY")
        .map_err(|_| eyre::eyre!("set PRIVATE_KEY with the deployer wallet private key"))?;
    let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| "http://localhost:8545".to_string());
    let chain_id: u64 = match env::var("CHAIN_ID") {
        Ok(value) => value.parse()?,
        Err(_) => 1337,
    };
    let artifacts_dir = env::var("ARTIFACTS_DIR").unwrap_or_else(|_| "artifacts".to_string());

    log::debug!("connecting to {rpc_url} (chain id {chain_id})");
    let provider = Provider::<Http>::try_from(rpc_url.as_str())?;
    let wallet = private_key.parse::<LocalWallet>()?.with_chain_id(chain_id);
    let client = Arc::new(SignerMiddleware::new(provider, wallet));

    let backend = EthereumBackend::new(client);
    let store = DirArtifactStore::new(artifacts_dir);

    runner::run(&backend, &backend, &store, DEX_CONTRACT, &mut io::stdout()).await?;
    Ok(())
}
