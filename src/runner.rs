use std::io::Write;

use async_trait::async_trait;
use ethers::{
    types::{Address, H256, U256},
    utils::format_ether,
};

use crate::{
    artifact::{ArtifactStore, ContractArtifact},
    error::DeployError,
};

/// The contract this tool deploys.
pub const DEX_CONTRACT: &str = "DecentralizedExchange";

/// Swap fee baked into the contract at compile time. Display only, the
/// chain is never queried for it.
pub const FEE_RATE: &str = "0.3%";

/// A deployment transaction that has been signed and broadcast but not
/// necessarily mined yet.
#[derive(Debug, Clone, Copy)]
pub struct PendingDeployment {
    pub tx_hash: H256,
}

/// A mined deployment: where the contract lives and which transaction
/// created it.
#[derive(Debug, Clone, Copy)]
pub struct DeployedContract {
    pub address: Address,
    pub tx_hash: H256,
}

/// Access to the accounts the surrounding environment can sign with.
#[async_trait]
pub trait SignerProvider {
    async fn signers(&self) -> Result<Vec<Address>, DeployError>;

    async fn balance(&self, account: Address) -> Result<U256, DeployError>;
}

/// Deploys a compiled contract and reads it back once mined.
#[async_trait]
pub trait ContractFactory {
    /// Signs and broadcasts the creation transaction. Returns as soon
    /// as the node has accepted it; the transaction may still be
    /// pending.
    async fn deploy(&self, artifact: &ContractArtifact) -> Result<PendingDeployment, DeployError>;

    /// Waits until the transaction is mined. No timeout: if the node
    /// never mines it, this never returns.
    async fn confirm(&self, pending: &PendingDeployment) -> Result<DeployedContract, DeployError>;

    /// Calls the deployed contract's `owner()` accessor.
    async fn owner(
        &self,
        artifact: &ContractArtifact,
        contract: Address,
    ) -> Result<Address, DeployError>;
}

/// Runs the whole deployment sequence: pick a signer, report it, load
/// the artifact, deploy, wait for the transaction to be mined, then
/// report the deployed contract. Strictly sequential, no retries.
///
/// Report lines go to `out`; the contract address is only written after
/// the provider has confirmed the transaction.
pub async fn run<W: Write>(
    signers: &impl SignerProvider,
    factory: &impl ContractFactory,
    store: &impl ArtifactStore,
    contract_name: &str,
    out: &mut W,
) -> Result<DeployedContract, DeployError> {
    writeln!(out, "Deploying {contract_name} contract...")?;

    let accounts = signers.signers().await?;
    let deployer = *accounts.first().ok_or(DeployError::NoSignerAvailable)?;
    writeln!(out, "Deploying contracts with the account: {deployer:?}")?;

    let balance = signers.balance(deployer).await?;
    writeln!(out, "Account balance: {balance}")?;
    log::debug!("deployer balance: {} ETH", format_ether(balance));

    let artifact = store.load(contract_name)?;

    let pending = factory.deploy(&artifact).await?;
    log::debug!("deployment transaction submitted: {:?}", pending.tx_hash);

    let deployed = factory.confirm(&pending).await?;
    writeln!(out, "{contract_name} contract deployed to: {:?}", deployed.address)?;
    writeln!(out, "Transaction hash: {:?}", deployed.tx_hash)?;

    let owner = factory.owner(&artifact, deployed.address).await?;
    writeln!(out, "Contract owner: {owner:?}")?;
    writeln!(out, "Fee rate: {FEE_RATE}")?;
    writeln!(out, "Ready to create trading pools!")?;

    Ok(deployed)
}
