use std::sync::Arc;

use async_trait::async_trait;
use ethers::{
    contract::Contract,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, PendingTransaction, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, TransactionRequest, U256},
};

use crate::{
    artifact::ContractArtifact,
    error::DeployError,
    runner::{ContractFactory, DeployedContract, PendingDeployment, SignerProvider},
};

pub type Client = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Signer provider and contract factory backed by a JSON-RPC node and
/// a locally held wallet key.
pub struct EthereumBackend {
    client: Arc<Client>,
}

impl EthereumBackend {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SignerProvider for EthereumBackend {
    async fn signers(&self) -> Result<Vec<Address>, DeployError> {
        // The environment configures exactly one signing key.
        Ok(vec![self.client.signer().address()])
    }

    async fn balance(&self, account: Address) -> Result<U256, DeployError> {
        self.client
            .get_balance(account, None)
            .await
            .map_err(|e| DeployError::Provider(e.to_string()))
    }
}

#[async_trait]
impl ContractFactory for EthereumBackend {
    async fn deploy(&self, artifact: &ContractArtifact) -> Result<PendingDeployment, DeployError> {
        let code = artifact.bytecode.to_vec();
        let data = match artifact.abi.constructor() {
            Some(constructor) => constructor
                .encode_input(code, &[])
                .map_err(|e| DeployError::Contract(e.to_string()))?,
            None => code,
        };

        let tx = TransactionRequest::new().data(data);
        let pending = self
            .client
            .send_transaction(tx, None)
            .await
            .map_err(|e| DeployError::Provider(e.to_string()))?;

        Ok(PendingDeployment { tx_hash: *pending })
    }

    async fn confirm(&self, pending: &PendingDeployment) -> Result<DeployedContract, DeployError> {
        let receipt = PendingTransaction::new(pending.tx_hash, self.client.provider())
            .await
            .map_err(|e| DeployError::Provider(e.to_string()))?
            .ok_or_else(|| {
                DeployError::Provider(format!(
                    "transaction {:?} was dropped before it was mined",
                    pending.tx_hash
                ))
            })?;

        let address = receipt.contract_address.ok_or_else(|| {
            DeployError::Provider(format!(
                "receipt for {:?} carries no contract address",
                receipt.transaction_hash
            ))
        })?;

        Ok(DeployedContract {
            address,
            tx_hash: receipt.transaction_hash,
        })
    }

    async fn owner(
        &self,
        artifact: &ContractArtifact,
        contract: Address,
    ) -> Result<Address, DeployError> {
        let instance = Contract::new(contract, artifact.abi.clone(), self.client.clone());
        instance
            .method::<_, Address>("owner", ())
            .map_err(|e| DeployError::Contract(e.to_string()))?
            .call()
            .await
            .map_err(|e| DeployError::Contract(e.to_string()))
    }
}
