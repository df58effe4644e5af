//! Deploys the `DecentralizedExchange` contract to an Ethereum
//! compatible network and reports the result on the console.
//!
//! The deployment sequence lives in [`runner::run`] behind two injected
//! capabilities, [`runner::SignerProvider`] and
//! [`runner::ContractFactory`], with [`ethereum::EthereumBackend`] as
//! the JSON-RPC implementation of both.

pub mod artifact;
pub mod error;
pub mod ethereum;
pub mod runner;

pub use artifact::{ArtifactStore, ContractArtifact, DirArtifactStore};
pub use error::DeployError;
pub use ethereum::EthereumBackend;
pub use runner::{
    run, ContractFactory, DeployedContract, PendingDeployment, SignerProvider, DEX_CONTRACT,
    FEE_RATE,
};
