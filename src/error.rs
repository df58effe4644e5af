use thiserror::Error;

/// Everything a deployment run can fail with. The binary does not
/// differentiate between these: any variant ends the process with a
/// non-zero exit code after printing the error.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("no signer available from the provider")]
    NoSignerAvailable,

    #[error("no compiled artifact for contract {0} (run the contract build first)")]
    ContractArtifactNotFound(String),

    #[error("malformed artifact for contract {name}: {reason}")]
    InvalidArtifact { name: String, reason: String },

    #[error("provider error: {0}")]
    Provider(String),

    #[error("contract error: {0}")]
    Contract(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
