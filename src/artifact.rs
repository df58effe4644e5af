use std::{
    fs,
    path::{Path, PathBuf},
};

use ethers::{abi::Abi, types::Bytes};

use crate::error::DeployError;

/// Compiled output for one contract type: its ABI plus creation
/// bytecode. The factory takes this descriptor explicitly instead of
/// looking contracts up by name at deploy time.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

/// Source of compiled artifacts, keyed by contract name.
pub trait ArtifactStore {
    fn load(&self, name: &str) -> Result<ContractArtifact, DeployError>;
}

/// Reads `<dir>/<name>.abi.json` and `<dir>/<name>.bin` as produced by
/// the contract build.
pub struct DirArtifactStore {
    dir: PathBuf,
}

impl DirArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read(&self, path: &Path, name: &str) -> Result<String, DeployError> {
        fs::read_to_string(path)
            .map_err(|_| DeployError::ContractArtifactNotFound(name.to_string()))
    }
}

impl ArtifactStore for DirArtifactStore {
    fn load(&self, name: &str) -> Result<ContractArtifact, DeployError> {
        let abi_json = self.read(&self.dir.join(format!("{name}.abi.json")), name)?;
        let bin_hex = self.read(&self.dir.join(format!("{name}.bin")), name)?;

        let abi: Abi = serde_json::from_str(&abi_json).map_err(|e| DeployError::InvalidArtifact {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        let bytecode = hex::decode(bin_hex.trim().trim_start_matches("0x")).map_err(|e| {
            DeployError::InvalidArtifact {
                name: name.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(ContractArtifact {
            name: name.to_string(),
            abi,
            bytecode: bytecode.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped_artifacts() -> DirArtifactStore {
        DirArtifactStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("artifacts"))
    }

    #[test]
    fn loads_shipped_dex_artifact() {
        let artifact = shipped_artifacts().load("DecentralizedExchange").unwrap();

        assert_eq!(artifact.name, "DecentralizedExchange");
        assert!(artifact.abi.function("owner").is_ok());
        assert!(artifact.abi.constructor().is_some());
        assert!(!artifact.bytecode.is_empty());
    }

    #[test]
    fn missing_artifact_is_reported_as_not_found() {
        let err = shipped_artifacts().load("TradingPool").unwrap_err();

        assert!(
            matches!(err, DeployError::ContractArtifactNotFound(ref name) if name == "TradingPool")
        );
    }

    #[test]
    fn missing_directory_is_reported_as_not_found() {
        let err = DirArtifactStore::new("does/not/exist")
            .load("DecentralizedExchange")
            .unwrap_err();

        assert!(matches!(err, DeployError::ContractArtifactNotFound(_)));
    }
}
