//! Loading of compiled contract artifacts in the format the hardhat
//! toolchain writes to `artifacts/contracts/<Source>.sol/<Contract>.json`.

use {
    alloy::{
        json_abi::{JsonAbi, StateMutability},
        primitives::{Bytes, hex},
    },
    serde::Deserialize,
    std::{
        collections::BTreeMap,
        path::{Path, PathBuf},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("could not read artifact {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("artifact {path:?} is not a valid contract artifact")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("expected artifact of contract {expected} but found {found}")]
    UnexpectedContract { expected: String, found: String },
    #[error("bytecode references unlinked libraries: {}", .0.join(", "))]
    UnlinkedLibraries(Vec<String>),
    #[error("bytecode is not valid hex")]
    InvalidBytecode(#[source] hex::FromHexError),
    #[error("contract {0} has no creation bytecode, it is abstract or an interface")]
    EmptyBytecode(String),
    #[error("constructor expects {0} arguments but the deployment passes none")]
    ConstructorArguments(usize),
    #[error("contract does not expose a view function {0}() without arguments")]
    MissingView(String),
}

/// A compiled contract: its ABI and the bytecode that creates it.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub contract_name: String,
    pub source_name: Option<String>,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

/// Artifact as it is stored on disk. The bytecode stays a string until the
/// link references are checked because unlinked bytecode contains
/// `__$<hash>$__` placeholders that are not hex.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: String,
    #[serde(default)]
    source_name: Option<String>,
    abi: JsonAbi,
    bytecode: String,
    #[serde(default)]
    link_references: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

impl Artifact {
    /// Reads the artifact at `path` and makes sure it can be deployed as is.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let json = std::fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json).map_err(|err| match err {
            ArtifactError::Parse { source, .. } => ArtifactError::Parse {
                path: path.to_owned(),
                source,
            },
            err => err,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(json).map_err(|source| ArtifactError::Parse {
            path: PathBuf::new(),
            source,
        })?;

        let libraries: Vec<String> = raw
            .link_references
            .iter()
            .flat_map(|(source, libraries)| {
                libraries.keys().map(move |library| format!("{source}:{library}"))
            })
            .collect();
        if !libraries.is_empty() {
            return Err(ArtifactError::UnlinkedLibraries(libraries));
        }

        let bytecode = hex::decode(raw.bytecode.trim()).map_err(ArtifactError::InvalidBytecode)?;
        if bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(raw.contract_name));
        }

        if let Some(constructor) = &raw.abi.constructor {
            if !constructor.inputs.is_empty() {
                return Err(ArtifactError::ConstructorArguments(
                    constructor.inputs.len(),
                ));
            }
        }

        Ok(Self {
            contract_name: raw.contract_name,
            source_name: raw.source_name,
            abi: raw.abi,
            bytecode: bytecode.into(),
        })
    }

    pub fn ensure_contract(&self, expected: &str) -> Result<(), ArtifactError> {
        if self.contract_name != expected {
            return Err(ArtifactError::UnexpectedContract {
                expected: expected.to_string(),
                found: self.contract_name.clone(),
            });
        }
        Ok(())
    }

    /// Checks that the ABI has a read-only function `name` that takes no
    /// arguments.
    pub fn ensure_view(&self, name: &str) -> Result<(), ArtifactError> {
        let is_view = self.abi.function(name).is_some_and(|overloads| {
            overloads.iter().any(|function| {
                function.inputs.is_empty()
                    && matches!(
                        function.state_mutability,
                        StateMutability::View | StateMutability::Pure
                    )
            })
        });
        if !is_view {
            return Err(ArtifactError::MissingView(name.to_string()));
        }
        Ok(())
    }
}
