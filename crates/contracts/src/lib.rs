//! Everything the deployer needs to know about the contract it deploys and
//! the networks it deploys to.
pub mod artifact;
pub mod networks;
pub mod project;

pub use {
    artifact::{Artifact, ArtifactError},
    networks::Network,
    project::Project,
};
