//! Bindings for the `Project` contract of the decentralized social media
//! app. Only the read-only counters are bound, the bytecode is taken from
//! the compiled artifact at deployment time.

use {
    crate::artifact::{Artifact, ArtifactError},
    std::path::Path,
};

#[allow(non_snake_case)]
mod ProjectPrivate {
    alloy::sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        interface Project {
            function getTotalUsers() external view returns (uint256);
            function getTotalPosts() external view returns (uint256);
        }
    );
}

#[allow(non_snake_case)]
pub mod Project {
    use alloy::providers::DynProvider;

    pub use super::ProjectPrivate::Project::*;
    pub type Instance = ProjectInstance<DynProvider>;

    /// Name of the contract in the artifact.
    pub const NAME: &str = "Project";
    pub const DESCRIPTION: &str = "Decentralized Social Media";
    /// Views read back after deployment to check the contract responds.
    pub const VIEWS: [&str; 2] = ["getTotalUsers", "getTotalPosts"];
}

/// Loads the `Project` artifact and checks that it is the contract the
/// deployer knows how to talk to.
pub fn load_artifact(path: &Path) -> Result<Artifact, ArtifactError> {
    let artifact = Artifact::load(path)?;
    artifact.ensure_contract(Project::NAME)?;
    for view in Project::VIEWS {
        artifact.ensure_view(view)?;
    }
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::artifact::tests::project_artifact,
        alloy::sol_types::SolCall,
        serde_json::json,
        std::io::Write,
    };

    #[test]
    fn selectors_match_the_artifact_bytecode() {
        // The test contract dispatches on these selectors.
        assert_eq!(Project::getTotalUsersCall::SELECTOR, [0x9b, 0xe5, 0x72, 0xf6]);
        assert_eq!(Project::getTotalPostsCall::SELECTOR, [0x5f, 0xe2, 0x26, 0xb4]);
    }

    #[test]
    fn loads_project_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", project_artifact()).unwrap();

        let artifact = load_artifact(file.path()).unwrap();
        assert_eq!(artifact.contract_name, Project::NAME);
    }

    #[test]
    fn rejects_project_without_counters() {
        let mut artifact = project_artifact();
        artifact["abi"] = json!([artifact["abi"][0].clone()]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{artifact}").unwrap();

        assert!(matches!(
            load_artifact(file.path()).unwrap_err(),
            ArtifactError::MissingView(name) if name == "getTotalPosts"
        ));
    }
}
