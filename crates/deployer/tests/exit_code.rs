use std::process::{Command, Output};

/// Runs the binary without inheriting configuration from the environment.
fn deployer(args: &[&str], env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_deployer"))
        .env_clear()
        .envs(env.iter().copied())
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn unreachable_node_exits_with_failure() {
    let output = deployer(
        &["--node-url", "http://127.0.0.1:1", "--node-timeout", "2"],
        &[],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"), "{stderr}");
    assert!(stderr.contains("deployment failed"), "{stderr}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Deploying"));
}

#[test]
fn malformed_private_key_exits_with_failure() {
    let output = deployer(&[], &[("PRIVATE_KEY", "0x1234")]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--private-key"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn help_exits_with_success() {
    let output = deployer(&["--help"], &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--node-url"));
}
