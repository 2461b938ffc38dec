//! Process-level tests for the hf_assets binary
//!
//! Each run happens in a scratch directory with `HF_TOKEN` removed and the
//! user config location redirected, so no `.env` or config file leaks in.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hf_assets"))
        .args(args)
        .current_dir(dir)
        .env_remove("HF_TOKEN")
        .env_remove("RUST_LOG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .output()
        .unwrap()
}

#[test]
fn test_missing_token_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["--repo-id", "org/model"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error: Hugging Face Hub token is required"));
    assert!(stderr.contains("HF_TOKEN"));
    assert!(!temp_dir.path().join("configs").exists());
}

#[test]
fn test_missing_repo_id_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["-t", "abc123"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error: Hugging Face Hub repository ID is required"));
    assert!(!temp_dir.path().join("configs").exists());
}

#[test]
fn test_missing_config_file_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(
        temp_dir.path(),
        &["-t", "abc123", "-r", "org/model", "--config", "absent.toml"],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error: Configuration file not found: absent.toml"));
}
