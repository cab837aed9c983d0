//! Golden tests for assetcat
//!
//! These tests run the binary against a checked-in fixture tree and compare the
//! combined document byte-for-byte with a checked-in expected file. They guard:
//! - Block format stability (separators, header, trailing newlines)
//! - Path-string ordering, including mixed-case names
//! - Case-insensitive extension filtering

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the sample asset tree
fn sample_assets() -> PathBuf {
    fixtures_dir().join("sample_assets")
}

fn expected_output() -> String {
    fs::read_to_string(fixtures_dir().join("sample_assets.expected"))
        .expect("expected output fixture present")
}

/// Create a command for running the assetcat binary from inside the fixture tree
fn assetcat_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("assetcat"));
    cmd.current_dir(sample_assets());
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_recursive_snapshot() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("combined.txt");

        assetcat_cmd()
            .arg("--output")
            .arg(&output)
            .assert()
            .success();

        let actual = fs::read_to_string(&output).unwrap();
        assert_eq!(actual, expected_output());
    }

    #[test]
    fn golden_block_order() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("combined.txt");

        assetcat_cmd()
            .arg("--output")
            .arg(&output)
            .assert()
            .success();

        let actual = fs::read_to_string(&output).unwrap();
        let headers: Vec<&str> = actual
            .lines()
            .filter_map(|l| l.strip_prefix("FILE: "))
            .collect();

        assert_eq!(
            headers,
            vec![
                "./App.tsx",
                "./lib/util.ts",
                "./styles/Theme.CSS",
                "./styles/main.css"
            ],
            "Blocks should be sorted by path string"
        );
        assert!(!actual.contains("Not part of the snapshot."));
    }

    #[test]
    fn golden_non_recursive_snapshot() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("combined.txt");

        assetcat_cmd()
            .arg("--output")
            .arg(&output)
            .arg("--no-recursive")
            .assert()
            .success();

        // Only the top-level block survives; it is the first block of the full snapshot
        let expected = expected_output();
        let second_block = expected
            .find("\n\n\n=")
            .map(|i| i + 2)
            .expect("more than one block");

        let actual = fs::read_to_string(&output).unwrap();
        assert_eq!(actual, &expected[..second_block]);
    }

    #[test]
    fn golden_progress_lines() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("combined.txt");

        let assert = assetcat_cmd()
            .arg("--output")
            .arg(&output)
            .arg("--no-color")
            .assert()
            .success();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        let adding: Vec<&str> = stdout
            .lines()
            .filter_map(|l| l.strip_prefix("Adding: "))
            .collect();

        assert_eq!(
            adding,
            vec![
                "./App.tsx",
                "./lib/util.ts",
                "./styles/Theme.CSS",
                "./styles/main.css"
            ]
        );
        assert!(stdout.starts_with("Scanning for .tsx, .css, .ts files in ./..."));
        assert!(stdout.contains("Found 4 files"));
        assert!(stdout.contains(&format!(
            "Done. Combined file saved as: {}",
            output.display()
        )));
    }
}
