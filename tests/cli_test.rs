use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::tempdir;

use abi_export::config::CORE_CONTRACTS;

#[test]
fn test_exits_zero_when_all_artifacts_present() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("abis")).unwrap();
    for name in CORE_CONTRACTS {
        _write_artifact(tmp.path(), name, r#"{"abi": [], "bytecode": "0x"}"#);
    }

    _cmd().current_dir(tmp.path()).assert().success();

    for name in CORE_CONTRACTS {
        assert!(tmp
            .path()
            .join("abis")
            .join(format!("{}.abi.json", name))
            .exists());
    }
}

#[test]
fn test_exits_nonzero_on_missing_artifact() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("abis")).unwrap();

    _cmd().current_dir(tmp.path()).assert().failure();
}

#[test]
fn test_rejects_arguments() {
    let tmp = tempdir().unwrap();

    _cmd()
        .current_dir(tmp.path())
        .arg("Inbox")
        .assert()
        .failure();
}

fn _cmd() -> Command {
    Command::cargo_bin("abi-export").unwrap()
}

fn _write_artifact(root: &Path, name: &str, content: &str) {
    let dir = root
        .join("artifacts/contracts")
        .join(format!("{}.sol", name));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.json", name)), content).unwrap();
}
