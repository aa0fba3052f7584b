use std::path::PathBuf;

pub const ARTIFACTS_DIR: &str = "artifacts/contracts";
pub const ABI_DIR: &str = "abis";

/// Core contracts whose ABIs the agents consume, in export order.
pub const CORE_CONTRACTS: [&str; 3] = ["Inbox", "Outbox", "InterchainGasPaymaster"];

pub fn artifact_path(name: &str) -> PathBuf {
    PathBuf::from(ARTIFACTS_DIR)
        .join(format!("{}.sol", name))
        .join(format!("{}.json", name))
}

pub fn abi_path(name: &str) -> PathBuf {
    PathBuf::from(ABI_DIR).join(format!("{}.abi.json", name))
}
