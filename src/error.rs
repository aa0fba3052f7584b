use std::io;
use std::path::{Path, PathBuf};

/// Ways a single ABI export can fail. Each variant carries the contract
/// name and the path involved so the operator can tell which step of the
/// batch went wrong without re-running anything.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no build artifact for {name} at {}", path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("failed to read build artifact for {name} at {}", path.display())]
    Read {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("build artifact for {name} at {} is not valid JSON", path.display())]
    Parse {
        name: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("build artifact for {name} at {} has no `abi` field", path.display())]
    MissingAbi { name: String, path: PathBuf },

    #[error("failed to write ABI for {name} to {}", path.display())]
    Write {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub fn not_found(name: &str, path: &Path) -> Self {
        Self::NotFound {
            name: name.to_string(),
            path: path.to_path_buf(),
        }
    }

    pub fn read(name: &str, path: &Path, source: io::Error) -> Self {
        Self::Read {
            name: name.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(name: &str, path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            name: name.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn missing_abi(name: &str, path: &Path) -> Self {
        Self::MissingAbi {
            name: name.to_string(),
            path: path.to_path_buf(),
        }
    }

    pub fn write(name: &str, path: &Path, source: io::Error) -> Self {
        Self::Write {
            name: name.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }
}
