//! Exports the ABIs of the core contracts from their Hardhat build
//! artifacts into standalone `.abi.json` files consumed by the agents.

pub mod config;
mod error;
mod extract;

pub use error::ExportError;
pub use extract::{export_abi, export_all};
