// Library exports for brickken_client

pub mod chain;
pub mod client;
pub mod config;
pub mod error;
pub mod msg;

// Re-export main types for convenience
pub use chain::{ChainClient, ClientConfig, CosmosWallet, GasPrice, TxResult};
pub use client::{BrickkenProtocolClient, SigningOptions, DEFAULT_ADDRESS_PREFIX};
pub use error::ClientError;
pub use msg::{ExecuteMsg, InstantiateMsg, PriceResponse, QueryMsg};
