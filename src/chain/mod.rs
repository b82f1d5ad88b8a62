pub mod account_types;
pub mod client;
pub mod proto;
pub mod rpc;
pub mod tx_builder;
pub mod wallet;

pub use account_types::AccountInfo;
pub use client::{ChainClient, ClientConfig, SimulateResult, TxResult};
pub use rpc::{Event, EventAttribute, RpcClient};
pub use tx_builder::{GasPrice, TxBuilder};
pub use wallet::{CosmosWallet, TransactionSigner};
