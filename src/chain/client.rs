/// Low-level chain client: smart queries, account lookup, gas simulation
/// and transaction broadcast over the Tendermint RPC endpoint
use anyhow::{anyhow, Result};
use prost::Message;
use serde_json::Value;
use std::time::Duration;

use crate::chain::account_types::{Account, AccountInfo};
use crate::chain::proto::{
    Coin, QueryAccountRequest, QueryAccountResponse, QuerySmartContractStateRequest,
    QuerySmartContractStateResponse, SimulateRequest, SimulateResponse,
};
use crate::chain::rpc::{Event, RpcClient};
use crate::chain::tx_builder::{GasPrice, TxBuilder, DEFAULT_GAS_LIMIT};
use crate::chain::wallet::CosmosWallet;

/// Configuration for the chain client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Tendermint RPC endpoint URL (e.g. "https://rpc-palvus.pion-1.ntrn.tech:443")
    pub rpc_endpoint: String,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Gas price applied to every transaction fee
    pub gas_price: GasPrice,
    /// Multiplier applied to simulated gas before broadcast
    pub gas_adjustment: f64,
    /// Gas limit used when simulation fails
    pub default_gas_limit: u64,
    /// Delay between inclusion polls after broadcast, in milliseconds
    pub poll_interval_ms: u64,
    /// How many inclusion polls before giving up
    pub poll_attempts: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_endpoint: "https://rpc-palvus.pion-1.ntrn.tech:443".to_string(),
            request_timeout: 30,
            gas_price: GasPrice::new(0.025, "untrn"),
            gas_adjustment: 1.3,
            default_gas_limit: DEFAULT_GAS_LIMIT,
            poll_interval_ms: 1500,
            poll_attempts: 20,
        }
    }
}

/// Delivery result of a broadcast transaction, passed through from the
/// chain without interpretation
#[derive(Debug, Clone)]
pub struct TxResult {
    pub transaction_hash: String,
    pub height: u64,
    pub gas_wanted: u64,
    pub gas_used: u64,
    pub raw_log: String,
    pub events: Vec<Event>,
}

/// Gas figures from transaction simulation
#[derive(Debug, Clone)]
pub struct SimulateResult {
    pub gas_wanted: u64,
    pub gas_used: u64,
}

/// Client for one Tendermint RPC endpoint
#[derive(Clone)]
pub struct ChainClient {
    config: ClientConfig,
    rpc: RpcClient,
    chain_id: Option<String>,
}

impl ChainClient {
    /// Create a client. No network traffic happens until `connect`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let rpc = RpcClient::new(
            &config.rpc_endpoint,
            Duration::from_secs(config.request_timeout),
        )?;

        Ok(Self {
            config,
            rpc,
            chain_id: None,
        })
    }

    /// Handshake with the node: verifies reachability and learns the
    /// chain id used in every SignDoc
    pub async fn connect(&mut self) -> Result<()> {
        log::info!("Connecting to {}", self.config.rpc_endpoint);
        let status = self.rpc.status().await?;
        log::info!(
            "Connected to chain {} via {}",
            status.node_info.network,
            status.node_info.moniker
        );
        self.chain_id = Some(status.node_info.network);
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.chain_id.is_some()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn chain_id(&self) -> Result<&str> {
        self.chain_id
            .as_deref()
            .ok_or_else(|| anyhow!("Client not connected. Call connect() first."))
    }

    /// Query a smart contract (read-only, no gas required). The query is
    /// the contract's JSON message; the result is the contract's JSON reply.
    pub async fn query_contract_smart(
        &self,
        contract_address: &str,
        query_msg: Vec<u8>,
    ) -> Result<Value> {
        log::debug!(
            "Querying contract {} with message: {}",
            contract_address,
            String::from_utf8_lossy(&query_msg)
        );

        let request = QuerySmartContractStateRequest {
            address: contract_address.to_string(),
            query_data: query_msg,
        };

        let response_bytes = self
            .rpc
            .abci_query(
                "/cosmwasm.wasm.v1.Query/SmartContractState",
                &request.encode_to_vec(),
            )
            .await?;

        let response = QuerySmartContractStateResponse::decode(&response_bytes[..])
            .map_err(|e| anyhow!("Failed to decode contract query response: {}", e))?;

        let json_value = serde_json::from_slice::<Value>(&response.data)
            .map_err(|e| anyhow!("Failed to parse contract JSON response: {}", e))?;

        Ok(json_value)
    }

    /// Query signer account info (account number and sequence)
    pub async fn query_account(&self, address: &str) -> Result<AccountInfo> {
        let request = QueryAccountRequest {
            address: address.to_string(),
        };

        let response_bytes = self
            .rpc
            .abci_query("/cosmos.auth.v1beta1.Query/Account", &request.encode_to_vec())
            .await?;

        let response = QueryAccountResponse::decode(&response_bytes[..])
            .map_err(|e| anyhow!("Failed to decode account response: {}", e))?;

        let account_any = response
            .account
            .ok_or_else(|| anyhow!("Account {} not found", address))?;

        log::debug!("Decoding account with type_url: {}", account_any.type_url);
        let account = Account::decode_any(&account_any.type_url, &account_any.value)?;
        account.account_info()
    }

    /// Simulate a transaction to estimate its gas consumption
    pub async fn simulate_tx(&self, tx_bytes: Vec<u8>) -> Result<SimulateResult> {
        let request = SimulateRequest { tx_bytes };

        let response_bytes = self
            .rpc
            .abci_query(
                "/cosmos.tx.v1beta1.Service/Simulate",
                &request.encode_to_vec(),
            )
            .await?;

        let response = SimulateResponse::decode(&response_bytes[..])
            .map_err(|e| anyhow!("Failed to decode simulation response: {}", e))?;

        let gas_info = response
            .gas_info
            .ok_or_else(|| anyhow!("No gas info in simulation response"))?;

        Ok(SimulateResult {
            gas_wanted: gas_info.gas_wanted,
            gas_used: gas_info.gas_used,
        })
    }

    /// Broadcast a signed transaction and wait for it to be included in a
    /// block. CheckTx rejection and on-chain failure both surface as errors
    /// carrying the node's raw log.
    pub async fn broadcast_tx(&self, tx_bytes: Vec<u8>) -> Result<TxResult> {
        log::info!("Broadcasting transaction ({} bytes)", tx_bytes.len());

        let check = self.rpc.broadcast_tx_sync(&tx_bytes).await?;
        if check.code != 0 {
            return Err(anyhow!(
                "Transaction rejected by CheckTx (code {}): {}",
                check.code,
                check.log
            ));
        }

        let hash = check.hash;
        log::debug!("Transaction accepted into mempool: {}", hash);

        for attempt in 0..self.config.poll_attempts {
            tokio::time::sleep(Duration::from_millis(self.config.poll_interval_ms)).await;

            if let Some(lookup) = self.rpc.tx(&hash).await? {
                let delivered = lookup.tx_result;
                if delivered.code != 0 {
                    return Err(anyhow!(
                        "Transaction {} failed on-chain (code {}): {}",
                        hash,
                        delivered.code,
                        delivered.log
                    ));
                }

                log::info!("Transaction successful: {}", hash);
                return Ok(TxResult {
                    transaction_hash: hash,
                    height: lookup.height.parse().unwrap_or(0),
                    gas_wanted: delivered.gas_wanted.parse().unwrap_or(0),
                    gas_used: delivered.gas_used.parse().unwrap_or(0),
                    raw_log: delivered.log,
                    events: delivered.events,
                });
            }

            log::debug!(
                "Transaction {} not indexed yet (attempt {}/{})",
                hash,
                attempt + 1,
                self.config.poll_attempts
            );
        }

        Err(anyhow!(
            "Transaction {} was not included after {} polls",
            hash,
            self.config.poll_attempts
        ))
    }

    /// Execute a contract message with automatic fee estimation: fetch the
    /// signer account, simulate for gas, sign and broadcast.
    pub async fn execute_contract(
        &self,
        wallet: &CosmosWallet,
        contract_address: &str,
        msg: Value,
        funds: Vec<Coin>,
    ) -> Result<TxResult> {
        log::info!("execute_contract on {} with msg: {}", contract_address, msg);

        let chain_id = self.chain_id()?.to_string();
        let msg_bytes = serde_json::to_vec(&msg)?;

        let account = self.query_account(&wallet.address).await?;
        log::debug!(
            "Account sequence: {}, account_number: {}",
            account.sequence,
            account.account_number
        );

        let builder = TxBuilder::new(
            chain_id,
            account.account_number,
            account.sequence,
            wallet,
            self.config.gas_price.clone(),
        );

        let sim_tx =
            builder.build_simulation_tx(contract_address, msg_bytes.clone(), funds.clone())?;

        let gas_limit = match self.simulate_tx(sim_tx).await {
            Ok(sim) => {
                let adjusted = (sim.gas_used as f64 * self.config.gas_adjustment).ceil() as u64;
                log::debug!("Gas simulation: used={}, adjusted={}", sim.gas_used, adjusted);
                adjusted
            }
            Err(e) => {
                log::warn!("Gas simulation failed: {}, using default gas limit", e);
                self.config.default_gas_limit
            }
        };

        let tx_bytes = builder.with_gas_limit(gas_limit).build_execute_contract_tx(
            contract_address,
            msg_bytes,
            funds,
        )?;

        self.broadcast_tx(tx_bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ChainClient::new(ClientConfig::default()).unwrap();
        assert!(!client.is_connected());
        assert_eq!(client.config().gas_price.to_string(), "0.025untrn");
    }

    #[test]
    fn test_chain_id_requires_connect() {
        let client = ChainClient::new(ClientConfig::default()).unwrap();
        let err = client.chain_id().unwrap_err();
        assert!(err.to_string().contains("connect"));
    }
}
