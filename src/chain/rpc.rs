/// Tendermint JSON-RPC transport
///
/// Minimal JSON-RPC 2.0 client for a CometBFT node RPC endpoint
/// (e.g. https://rpc-palvus.pion-1.ntrn.tech:443). Only the methods this
/// client needs: abci_query, broadcast_tx_sync and tx lookup, plus status
/// for the chain id handshake.
use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct JsonRpcEnvelope<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<String>,
}

impl JsonRpcError {
    fn render(&self) -> String {
        match &self.data {
            Some(data) => format!("{} (code {}): {}", self.message, self.code, data),
            None => format!("{} (code {})", self.message, self.code),
        }
    }
}

/// Result of the `status` RPC method (node handshake)
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResult {
    pub node_info: NodeInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeInfo {
    /// Chain id, e.g. "pion-1"
    pub network: String,
    #[serde(default)]
    pub moniker: String,
}

#[derive(Debug, Deserialize)]
struct AbciQueryResult {
    response: AbciQueryInner,
}

#[derive(Debug, Deserialize)]
struct AbciQueryInner {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    log: String,
    #[serde(default)]
    value: Option<String>,
}

/// CheckTx result from broadcast_tx_sync
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastTxResult {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub log: String,
    /// Transaction hash as uppercase hex
    pub hash: String,
}

/// Result of the `tx` lookup method once a transaction is included
#[derive(Debug, Clone, Deserialize)]
pub struct TxLookup {
    pub hash: String,
    pub height: String,
    pub tx_result: DeliverTxResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliverTxResult {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub log: String,
    #[serde(default)]
    pub gas_wanted: String,
    #[serde(default)]
    pub gas_used: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// ABCI event emitted during transaction delivery, passed through verbatim
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Vec<EventAttribute>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Clone)]
pub struct RpcClient {
    client: Client,
    endpoint: String,
}

impl RpcClient {
    pub fn new(endpoint: &str, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call<R: DeserializeOwned>(&self, method: &str, params: serde_json::Value) -> Result<R> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        log::debug!("RPC {} -> {}", method, self.endpoint);

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("RPC {} failed with HTTP {}: {}", method, status, text));
        }

        let envelope: JsonRpcEnvelope<R> = response.json().await?;

        if let Some(error) = envelope.error {
            return Err(anyhow!("RPC {} error: {}", method, error.render()));
        }

        envelope
            .result
            .ok_or_else(|| anyhow!("RPC {} returned neither result nor error", method))
    }

    /// Node status; used to learn the chain id and verify reachability
    pub async fn status(&self) -> Result<StatusResult> {
        self.call("status", json!({})).await
    }

    /// Run an ABCI query against a gRPC-gateway path with a protobuf payload.
    /// Returns the raw protobuf response bytes.
    pub async fn abci_query(&self, path: &str, data: &[u8]) -> Result<Vec<u8>> {
        let params = json!({
            "path": path,
            "data": hex::encode(data),
            "prove": false,
        });

        let result: AbciQueryResult = self.call("abci_query", params).await?;
        let inner = result.response;

        if inner.code != 0 {
            return Err(anyhow!(
                "ABCI query {} rejected (code {}): {}",
                path,
                inner.code,
                inner.log
            ));
        }

        match inner.value {
            Some(value) => Ok(BASE64.decode(value.as_bytes())?),
            None => Ok(Vec::new()),
        }
    }

    /// Broadcast a signed transaction, waiting only for CheckTx
    pub async fn broadcast_tx_sync(&self, tx_bytes: &[u8]) -> Result<BroadcastTxResult> {
        let params = json!({ "tx": BASE64.encode(tx_bytes) });
        self.call("broadcast_tx_sync", params).await
    }

    /// Look up a transaction by its hex hash. Ok(None) while the node has
    /// not yet indexed it.
    pub async fn tx(&self, hash_hex: &str) -> Result<Option<TxLookup>> {
        let hash_bytes = hex::decode(hash_hex)?;
        let params = json!({
            "hash": BASE64.encode(&hash_bytes),
            "prove": false,
        });

        match self.call("tx", params).await {
            Ok(lookup) => Ok(Some(lookup)),
            // CometBFT reports a pending/unknown tx as an internal error
            // with "not found" in the data field
            Err(e) if e.to_string().contains("not found") => Ok(None),
            Err(e) => Err(e),
        }
    }
}
