/// Client for interacting with the Brickken Protocol smart contract
///
/// A thin typed facade over the chain plumbing: every method serializes one
/// tagged contract message, forwards it, and unwraps the typed response.
/// Failures from the transport or the contract propagate unchanged; the
/// only error raised locally is using an execute method on a read-only
/// connection.
use anyhow::Result;
use serde::de::DeserializeOwned;

use crate::chain::{ChainClient, ClientConfig, CosmosWallet, GasPrice, TxResult};
use crate::error::ClientError;
use crate::msg::{
    ExecuteMsg, GetCountResponse, GetDescriptionResponse, GetOwnerResponse, PriceResponse,
    QueryMsg,
};

/// Address prefix used when none is given (Neutron networks)
pub const DEFAULT_ADDRESS_PREFIX: &str = "neutron";

/// Options for the signing connection
#[derive(Debug, Clone)]
pub struct SigningOptions {
    /// bech32 prefix for the derived wallet address
    pub prefix: String,
    /// Gas price applied to every transaction fee
    pub gas_price: GasPrice,
}

impl Default for SigningOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
            gas_price: GasPrice::new(0.025, "untrn"),
        }
    }
}

/// Connection capability, fixed at construction time. Execute methods
/// require the Signing variant; queries work on either.
enum Connection {
    ReadOnly(ChainClient),
    Signing {
        chain: ChainClient,
        wallet: CosmosWallet,
    },
}

pub struct BrickkenProtocolClient {
    connection: Connection,
    contract_address: String,
}

impl BrickkenProtocolClient {
    /// Open a read-only client against an RPC endpoint
    pub async fn connect(rpc_endpoint: &str, contract_address: &str) -> Result<Self> {
        let config = ClientConfig {
            rpc_endpoint: rpc_endpoint.to_string(),
            ..ClientConfig::default()
        };
        Self::connect_with_config(config, contract_address).await
    }

    /// Open a read-only client with full control over the chain config
    pub async fn connect_with_config(
        config: ClientConfig,
        contract_address: &str,
    ) -> Result<Self> {
        let mut chain = ChainClient::new(config)?;
        chain.connect().await?;

        Ok(Self {
            connection: Connection::ReadOnly(chain),
            contract_address: contract_address.to_string(),
        })
    }

    /// Open a signing-capable client: derives a wallet from the mnemonic
    /// (prefix "neutron" unless overridden in options) and configures the
    /// connection with the options' gas price.
    pub async fn connect_with_signer(
        rpc_endpoint: &str,
        mnemonic: &str,
        contract_address: &str,
        options: SigningOptions,
    ) -> Result<Self> {
        let wallet = CosmosWallet::from_mnemonic(mnemonic, &options.prefix)?;
        log::info!("Derived sender address: {}", wallet.address);

        let config = ClientConfig {
            rpc_endpoint: rpc_endpoint.to_string(),
            gas_price: options.gas_price,
            ..ClientConfig::default()
        };

        let mut chain = ChainClient::new(config)?;
        chain.connect().await?;

        Ok(Self {
            connection: Connection::Signing { chain, wallet },
            contract_address: contract_address.to_string(),
        })
    }

    /// Whether this client can sign and submit transactions
    pub fn can_sign(&self) -> bool {
        matches!(self.connection, Connection::Signing { .. })
    }

    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    /// The derived wallet address, if this is a signing client
    pub fn sender_address(&self) -> Option<&str> {
        match &self.connection {
            Connection::Signing { wallet, .. } => Some(&wallet.address),
            Connection::ReadOnly(_) => None,
        }
    }

    fn chain(&self) -> &ChainClient {
        match &self.connection {
            Connection::ReadOnly(chain) => chain,
            Connection::Signing { chain, .. } => chain,
        }
    }

    /// Resolve the signing connection, or fail before any network call
    fn signing(&self, operation: &'static str) -> Result<(&ChainClient, &CosmosWallet)> {
        match &self.connection {
            Connection::Signing { chain, wallet } => Ok((chain, wallet)),
            Connection::ReadOnly(_) => Err(ClientError::SigningRequired(operation).into()),
        }
    }

    async fn query<T: DeserializeOwned>(&self, msg: &QueryMsg) -> Result<T> {
        let query_data = serde_json::to_vec(msg)?;
        let response = self
            .chain()
            .query_contract_smart(&self.contract_address, query_data)
            .await?;
        Ok(serde_json::from_value(response)?)
    }

    async fn execute(&self, operation: &'static str, msg: ExecuteMsg) -> Result<TxResult> {
        let (chain, wallet) = self.signing(operation)?;
        let msg_value = serde_json::to_value(&msg)?;
        chain
            .execute_contract(wallet, &self.contract_address, msg_value, vec![])
            .await
    }

    // --- QUERY METHODS ---

    /// Current value of the counter
    pub async fn get_count(&self) -> Result<i32> {
        let response: GetCountResponse = self.query(&QueryMsg::GetCount {}).await?;
        Ok(response.count)
    }

    /// Address of the contract owner
    pub async fn get_owner(&self) -> Result<String> {
        let response: GetOwnerResponse = self.query(&QueryMsg::GetOwner {}).await?;
        Ok(response.owner)
    }

    /// Contract description text
    pub async fn get_description(&self) -> Result<String> {
        let response: GetDescriptionResponse = self.query(&QueryMsg::GetDescription {}).await?;
        Ok(response.description)
    }

    /// USDT price snapshot from the configured Band Protocol oracle
    pub async fn get_usdt_price_band(&self) -> Result<PriceResponse> {
        self.query(&QueryMsg::GetUsdtPriceBand {}).await
    }

    /// USDT price snapshot from the configured Pyth Network oracle
    pub async fn get_usdt_price_pyth(&self) -> Result<PriceResponse> {
        self.query(&QueryMsg::GetUsdtPricePyth {}).await
    }

    // --- EXECUTE METHODS ---

    /// Increment the counter by 1
    pub async fn increment(&self) -> Result<TxResult> {
        self.execute("increment", ExecuteMsg::Increment {}).await
    }

    /// Reset the counter to a value (contract enforces owner-only)
    pub async fn reset(&self, count: i32) -> Result<TxResult> {
        self.execute("reset", ExecuteMsg::Reset { count }).await
    }

    /// Update the contract description (contract enforces owner-only)
    pub async fn update_description(&self, description: &str) -> Result<TxResult> {
        self.execute(
            "update_description",
            ExecuteMsg::UpdateDescription {
                description: description.to_string(),
            },
        )
        .await
    }

    /// Point the contract at a Band Protocol oracle (contract enforces owner-only)
    pub async fn set_band_oracle_address(&self, address: &str) -> Result<TxResult> {
        self.execute(
            "set_band_oracle_address",
            ExecuteMsg::SetBandOracleAddress {
                address: address.to_string(),
            },
        )
        .await
    }

    /// Point the contract at a Pyth Network oracle (contract enforces owner-only)
    pub async fn set_pyth_oracle_address(&self, address: &str) -> Result<TxResult> {
        self.execute(
            "set_pyth_oracle_address",
            ExecuteMsg::SetPythOracleAddress {
                address: address.to_string(),
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const TEST_CONTRACT: &str =
        "neutron1tlszjwhg83eqax0se6ys5thv8ceeuje46dk4tfwc4ahzdxxqrz5qug8e6j";

    // Construction without connect(): tests never touch the network
    fn read_only_client() -> BrickkenProtocolClient {
        let chain = ChainClient::new(ClientConfig::default()).unwrap();
        BrickkenProtocolClient {
            connection: Connection::ReadOnly(chain),
            contract_address: TEST_CONTRACT.to_string(),
        }
    }

    fn signing_client() -> BrickkenProtocolClient {
        let chain = ChainClient::new(ClientConfig::default()).unwrap();
        let wallet = CosmosWallet::from_mnemonic(TEST_MNEMONIC, DEFAULT_ADDRESS_PREFIX).unwrap();
        BrickkenProtocolClient {
            connection: Connection::Signing { chain, wallet },
            contract_address: TEST_CONTRACT.to_string(),
        }
    }

    #[test]
    fn test_can_sign_reflects_connection_kind() {
        assert!(!read_only_client().can_sign());
        assert!(signing_client().can_sign());
    }

    #[test]
    fn test_sender_address_only_on_signing_client() {
        assert!(read_only_client().sender_address().is_none());

        let client = signing_client();
        let sender = client.sender_address().unwrap();
        assert!(sender.starts_with("neutron1"));
    }

    #[tokio::test]
    async fn test_execute_on_read_only_client_fails_locally() {
        let client = read_only_client();

        // Each execute method must fail with the capability error before
        // any network call (the chain client was never connected)
        let err = client.increment().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::SigningRequired("increment"))
        ));

        let err = client.reset(5).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::SigningRequired("reset"))
        ));

        let err = client.update_description("new").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::SigningRequired("update_description"))
        ));

        let err = client
            .set_band_oracle_address("neutron1band")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::SigningRequired("set_band_oracle_address"))
        ));

        let err = client
            .set_pyth_oracle_address("neutron1pyth")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::SigningRequired("set_pyth_oracle_address"))
        ));
    }

    #[test]
    fn test_default_signing_options() {
        let options = SigningOptions::default();
        assert_eq!(options.prefix, "neutron");
        assert_eq!(options.gas_price.to_string(), "0.025untrn");
    }
}
