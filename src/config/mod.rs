use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::chain::{ClientConfig, GasPrice};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub chain: ChainConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub rpc_endpoint: String,
    /// Address of the Brickken Protocol contract
    pub contract: String,
    /// bech32 prefix for derived wallet addresses
    pub address_prefix: String,
    /// Gas price in "<decimal><denom>" form, e.g. "0.025untrn"
    pub gas_price: String,
    pub gas_adjustment: f64,
    pub default_gas_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chain: ChainConfig {
                rpc_endpoint: "https://rpc-palvus.pion-1.ntrn.tech:443".to_string(),
                contract: "neutron1tlszjwhg83eqax0se6ys5thv8ceeuje46dk4tfwc4ahzdxxqrz5qug8e6j"
                    .to_string(),
                address_prefix: "neutron".to_string(),
                gas_price: "0.025untrn".to_string(),
                gas_adjustment: 1.3,
                default_gas_limit: 250_000,
            },
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the chain client configuration from this file-level config
    pub fn client_config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig {
            rpc_endpoint: self.chain.rpc_endpoint.clone(),
            gas_price: GasPrice::from_str(&self.chain.gas_price)?,
            gas_adjustment: self.chain.gas_adjustment,
            default_gas_limit: self.chain.default_gas_limit,
            ..ClientConfig::default()
        })
    }
}
