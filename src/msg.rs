/// Message schema for the Brickken Protocol contract
/// Key names must match the contract's JSON API exactly

use serde::{Deserialize, Serialize};

/// Genesis parameters for the contract. Not sent by this client, but part
/// of the contract schema and useful for deploy tooling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstantiateMsg {
    pub count: i32,
}

/// State-mutating messages. Serializes as a one-key tagged object,
/// e.g. `{"reset":{"count":5}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Increment {},
    Reset { count: i32 },
    UpdateDescription { description: String },
    SetBandOracleAddress { address: String },
    SetPythOracleAddress { address: String },
}

/// Read-only queries. All variants carry no payload,
/// e.g. `{"get_count":{}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetCount {},
    GetOwner {},
    GetDescription {},
    GetUsdtPriceBand {},
    GetUsdtPricePyth {},
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetCountResponse {
    pub count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetOwnerResponse {
    pub owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetDescriptionResponse {
    pub description: String,
}

/// Price snapshot returned by the oracle queries. Fields are surfaced
/// verbatim; `last_updated` is unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceResponse {
    pub price: String,
    pub symbol: String,
    pub oracle: String,
    pub last_updated: u64,
}
