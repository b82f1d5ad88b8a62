/// Proto definitions for Cosmos SDK chain integration
///
/// Hand-maintained prost message structs covering exactly the fragments of
/// the Cosmos/CosmWasm wire format this client touches. Field numbers match
/// the upstream .proto files; keeping these in-tree avoids a protoc build
/// step for what is a handful of flat messages.

pub mod cosmos {
    pub mod base {
        pub mod v1beta1 {
            /// cosmos.base.v1beta1.Coin
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Coin {
                #[prost(string, tag = "1")]
                pub denom: String,
                #[prost(string, tag = "2")]
                pub amount: String,
            }
        }
    }

    pub mod crypto {
        pub mod secp256k1 {
            /// cosmos.crypto.secp256k1.PubKey (33-byte compressed key)
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct PubKey {
                #[prost(bytes = "vec", tag = "1")]
                pub key: Vec<u8>,
            }
        }
    }

    pub mod auth {
        pub mod v1beta1 {
            /// cosmos.auth.v1beta1.BaseAccount
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct BaseAccount {
                #[prost(string, tag = "1")]
                pub address: String,
                #[prost(message, optional, tag = "2")]
                pub pub_key: Option<::prost_types::Any>,
                #[prost(uint64, tag = "3")]
                pub account_number: u64,
                #[prost(uint64, tag = "4")]
                pub sequence: u64,
            }

            /// cosmos.auth.v1beta1.QueryAccountRequest
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryAccountRequest {
                #[prost(string, tag = "1")]
                pub address: String,
            }

            /// cosmos.auth.v1beta1.QueryAccountResponse
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryAccountResponse {
                #[prost(message, optional, tag = "1")]
                pub account: Option<::prost_types::Any>,
            }
        }
    }

    pub mod tx {
        pub mod v1beta1 {
            use super::super::base::v1beta1::Coin;

            /// cosmos.tx.v1beta1.TxBody
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct TxBody {
                #[prost(message, repeated, tag = "1")]
                pub messages: Vec<::prost_types::Any>,
                #[prost(string, tag = "2")]
                pub memo: String,
                #[prost(uint64, tag = "3")]
                pub timeout_height: u64,
                #[prost(message, repeated, tag = "1023")]
                pub extension_options: Vec<::prost_types::Any>,
                #[prost(message, repeated, tag = "2047")]
                pub non_critical_extension_options: Vec<::prost_types::Any>,
            }

            /// cosmos.tx.v1beta1.AuthInfo
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct AuthInfo {
                #[prost(message, repeated, tag = "1")]
                pub signer_infos: Vec<SignerInfo>,
                #[prost(message, optional, tag = "2")]
                pub fee: Option<Fee>,
            }

            /// cosmos.tx.v1beta1.SignerInfo
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SignerInfo {
                #[prost(message, optional, tag = "1")]
                pub public_key: Option<::prost_types::Any>,
                #[prost(message, optional, tag = "2")]
                pub mode_info: Option<ModeInfo>,
                #[prost(uint64, tag = "3")]
                pub sequence: u64,
            }

            /// cosmos.tx.v1beta1.ModeInfo (single-signer subset)
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct ModeInfo {
                #[prost(oneof = "mode_info::Sum", tags = "1")]
                pub sum: Option<mode_info::Sum>,
            }

            pub mod mode_info {
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct Single {
                    /// SIGN_MODE_DIRECT = 1
                    #[prost(int32, tag = "1")]
                    pub mode: i32,
                }

                #[derive(Clone, PartialEq, ::prost::Oneof)]
                pub enum Sum {
                    #[prost(message, tag = "1")]
                    Single(Single),
                }
            }

            /// cosmos.tx.v1beta1.Fee
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Fee {
                #[prost(message, repeated, tag = "1")]
                pub amount: Vec<Coin>,
                #[prost(uint64, tag = "2")]
                pub gas_limit: u64,
                #[prost(string, tag = "3")]
                pub payer: String,
                #[prost(string, tag = "4")]
                pub granter: String,
            }

            /// cosmos.tx.v1beta1.SignDoc
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SignDoc {
                #[prost(bytes = "vec", tag = "1")]
                pub body_bytes: Vec<u8>,
                #[prost(bytes = "vec", tag = "2")]
                pub auth_info_bytes: Vec<u8>,
                #[prost(string, tag = "3")]
                pub chain_id: String,
                #[prost(uint64, tag = "4")]
                pub account_number: u64,
            }

            /// cosmos.tx.v1beta1.TxRaw
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct TxRaw {
                #[prost(bytes = "vec", tag = "1")]
                pub body_bytes: Vec<u8>,
                #[prost(bytes = "vec", tag = "2")]
                pub auth_info_bytes: Vec<u8>,
                #[prost(bytes = "vec", repeated, tag = "3")]
                pub signatures: Vec<Vec<u8>>,
            }

            /// cosmos.tx.v1beta1.SimulateRequest (deprecated `tx` field omitted)
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SimulateRequest {
                #[prost(bytes = "vec", tag = "2")]
                pub tx_bytes: Vec<u8>,
            }

            /// cosmos.tx.v1beta1.SimulateResponse (abci result field ignored)
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SimulateResponse {
                #[prost(message, optional, tag = "1")]
                pub gas_info: Option<GasInfo>,
            }

            /// cosmos.base.abci.v1beta1.GasInfo
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct GasInfo {
                #[prost(uint64, tag = "1")]
                pub gas_wanted: u64,
                #[prost(uint64, tag = "2")]
                pub gas_used: u64,
            }
        }
    }
}

pub mod cosmwasm {
    pub mod wasm {
        pub mod v1 {
            use super::super::super::cosmos::base::v1beta1::Coin;

            /// cosmwasm.wasm.v1.MsgExecuteContract
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgExecuteContract {
                #[prost(string, tag = "1")]
                pub sender: String,
                #[prost(string, tag = "2")]
                pub contract: String,
                #[prost(bytes = "vec", tag = "3")]
                pub msg: Vec<u8>,
                #[prost(message, repeated, tag = "5")]
                pub funds: Vec<Coin>,
            }

            /// cosmwasm.wasm.v1.MsgExecuteContractResponse
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgExecuteContractResponse {
                #[prost(bytes = "vec", tag = "1")]
                pub data: Vec<u8>,
            }

            /// cosmwasm.wasm.v1.QuerySmartContractStateRequest
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QuerySmartContractStateRequest {
                #[prost(string, tag = "1")]
                pub address: String,
                #[prost(bytes = "vec", tag = "2")]
                pub query_data: Vec<u8>,
            }

            /// cosmwasm.wasm.v1.QuerySmartContractStateResponse
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QuerySmartContractStateResponse {
                #[prost(bytes = "vec", tag = "1")]
                pub data: Vec<u8>,
            }
        }
    }
}

// Re-export commonly used types for convenience
pub use cosmos::auth::v1beta1::{BaseAccount, QueryAccountRequest, QueryAccountResponse};
pub use cosmos::base::v1beta1::Coin;
pub use cosmos::crypto::secp256k1::PubKey;
pub use cosmos::tx::v1beta1::{
    AuthInfo, Fee, GasInfo, ModeInfo, SignDoc, SignerInfo, SimulateRequest, SimulateResponse,
    TxBody, TxRaw,
};
pub use cosmwasm::wasm::v1::{
    MsgExecuteContract, MsgExecuteContractResponse, QuerySmartContractStateRequest,
    QuerySmartContractStateResponse,
};

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_coin_roundtrip() {
        let coin = Coin {
            denom: "untrn".to_string(),
            amount: "1250".to_string(),
        };
        let bytes = coin.encode_to_vec();
        let decoded = Coin::decode(&bytes[..]).unwrap();
        assert_eq!(decoded, coin);
    }

    #[test]
    fn test_msg_execute_contract_field_numbers() {
        // funds sits at field 5 in the upstream proto (4 is reserved);
        // a wire mismatch here would make every execute fail on-chain
        let msg = MsgExecuteContract {
            sender: "neutron1sender".to_string(),
            contract: "neutron1contract".to_string(),
            msg: br#"{"increment":{}}"#.to_vec(),
            funds: vec![Coin {
                denom: "untrn".to_string(),
                amount: "1".to_string(),
            }],
        };
        let bytes = msg.encode_to_vec();
        // field 5, wire type 2 -> key byte 0x2a
        assert!(bytes.contains(&0x2au8));
        let decoded = MsgExecuteContract::decode(&bytes[..]).unwrap();
        assert_eq!(decoded.funds.len(), 1);
        assert_eq!(decoded.contract, "neutron1contract");
    }

    #[test]
    fn test_simulate_response_ignores_unknown_fields() {
        // A real SimulateResponse also carries field 2 (abci Result);
        // prost must skip it when decoding into our subset
        let gas = GasInfo {
            gas_wanted: 200000,
            gas_used: 154321,
        };
        let mut bytes = SimulateResponse {
            gas_info: Some(gas),
        }
        .encode_to_vec();
        // Append an unknown length-delimited field 2
        bytes.extend_from_slice(&[0x12, 0x03, 0x0a, 0x01, 0x00]);
        let decoded = SimulateResponse::decode(&bytes[..]).unwrap();
        assert_eq!(decoded.gas_info.unwrap().gas_used, 154321);
    }
}
