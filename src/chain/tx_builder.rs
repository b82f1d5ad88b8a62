/// Transaction builder for Cosmos SDK SIGN_MODE_DIRECT
///
/// Assembles, signs and serializes a MsgExecuteContract transaction from
/// the raw proto parts. The same assembly with an empty signature is used
/// for gas simulation.
use anyhow::{anyhow, Result};
use prost::Message;

use crate::chain::proto::cosmos::tx::v1beta1::mode_info;
use crate::chain::proto::{
    AuthInfo, Coin, Fee, ModeInfo, MsgExecuteContract, PubKey, SignDoc, SignerInfo, TxBody, TxRaw,
};
use crate::chain::wallet::{CosmosWallet, TransactionSigner};

/// Default gas limit used when simulation is unavailable
pub const DEFAULT_GAS_LIMIT: u64 = 250_000;

/// SIGN_MODE_DIRECT discriminant from cosmos.tx.signing.v1beta1.SignMode
const SIGN_MODE_DIRECT: i32 = 1;

/// A gas price such as "0.025untrn": decimal amount per gas unit plus the
/// fee denomination
#[derive(Debug, Clone, PartialEq)]
pub struct GasPrice {
    pub amount: f64,
    pub denom: String,
}

impl GasPrice {
    pub fn new(amount: f64, denom: &str) -> Self {
        Self {
            amount,
            denom: denom.to_string(),
        }
    }

    /// Parse the "<decimal><denom>" form, e.g. "0.025untrn"
    pub fn from_str(price_str: &str) -> Result<Self> {
        let split_pos = price_str
            .chars()
            .position(|c| c.is_alphabetic())
            .ok_or_else(|| anyhow!("Invalid gas price format: {}", price_str))?;

        let (amount_str, denom) = price_str.split_at(split_pos);
        let amount: f64 = amount_str
            .parse()
            .map_err(|_| anyhow!("Invalid gas price amount: {}", amount_str))?;

        if denom.is_empty() {
            return Err(anyhow!("Gas price is missing a denom: {}", price_str));
        }

        Ok(Self {
            amount,
            denom: denom.to_string(),
        })
    }

    /// Fee for a gas limit, rounded up to the next whole fee unit
    pub fn fee(&self, gas_limit: u64) -> Coin {
        let total = (self.amount * gas_limit as f64).ceil() as u128;
        Coin {
            denom: self.denom.clone(),
            amount: total.to_string(),
        }
    }
}

impl std::fmt::Display for GasPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Transaction builder bound to one wallet and one (account_number, sequence)
pub struct TxBuilder<'a> {
    chain_id: String,
    account_number: u64,
    sequence: u64,
    gas_limit: u64,
    gas_price: GasPrice,
    wallet: &'a CosmosWallet,
    signer: TransactionSigner,
}

impl<'a> TxBuilder<'a> {
    pub fn new(
        chain_id: String,
        account_number: u64,
        sequence: u64,
        wallet: &'a CosmosWallet,
        gas_price: GasPrice,
    ) -> Self {
        Self {
            chain_id,
            account_number,
            sequence,
            gas_limit: DEFAULT_GAS_LIMIT,
            gas_price,
            wallet,
            signer: TransactionSigner::new(),
        }
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Build a complete signed transaction for contract execution
    pub fn build_execute_contract_tx(
        &self,
        contract_address: &str,
        msg: Vec<u8>,
        funds: Vec<Coin>,
    ) -> Result<Vec<u8>> {
        let (body_bytes, auth_info_bytes) = self.assemble(contract_address, msg, funds)?;

        let sign_doc = SignDoc {
            body_bytes: body_bytes.clone(),
            auth_info_bytes: auth_info_bytes.clone(),
            chain_id: self.chain_id.clone(),
            account_number: self.account_number,
        };

        let sign_doc_bytes = sign_doc.encode_to_vec();
        let private_key = self.wallet.private_key()?;
        let signature = self.signer.sign_sign_doc(&sign_doc_bytes, &private_key)?;

        let tx_raw = TxRaw {
            body_bytes,
            auth_info_bytes,
            signatures: vec![signature],
        };

        Ok(tx_raw.encode_to_vec())
    }

    /// Build the same transaction with an empty signature, suitable only
    /// for gas simulation
    pub fn build_simulation_tx(
        &self,
        contract_address: &str,
        msg: Vec<u8>,
        funds: Vec<Coin>,
    ) -> Result<Vec<u8>> {
        let (body_bytes, auth_info_bytes) = self.assemble(contract_address, msg, funds)?;

        let tx_raw = TxRaw {
            body_bytes,
            auth_info_bytes,
            signatures: vec![Vec::new()],
        };

        Ok(tx_raw.encode_to_vec())
    }

    /// Encode TxBody and AuthInfo for this builder's message
    fn assemble(
        &self,
        contract_address: &str,
        msg: Vec<u8>,
        funds: Vec<Coin>,
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        let execute_msg = MsgExecuteContract {
            sender: self.wallet.address.clone(),
            contract: contract_address.to_string(),
            msg,
            funds,
        };

        let any_msg = prost_types::Any {
            type_url: "/cosmwasm.wasm.v1.MsgExecuteContract".to_string(),
            value: execute_msg.encode_to_vec(),
        };

        let tx_body = TxBody {
            messages: vec![any_msg],
            memo: String::new(),
            timeout_height: 0,
            extension_options: vec![],
            non_critical_extension_options: vec![],
        };

        let fee = Fee {
            amount: vec![self.gas_price.fee(self.gas_limit)],
            gas_limit: self.gas_limit,
            payer: String::new(),
            granter: String::new(),
        };

        let pub_key = PubKey {
            key: self.wallet.public_key_compressed().to_vec(),
        };
        let pub_key_any = prost_types::Any {
            type_url: "/cosmos.crypto.secp256k1.PubKey".to_string(),
            value: pub_key.encode_to_vec(),
        };

        let signer_info = SignerInfo {
            public_key: Some(pub_key_any),
            mode_info: Some(ModeInfo {
                sum: Some(mode_info::Sum::Single(mode_info::Single {
                    mode: SIGN_MODE_DIRECT,
                })),
            }),
            sequence: self.sequence,
        };

        let auth_info = AuthInfo {
            signer_infos: vec![signer_info],
            fee: Some(fee),
        };

        Ok((tx_body.encode_to_vec(), auth_info.encode_to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_wallet() -> CosmosWallet {
        CosmosWallet::from_mnemonic(TEST_MNEMONIC, "neutron").unwrap()
    }

    #[test]
    fn test_gas_price_parsing() {
        let price = GasPrice::from_str("0.025untrn").unwrap();
        assert_eq!(price.amount, 0.025);
        assert_eq!(price.denom, "untrn");
        assert_eq!(price.to_string(), "0.025untrn");
    }

    #[test]
    fn test_gas_price_rejects_garbage() {
        assert!(GasPrice::from_str("12345").is_err());
        assert!(GasPrice::from_str("abcuntrn").is_err());
    }

    #[test]
    fn test_fee_rounds_up() {
        let price = GasPrice::from_str("0.025untrn").unwrap();

        let fee = price.fee(200_000);
        assert_eq!(fee.denom, "untrn");
        assert_eq!(fee.amount, "5000");

        // 100001 * 0.025 = 2500.025 -> 2501
        let fee = price.fee(100_001);
        assert_eq!(fee.amount, "2501");
    }

    #[test]
    fn test_transaction_building() {
        let wallet = test_wallet();
        let builder = TxBuilder::new(
            "pion-1".to_string(),
            7,
            3,
            &wallet,
            GasPrice::from_str("0.025untrn").unwrap(),
        );

        let contract_msg = br#"{"reset":{"count":5}}"#.to_vec();
        let tx_bytes = builder
            .build_execute_contract_tx("neutron1contract", contract_msg.clone(), vec![])
            .unwrap();
        assert!(!tx_bytes.is_empty());

        // Round-trip the envelope and check what was placed into it
        let tx_raw = TxRaw::decode(&tx_bytes[..]).unwrap();
        assert_eq!(tx_raw.signatures.len(), 1);
        assert_eq!(tx_raw.signatures[0].len(), 64);

        let body = TxBody::decode(&tx_raw.body_bytes[..]).unwrap();
        assert_eq!(body.messages.len(), 1);
        assert_eq!(
            body.messages[0].type_url,
            "/cosmwasm.wasm.v1.MsgExecuteContract"
        );

        let exec = MsgExecuteContract::decode(&body.messages[0].value[..]).unwrap();
        assert_eq!(exec.sender, wallet.address);
        assert_eq!(exec.contract, "neutron1contract");
        assert_eq!(exec.msg, contract_msg);

        let auth_info = AuthInfo::decode(&tx_raw.auth_info_bytes[..]).unwrap();
        assert_eq!(auth_info.signer_infos[0].sequence, 3);
        let fee = auth_info.fee.unwrap();
        assert_eq!(fee.gas_limit, DEFAULT_GAS_LIMIT);
        assert_eq!(fee.amount[0].denom, "untrn");
    }

    #[test]
    fn test_simulation_tx_has_empty_signature() {
        let wallet = test_wallet();
        let builder = TxBuilder::new(
            "pion-1".to_string(),
            0,
            0,
            &wallet,
            GasPrice::new(0.025, "untrn"),
        )
        .with_gas_limit(300_000);

        let tx_bytes = builder
            .build_simulation_tx("neutron1contract", br#"{"increment":{}}"#.to_vec(), vec![])
            .unwrap();

        let tx_raw = TxRaw::decode(&tx_bytes[..]).unwrap();
        assert_eq!(tx_raw.signatures, vec![Vec::<u8>::new()]);

        let auth_info = AuthInfo::decode(&tx_raw.auth_info_bytes[..]).unwrap();
        assert_eq!(auth_info.fee.unwrap().gas_limit, 300_000);
    }

    #[test]
    fn test_signed_tx_changes_with_chain_id() {
        let wallet = test_wallet();
        let msg = br#"{"increment":{}}"#.to_vec();

        let tx1 = TxBuilder::new(
            "pion-1".to_string(),
            0,
            0,
            &wallet,
            GasPrice::new(0.025, "untrn"),
        )
        .build_execute_contract_tx("neutron1contract", msg.clone(), vec![])
        .unwrap();

        let tx2 = TxBuilder::new(
            "neutron-1".to_string(),
            0,
            0,
            &wallet,
            GasPrice::new(0.025, "untrn"),
        )
        .build_execute_contract_tx("neutron1contract", msg, vec![])
        .unwrap();

        let sig1 = TxRaw::decode(&tx1[..]).unwrap().signatures;
        let sig2 = TxRaw::decode(&tx2[..]).unwrap().signatures;
        // Chain id is part of the SignDoc, so the signature must differ
        assert_ne!(sig1, sig2);
    }
}
