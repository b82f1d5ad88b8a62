/// Account decoding for auth module queries
///
/// The auth query returns a google.protobuf.Any; on Neutron the account
/// behind it is a plain BaseAccount. Anything else is surfaced as an error
/// naming the type rather than silently misread.
use anyhow::{anyhow, Result};
use prost::Message;

use crate::chain::proto::BaseAccount;

#[derive(Debug, Clone)]
pub enum Account {
    Base(BaseAccount),
    Unsupported { type_url: String },
}

/// Signer-relevant account fields extracted from the decoded account
#[derive(Debug, Clone, Default)]
pub struct AccountInfo {
    pub address: String,
    pub account_number: u64,
    pub sequence: u64,
}

impl Account {
    /// Decode a google.protobuf.Any wrapper based on its type_url
    pub fn decode_any(type_url: &str, value: &[u8]) -> Result<Self> {
        match type_url {
            "/cosmos.auth.v1beta1.BaseAccount" => {
                let base_account = BaseAccount::decode(value)
                    .map_err(|e| anyhow!("Failed to decode BaseAccount: {}", e))?;
                Ok(Account::Base(base_account))
            }
            unsupported_type => {
                log::warn!("Encountered unsupported account type: {}", unsupported_type);
                Ok(Account::Unsupported {
                    type_url: unsupported_type.to_string(),
                })
            }
        }
    }

    pub fn account_info(&self) -> Result<AccountInfo> {
        match self {
            Account::Base(acc) => Ok(AccountInfo {
                address: acc.address.clone(),
                account_number: acc.account_number,
                sequence: acc.sequence,
            }),
            Account::Unsupported { type_url } => Err(anyhow!(
                "Cannot extract signer info from account type {}",
                type_url
            )),
        }
    }
}
