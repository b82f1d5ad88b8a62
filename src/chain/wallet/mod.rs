mod keys;
mod signer;

pub use keys::CosmosWallet;
pub use signer::TransactionSigner;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_roundtrip_through_module() {
        let mnemonic =
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        let wallet = CosmosWallet::from_mnemonic(mnemonic, "neutron").unwrap();

        assert!(wallet.address.starts_with("neutron1"));

        // Key material is usable for signing
        let signer = TransactionSigner::new();
        let key = wallet.private_key().unwrap();
        let sig = signer.sign_sign_doc(b"payload", &key).unwrap();
        assert_eq!(sig.len(), 64);
    }
}
