use anyhow::Result;
use bech32::{self, Hrp};
use bip32::{ChildNumber, XPrv};
use bip39::Mnemonic;
use ripemd::Ripemd160;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secure wallet for Cosmos-SDK chains (Neutron and friends)
/// Implements BIP32 HD derivation over the standard Cosmos path and
/// zeroizes key material on drop
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct CosmosWallet {
    #[zeroize(skip)] // Public data doesn't need zeroizing
    pub address: String,

    private_key_bytes: [u8; 32],
    public_key_bytes: [u8; 33],
}

impl CosmosWallet {
    /// Create a wallet from a BIP39 mnemonic with an optional passphrase,
    /// encoding the address with the given bech32 prefix (e.g. "neutron")
    pub fn from_mnemonic_with_passphrase(
        mnemonic_str: &str,
        passphrase: &str,
        prefix: &str,
    ) -> Result<Self> {
        // Parse and validate mnemonic
        let mnemonic = Mnemonic::parse(mnemonic_str)?;

        // Generate seed from mnemonic with passphrase
        let seed = mnemonic.to_seed(passphrase);

        // Derive private key over the Cosmos HD path
        let private_key = derive_private_key_bip32(&seed)?;

        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&private_key)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        // Cosmos address: bech32(prefix, ripemd160(sha256(compressed pubkey)))
        let address = bech32_address(&public_key, prefix)?;

        let mut private_key_bytes = [0u8; 32];
        private_key_bytes.copy_from_slice(&private_key);

        let public_key_bytes = public_key.serialize();

        // Zeroize the temporary private key
        let mut temp_key = private_key;
        temp_key.zeroize();

        Ok(Self {
            address,
            private_key_bytes,
            public_key_bytes,
        })
    }

    /// Create a wallet from a BIP39 mnemonic with no passphrase
    pub fn from_mnemonic(mnemonic_str: &str, prefix: &str) -> Result<Self> {
        Self::from_mnemonic_with_passphrase(mnemonic_str, "", prefix)
    }

    /// Get the private key as a SecretKey (for signing)
    /// Note: Caller is responsible for secure handling
    pub fn private_key(&self) -> Result<SecretKey> {
        SecretKey::from_slice(&self.private_key_bytes)
            .map_err(|e| anyhow::anyhow!("Invalid private key: {}", e))
    }

    /// Get the public key as compressed bytes (33 bytes)
    pub fn public_key_compressed(&self) -> [u8; 33] {
        self.public_key_bytes
    }
}

/// Derive a private key over the Cosmos HD path m/44'/118'/0'/0/0
fn derive_private_key_bip32(seed: &[u8]) -> Result<[u8; 32]> {
    let xprv = XPrv::new(seed)
        .map_err(|e| anyhow::anyhow!("Failed to create XPrv from seed: {}", e))?;

    // 44' = BIP44 purpose, 118' = Cosmos coin type, 0' = account,
    // 0 = external chain, 0 = address index
    let derived = xprv
        .derive_child(ChildNumber::new(44, true)?)
        .and_then(|k| k.derive_child(ChildNumber::new(118, true)?))
        .and_then(|k| k.derive_child(ChildNumber::new(0, true)?))
        .and_then(|k| k.derive_child(ChildNumber::new(0, false)?))
        .and_then(|k| k.derive_child(ChildNumber::new(0, false)?))
        .map_err(|e| anyhow::anyhow!("Failed to derive key: {}", e))?;

    Ok(derived.to_bytes())
}

/// Encode a Cosmos bech32 account address from a public key
fn bech32_address(public_key: &PublicKey, prefix: &str) -> Result<String> {
    let compressed = public_key.serialize();

    let sha = Sha256::digest(compressed);
    let addr_bytes: [u8; 20] = Ripemd160::digest(sha).into();

    let hrp = Hrp::parse(prefix)?;
    let encoded = bech32::encode::<bech32::Bech32>(hrp, &addr_bytes)?;

    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_wallet_generation() {
        let wallet = CosmosWallet::from_mnemonic(TEST_MNEMONIC, "neutron").unwrap();

        // bech32 account address: hrp + "1" + 32 data chars + 6 checksum chars
        assert!(wallet.address.starts_with("neutron1"));
        assert_eq!(wallet.address.len(), "neutron".len() + 39);
    }

    #[test]
    fn test_deterministic_generation() {
        let wallet1 = CosmosWallet::from_mnemonic(TEST_MNEMONIC, "neutron").unwrap();
        let wallet2 = CosmosWallet::from_mnemonic(TEST_MNEMONIC, "neutron").unwrap();
        assert_eq!(wallet1.address, wallet2.address);

        // Different passphrases should give different addresses
        let wallet3 =
            CosmosWallet::from_mnemonic_with_passphrase(TEST_MNEMONIC, "mypass", "neutron")
                .unwrap();
        assert_ne!(wallet1.address, wallet3.address);
    }

    #[test]
    fn test_prefix_selects_hrp() {
        let neutron = CosmosWallet::from_mnemonic(TEST_MNEMONIC, "neutron").unwrap();
        let cosmos = CosmosWallet::from_mnemonic(TEST_MNEMONIC, "cosmos").unwrap();

        assert!(neutron.address.starts_with("neutron1"));
        assert!(cosmos.address.starts_with("cosmos1"));

        // Same key material, different encoding: data part matches
        let neutron_data = neutron.address.trim_start_matches("neutron1");
        let cosmos_data = cosmos.address.trim_start_matches("cosmos1");
        // All but the 6 checksum chars agree
        assert_eq!(
            &neutron_data[..neutron_data.len() - 6],
            &cosmos_data[..cosmos_data.len() - 6]
        );
    }

    #[test]
    fn test_invalid_mnemonic_rejected() {
        let result = CosmosWallet::from_mnemonic("not a valid mnemonic phrase", "neutron");
        assert!(result.is_err());
    }

    #[test]
    fn test_key_sizes() {
        let wallet = CosmosWallet::from_mnemonic(TEST_MNEMONIC, "neutron").unwrap();
        assert_eq!(wallet.private_key_bytes.len(), 32);
        assert_eq!(wallet.public_key_bytes.len(), 33);
        // Compressed pubkey prefix is 0x02 or 0x03
        assert!(wallet.public_key_bytes[0] == 0x02 || wallet.public_key_bytes[0] == 0x03);
    }
}
