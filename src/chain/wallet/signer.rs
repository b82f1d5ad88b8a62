use anyhow::Result;
use secp256k1::{Message, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};

/// Transaction signer for Cosmos SIGN_MODE_DIRECT
/// Produces 64-byte compact secp256k1 signatures over a SHA-256 digest
pub struct TransactionSigner {
    secp: Secp256k1<secp256k1::All>,
}

impl TransactionSigner {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    /// Hash raw SignDoc bytes with SHA-256 and sign the digest
    pub fn sign_sign_doc(&self, sign_doc_bytes: &[u8], private_key: &SecretKey) -> Result<Vec<u8>> {
        let hash: [u8; 32] = Sha256::digest(sign_doc_bytes).into();
        self.sign_digest(&hash, private_key)
    }

    /// Sign a pre-computed 32-byte digest
    pub fn sign_digest(&self, digest: &[u8; 32], private_key: &SecretKey) -> Result<Vec<u8>> {
        let message = Message::from_digest_slice(digest)?;

        // Deterministic ECDSA (RFC 6979); Cosmos verifiers require the
        // low-s normalized form which serialize_compact emits
        let signature = self.secp.sign_ecdsa(&message, private_key);
        Ok(signature.serialize_compact().to_vec())
    }
}

impl Default for TransactionSigner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::wallet::CosmosWallet;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_sign_doc_signing() {
        let wallet = CosmosWallet::from_mnemonic(TEST_MNEMONIC, "neutron").unwrap();
        let signer = TransactionSigner::new();

        let private_key = wallet.private_key().unwrap();
        let signature = signer
            .sign_sign_doc(b"test sign doc bytes", &private_key)
            .unwrap();

        // Compact signature: 64 bytes, no recovery byte
        assert_eq!(signature.len(), 64);

        // Deterministic: same input signs identically
        let signature2 = signer
            .sign_sign_doc(b"test sign doc bytes", &private_key)
            .unwrap();
        assert_eq!(signature, signature2);
    }

    #[test]
    fn test_digest_signing() {
        let wallet = CosmosWallet::from_mnemonic(TEST_MNEMONIC, "neutron").unwrap();
        let signer = TransactionSigner::new();

        let digest = [0x42u8; 32];
        let private_key = wallet.private_key().unwrap();
        let signature = signer.sign_digest(&digest, &private_key).unwrap();
        assert_eq!(signature.len(), 64);

        // Different digests must produce different signatures
        let other = signer.sign_digest(&[0x43u8; 32], &private_key).unwrap();
        assert_ne!(signature, other);
    }
}
