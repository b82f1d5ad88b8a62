use thiserror::Error;

/// Errors raised locally by the client, before any network traffic.
///
/// Everything the chain or transport produces is propagated as-is through
/// `anyhow`; this type only covers misuse of the client itself.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An execute operation was invoked on a read-only client.
    /// Reconnect with `connect_with_signer` to recover.
    #[error("{0} requires a signing client; this client was opened read-only")]
    SigningRequired(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_required_message() {
        let err = ClientError::SigningRequired("increment");
        let msg = err.to_string();
        assert!(msg.contains("increment"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = ClientError::SigningRequired("reset").into();
        assert!(err.downcast_ref::<ClientError>().is_some());
    }
}
