use thiserror::Error;

/// Errors that can occur in wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("the faucet is currently disabled. Check {0} for updates")]
    FaucetDisabled(String),

    /// Server-supplied request error. Display is the message verbatim.
    #[error("{0}")]
    Request(String),

    #[error("unfortunately, the faucet request failed. Please try again later")]
    FaucetUnavailable,

    #[error("rpc error: {0}")]
    Rpc(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("config error: {0}")]
    Config(String),
}

impl WalletError {
    /// Optional hint printed under the error message.
    pub fn hint(&self) -> Option<&str> {
        match self {
            WalletError::FaucetDisabled(_) => Some("Pass --force to try anyway."),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(e: serde_json::Error) -> Self {
        WalletError::Serialization(e.to_string())
    }
}
