use serde::{Deserialize, Serialize};

/// A wallet account as reported by the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Account name.
    pub name: String,
}

/// Acknowledgement for a queued faucet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundsRequestInfo {
    /// Queue identifier assigned by the faucet.
    pub id: String,
}
