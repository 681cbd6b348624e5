use indicatif::{ProgressBar, ProgressStyle};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;

use crate::error::WalletError;
use crate::rpc_types::{AccountInfo, FundsRequestInfo};

/// Default RPC request timeout in seconds.
const DEFAULT_RPC_TIMEOUT_SECS: u64 = 10;

/// Remote operations the faucet flow depends on. The concrete client talks
/// JSON-RPC to a node; tests substitute a mock.
///
/// Callers never spawn these futures, so no Send bound is required.
#[allow(async_fn_in_trait)]
pub trait FaucetClient {
    async fn get_default_account(&self) -> Result<Option<AccountInfo>, WalletError>;
    async fn create_account(&self, name: &str, default: bool) -> Result<AccountInfo, WalletError>;
    async fn get_funds(
        &self,
        account: &str,
        email: Option<&str>,
    ) -> Result<FundsRequestInfo, WalletError>;
}

/// JSON-RPC client for the Tidal node.
pub struct RpcClient {
    client: HttpClient,
}

impl RpcClient {
    /// Create a new RPC client.
    pub fn new(url: &str) -> Result<Self, WalletError> {
        tracing::debug!("connecting to {}", url);
        let client = HttpClientBuilder::default()
            .request_timeout(std::time::Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECS))
            .build(url)
            .map_err(|e| WalletError::Rpc(format!("failed to connect: {}", e)))?;
        Ok(Self { client })
    }

    /// Create a spinner for an RPC operation.
    fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("  {spinner} {msg}")
                .expect("valid template"),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }

    /// Split server-raised call errors from transport failures. The server's
    /// message is shown to the user verbatim, so keep it intact.
    fn map_rpc_error(e: jsonrpsee::core::ClientError) -> WalletError {
        if let jsonrpsee::core::ClientError::Call(err) = e {
            return WalletError::Request(err.message().to_string());
        }
        let msg = e.to_string();
        if msg.contains("connection")
            || msg.contains("Connection")
            || msg.contains("refused")
            || msg.contains("SendRequest")
            || msg.contains("send request")
        {
            WalletError::Rpc(
                "Could not connect to node.\nHint: Start a node with `tidal-node run --dev`"
                    .to_string(),
            )
        } else {
            WalletError::Rpc(msg)
        }
    }
}

impl FaucetClient for RpcClient {
    /// Get the account the node uses when none is named explicitly.
    async fn get_default_account(&self) -> Result<Option<AccountInfo>, WalletError> {
        let pb = Self::spinner("Looking up your default account...");
        let result: Option<AccountInfo> = self
            .client
            .request("tidal_getDefaultAccount", rpc_params![])
            .await
            .map_err(Self::map_rpc_error)?;
        pb.finish_and_clear();
        Ok(result)
    }

    /// Create an account, optionally marking it as the default.
    async fn create_account(&self, name: &str, default: bool) -> Result<AccountInfo, WalletError> {
        let pb = Self::spinner("Creating your account...");
        let result: AccountInfo = self
            .client
            .request("tidal_createAccount", rpc_params![name, default])
            .await
            .map_err(Self::map_rpc_error)?;
        pb.finish_and_clear();
        Ok(result)
    }

    /// Ask the faucet to queue a funds request for an account.
    async fn get_funds(
        &self,
        account: &str,
        email: Option<&str>,
    ) -> Result<FundsRequestInfo, WalletError> {
        let pb = Self::spinner("Collecting your funds...");
        let result: FundsRequestInfo = self
            .client
            .request("tidal_getFunds", rpc_params![account, email])
            .await
            .map_err(Self::map_rpc_error)?;
        pb.finish_and_clear();
        Ok(result)
    }
}
