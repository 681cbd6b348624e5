use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::WalletError;

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9820";

/// Discord invite shown when the faucet is disabled or a request is queued.
pub const SUPPORT_DISCORD_INVITE: &str = "https://discord.gg/tidalnetwork";

/// Wallet configuration stored in ~/.tidal/config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    /// RPC endpoint URL.
    pub rpc_url: String,
    /// Network identifier: "dev", "testnet", "mainnet".
    #[serde(default = "default_network")]
    pub network: String,
}

fn default_network() -> String {
    "testnet".to_string()
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            network: default_network(),
        }
    }
}

impl WalletConfig {
    /// Get the wallet data directory (~/.tidal/).
    pub fn data_dir() -> Result<PathBuf, WalletError> {
        let home = dirs::home_dir()
            .ok_or_else(|| WalletError::Config("could not determine home directory".to_string()))?;
        Ok(home.join(".tidal"))
    }

    fn config_path() -> Result<PathBuf, WalletError> {
        Ok(Self::data_dir()?.join("config.json"))
    }

    /// Load config from disk, or create default if it doesn't exist.
    pub fn load() -> Result<Self, WalletError> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Self::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    fn load_from(path: &Path) -> Result<Self, WalletError> {
        let data = std::fs::read_to_string(path)?;
        let config: WalletConfig = serde_json::from_str(&data)?;
        Ok(config)
    }

    fn save_to(&self, path: &Path) -> Result<(), WalletError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)?;
            file.write_all(data.as_bytes())?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(path, data)?;
        }

        Ok(())
    }
}
