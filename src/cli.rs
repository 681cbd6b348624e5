use clap::{Parser, Subcommand};

use crate::commands;
use crate::error::WalletError;

#[derive(Parser)]
#[command(
    name = "tidal",
    about = "Tidal wallet — manage accounts and coins on the Tidal network",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Receive coins from the official Tidal faucet
    Faucet {
        /// Ask the faucet for coins even if it is disabled
        #[arg(long)]
        force: bool,
        /// Email to attach to the funds request
        #[arg(long, hide = true)]
        email: Option<String>,
        /// Override RPC URL for this command
        #[arg(long)]
        rpc_url: Option<String>,
    },
}

pub async fn run(cli: Cli) -> Result<(), WalletError> {
    match cli.command {
        Command::Faucet {
            force,
            email,
            rpc_url,
        } => commands::faucet::run(force, email.as_deref(), rpc_url.as_deref()).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_faucet_defaults() {
        let cli = Cli::try_parse_from(["tidal", "faucet"]).unwrap();
        let Command::Faucet {
            force,
            email,
            rpc_url,
        } = cli.command;
        assert!(!force);
        assert!(email.is_none());
        assert!(rpc_url.is_none());
    }

    #[test]
    fn test_parse_faucet_all_flags() {
        let cli = Cli::try_parse_from([
            "tidal",
            "faucet",
            "--force",
            "--email",
            "sailor@example.com",
            "--rpc-url",
            "http://10.0.0.5:9820",
        ])
        .unwrap();
        let Command::Faucet {
            force,
            email,
            rpc_url,
        } = cli.command;
        assert!(force);
        assert_eq!(email.as_deref(), Some("sailor@example.com"));
        assert_eq!(rpc_url.as_deref(), Some("http://10.0.0.5:9820"));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["tidal", "drain"]).is_err());
    }
}
