use crate::banner;
use crate::config::{WalletConfig, SUPPORT_DISCORD_INVITE};
use crate::error::WalletError;
use crate::format::{print_info, print_success, style_dim};
use crate::prompt::{Prompt, TermPrompt};
use crate::rpc_client::{FaucetClient, RpcClient};

/// Kill switch for the faucet, flipped in a release when the faucet
/// backend is taken down. `--force` overrides it.
const FAUCET_DISABLED: bool = false;

/// Name used when the user declines to pick one.
const FALLBACK_ACCOUNT_NAME: &str = "default";

pub async fn run(
    force: bool,
    email: Option<&str>,
    rpc_url: Option<&str>,
) -> Result<(), WalletError> {
    let config = WalletConfig::load()?;
    let url = rpc_url.unwrap_or(&config.rpc_url);
    let rpc = RpcClient::new(url)?;

    execute(&rpc, &TermPrompt, FAUCET_DISABLED, force, email).await
}

/// The faucet flow proper, generic over the node client and the prompt so
/// tests can drive it without a node or a terminal.
pub(crate) async fn execute<C: FaucetClient, P: Prompt>(
    client: &C,
    prompt: &P,
    disabled: bool,
    force: bool,
    email: Option<&str>,
) -> Result<(), WalletError> {
    if disabled && !force {
        return Err(WalletError::FaucetDisabled(
            SUPPORT_DISCORD_INVITE.to_string(),
        ));
    }

    banner::print_splash();

    let email = match email {
        Some(e) => Some(e.to_string()),
        None => prompt.input_optional("Enter your email to stay updated with Tidal")?,
    };

    // Create an account if one is not set.
    let account_name = match client.get_default_account().await? {
        Some(account) => account.name,
        None => {
            println!("  You don't have a default account set up yet. Let's create one first!");
            let name = prompt
                .input_optional("Please enter the name of your new Tidal account")?
                .unwrap_or_else(|| FALLBACK_ACCOUNT_NAME.to_string());
            client.create_account(&name, true).await?.name
        }
    };

    let result = match client.get_funds(&account_name, email.as_deref()).await {
        Ok(result) => result,
        Err(WalletError::Request(msg)) => return Err(WalletError::Request(msg)),
        Err(e) => {
            tracing::debug!("faucet request failed: {}", e);
            return Err(WalletError::FaucetUnavailable);
        }
    };

    println!("{}", style_dim().apply_to(banner::TWO_WAVE_IMAGE));
    print_success("Congratulations! The Tidal faucet just added your request to the queue!");
    println!();
    println!("  It will be processed within the next hour and $TIDE will be sent");
    println!("  straight to your account.");
    println!();
    print_info("Request", &result.id);
    println!();
    println!("  Check your balance by running:");
    println!("    tidal balance");
    println!();
    println!("  Learn how to send a transaction by running:");
    println!("    tidal pay --help");

    Ok(())
}
