use dialoguer::Input;

use crate::error::WalletError;

/// Interactive input, injected so command flows can be tested without a
/// terminal.
pub trait Prompt {
    /// Ask for a free-text answer. An empty answer is `None`.
    fn input_optional(&self, message: &str) -> Result<Option<String>, WalletError>;
}

/// Terminal-backed prompt using dialoguer.
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn input_optional(&self, message: &str) -> Result<Option<String>, WalletError> {
        let answer: String = Input::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| WalletError::Io(std::io::Error::other(e)))?;
        let answer = answer.trim().to_string();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer))
        }
    }
}
