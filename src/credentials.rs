//! API credential acquisition.
//!
//! Each credential is resolved through an ordered lookup: explicit CLI flag,
//! then process environment, then a `.env` file (loaded into the environment
//! so the same lookup covers it), then an interactive prompt. The secret
//! prompt never echoes.

use std::io::{self, Write};

use crate::error::TradingError;

pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// Resolve the API key and secret, prompting only for whatever the flag,
/// environment and `.env` chain did not supply.
///
/// Prompts run on the blocking thread pool so the caller's task stays
/// pollable (the signal handler racing this flow must keep being served).
pub async fn resolve(
    flag_key: Option<String>,
    flag_secret: Option<String>,
) -> Result<(String, String), TradingError> {
    // A missing .env file is fine; only a malformed one matters, and even
    // then the chain continues to the prompt.
    let _ = dotenvy::dotenv();

    let key = match from_chain(flag_key, API_KEY_ENV) {
        Some(key) => key,
        None => prompt_visible("Enter API Key: ").await?,
    };
    let secret = match from_chain(flag_secret, API_SECRET_ENV) {
        Some(secret) => secret,
        None => prompt_hidden("Enter API Secret (hidden): ").await?,
    };

    if key.is_empty() || secret.is_empty() {
        return Err(TradingError::ConfigError(
            "API key and secret must not be empty".to_string(),
        ));
    }
    Ok((key, secret))
}

/// Ordered lookup for one credential: explicit value first, then the
/// environment variable. Blank values fall through to the next source.
fn from_chain(explicit: Option<String>, env_var: &str) -> Option<String> {
    explicit
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| {
            std::env::var(env_var)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
}

async fn prompt_visible(message: &'static str) -> Result<String, TradingError> {
    tokio::task::spawn_blocking(move || -> Result<String, TradingError> {
        print!("{}", message);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    })
    .await
    .map_err(|e| TradingError::ConfigError(format!("prompt task failed: {}", e)))?
}

async fn prompt_hidden(message: &'static str) -> Result<String, TradingError> {
    tokio::task::spawn_blocking(move || -> Result<String, TradingError> {
        let secret = rpassword::prompt_password(message)?;
        Ok(secret.trim().to_string())
    })
    .await
    .map_err(|e| TradingError::ConfigError(format!("prompt task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins_over_environment() {
        // Var name chosen to never exist in the test environment.
        let value = from_chain(Some("flag-key".into()), "FUTURES_BOT_TEST_UNSET_VAR");
        assert_eq!(value.as_deref(), Some("flag-key"));
    }

    #[test]
    fn blank_flag_falls_through() {
        let value = from_chain(Some("   ".into()), "FUTURES_BOT_TEST_UNSET_VAR");
        assert_eq!(value, None);
    }

    #[test]
    fn environment_is_consulted_when_flag_absent() {
        std::env::set_var("FUTURES_BOT_TEST_SET_VAR", "env-key");
        let value = from_chain(None, "FUTURES_BOT_TEST_SET_VAR");
        std::env::remove_var("FUTURES_BOT_TEST_SET_VAR");
        assert_eq!(value.as_deref(), Some("env-key"));
    }

    #[tokio::test]
    async fn explicit_flags_resolve_without_prompting() {
        let (key, secret) = resolve(Some("flag-key".into()), Some("flag-secret".into()))
            .await
            .unwrap();
        assert_eq!(key, "flag-key");
        assert_eq!(secret, "flag-secret");
    }
}
