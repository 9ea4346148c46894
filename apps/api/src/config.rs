use anyhow::{Context, Result};

/// Server configuration loaded from environment variables.
///
/// The Anthropic key is optional at startup: without it the server still
/// boots, and the conversion endpoint answers every request with a 500.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8888".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Configuration for the `seed-tickets` batch process.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl SeedConfig {
    pub const URL_VAR: &'static str = "VITE_SUPABASE_URL";
    pub const KEY_VAR: &'static str = "VITE_SUPABASE_ANON_KEY";

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(SeedConfig {
            supabase_url: require_env(Self::URL_VAR)?,
            supabase_anon_key: require_env(Self::KEY_VAR)?,
        })
    }
}

/// Reads a variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_reports_variable_name() {
        let err = require_env("TICKET_API_TEST_SURELY_UNSET_VAR").unwrap_err();
        assert!(err
            .to_string()
            .contains("'TICKET_API_TEST_SURELY_UNSET_VAR' is not set"));
    }

    #[test]
    fn test_blank_value_counts_as_unset() {
        std::env::set_var("TICKET_API_TEST_BLANK_VAR", "   ");
        assert!(optional_env("TICKET_API_TEST_BLANK_VAR").is_none());
        assert!(require_env("TICKET_API_TEST_BLANK_VAR").is_err());
    }

    #[test]
    fn test_present_value_is_returned() {
        std::env::set_var("TICKET_API_TEST_PRESENT_VAR", "sk-test");
        assert_eq!(
            optional_env("TICKET_API_TEST_PRESENT_VAR").as_deref(),
            Some("sk-test")
        );
    }
}
