use std::path::PathBuf;

use anyhow::{Context, Result};

/// Board configuration loaded from environment variables. Every setting has
/// a default, so a bare `board` run works from the repository root.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub assets_dir: PathBuf,
    pub fallback_logo: String,
    /// Clickable tag chips (filtering) when true, static tag text when false.
    pub tags_interactive: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_path: env_or("BOARD_DATA_PATH", "data/data.json").into(),
            assets_dir: env_or("BOARD_ASSETS_DIR", "public").into(),
            fallback_logo: env_or("BOARD_FALLBACK_LOGO", "/images/fallback-image.svg"),
            tags_interactive: parse_bool(&env_or("BOARD_TAGS_INTERACTIVE", "true"))
                .context("BOARD_TAGS_INTERACTIVE must be true or false")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool(" on ").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
