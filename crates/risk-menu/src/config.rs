use anyhow::{Context, Result};
use std::env;

const DEFAULT_REPORT_FILE: &str = "informe.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Fixed RNG seed for reproducible runs (RISK_SIM_SEED)
    pub seed: Option<u64>,
    /// File name used when the save prompt is left empty (RISK_SIM_DEFAULT_FILE)
    pub default_file: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_file: DEFAULT_REPORT_FILE.to_string(),
        }
    }
}

impl MenuConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = match lookup("RISK_SIM_SEED") {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("RISK_SIM_SEED must be an unsigned integer, got '{}'", raw))?,
            ),
            _ => None,
        };

        let default_file = lookup("RISK_SIM_DEFAULT_FILE")
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_REPORT_FILE.to_string());

        Ok(Self { seed, default_file })
    }
}
