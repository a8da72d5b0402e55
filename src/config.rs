use std::env;
use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use chrono::NaiveDate;
use dotenvy::dotenv;

use crate::schedule::resolver::REFERENCE_OFFICE_FRIDAY;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // Rate limiting
    pub rate_view_per_min: u32,

    pub reference_office_friday: NaiveDate,
    /// Pins "today" instead of reading the local clock
    pub today: Option<NaiveDate>,

    pub log_dir: String,

    // Month grid cache
    pub month_cache_capacity: u64,
    pub month_cache_ttl_secs: u64,
    pub warmup_months: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let config = Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            api_prefix: lookup("API_PREFIX").unwrap_or_else(|| "/api".to_string()),
            rate_view_per_min: parse_or(&lookup, "RATE_VIEW_PER_MIN", 600)?,
            reference_office_friday: parse_or(
                &lookup,
                "REFERENCE_OFFICE_FRIDAY",
                REFERENCE_OFFICE_FRIDAY,
            )?,
            today: lookup("TODAY")
                .map(|v| {
                    v.parse::<NaiveDate>()
                        .with_context(|| format!("TODAY must be YYYY-MM-DD, got {v:?}"))
                })
                .transpose()?,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            month_cache_capacity: parse_or(&lookup, "MONTH_CACHE_CAPACITY", 240)?,
            month_cache_ttl_secs: parse_or(&lookup, "MONTH_CACHE_TTL_SECS", 86_400)?, // 24h
            warmup_months: parse_or(&lookup, "WARMUP_MONTHS", 6)?,
        };

        if config.rate_view_per_min == 0 {
            bail!("RATE_VIEW_PER_MIN must be greater than zero");
        }

        Ok(config)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{key} has invalid value {raw:?}: {e}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:8080");
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.reference_office_friday, REFERENCE_OFFICE_FRIDAY);
        assert_eq!(config.today, None);
        assert_eq!(config.warmup_months, 6);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("REFERENCE_OFFICE_FRIDAY", "2026-01-30"),
            ("TODAY", "2026-10-19"),
            ("RATE_VIEW_PER_MIN", "30"),
        ])
        .unwrap();
        assert_eq!(
            config.reference_office_friday,
            NaiveDate::from_ymd_opt(2026, 1, 30).unwrap()
        );
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2026, 10, 19));
        assert_eq!(config.rate_view_per_min, 30);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config_from(&[("TODAY", "19/10/2026")]).is_err());
        assert!(config_from(&[("RATE_VIEW_PER_MIN", "0")]).is_err());
        assert!(config_from(&[("MONTH_CACHE_CAPACITY", "lots")]).is_err());
    }
}
