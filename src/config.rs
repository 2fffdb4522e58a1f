//! Configuration loaded from claimlens.toml and environment variables.
//!
//! Everything here is read once at startup and immutable afterwards. The
//! reputable-domain list is deployment configuration, not scoring logic; the
//! shipped defaults mirror the reference deployment.

use crate::error::{ClaimlensError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub sources: SourcesConfig,
    pub limits: LimitsConfig,
}

/// Source trust configuration used by the quality scorer and by the upstream
/// search collaborator when tagging fact-check items.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Substring-matched against evidence urls, case-insensitively.
    /// A heuristic trust signal, not a verified registry.
    pub reputable_domains: Vec<String>,
    /// Known fact-checking sites the search collaborator queries directly.
    pub fact_check_sites: Vec<String>,
}

/// Per-channel evidence caps the search collaborator applies before evidence
/// reaches the engine. Scoring stays correct if a caller exceeds them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub direct_evidence: usize,
    pub context_evidence: usize,
    pub existing_fact_checks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: SourcesConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            reputable_domains: [
                "reuters.com",
                "apnews.com",
                "bbc.com",
                "nytimes.com",
                "washingtonpost.com",
                "theguardian.com",
                "npr.org",
                "factcheck.org",
                "snopes.com",
                "politifact.com",
                "fullfact.org",
                "who.int",
                "cdc.gov",
                "gov.uk",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            fact_check_sites: [
                "snopes.com",
                "factcheck.org",
                "politifact.com",
                "reuters.com/fact-check",
                "apnews.com/ap-fact-check",
                "fullfact.org",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            direct_evidence: 5,
            context_evidence: 5,
            existing_fact_checks: 3,
        }
    }
}

impl Config {
    /// Load configuration: defaults, then `claimlens.toml` if present
    /// (path overridable via CLAIMLENS_CONFIG), then env overrides.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var("CLAIMLENS_CONFIG").unwrap_or_else(|_| "claimlens.toml".to_string());
        let mut config = if Path::new(&path).exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| ClaimlensError::Config {
                message: format!("failed to read {}: {}", path, e),
            })?;
            toml::from_str(&raw)?
        } else {
            Self::default()
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Comma-separated CLAIMLENS_REPUTABLE_DOMAINS replaces the configured
    /// list wholesale.
    fn apply_env(&mut self) {
        if let Ok(domains) = std::env::var("CLAIMLENS_REPUTABLE_DOMAINS") {
            let parsed: Vec<String> = domains
                .split(',')
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect();
            if !parsed.is_empty() {
                self.sources.reputable_domains = parsed;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sources.reputable_domains.is_empty() {
            return Err(ClaimlensError::Config {
                message: "reputable_domains must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
