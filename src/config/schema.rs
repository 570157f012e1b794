//! Configuration schema for docdex
//!
//! Configuration is stored at `~/.config/docdex/config.toml`

use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation site settings
    pub site: SiteConfig,

    /// Identifier resolution rules
    pub resolve: ResolveConfig,
}

impl Config {
    /// Build the resolver fixed by this configuration
    pub fn resolver(&self) -> Resolver {
        Resolver::new(
            self.site.base_href.clone(),
            self.site.content_prefix.clone(),
            self.resolve.aliases.clone(),
            self.resolve.placeholders.iter().cloned().collect(),
        )
    }
}

/// Where and how document content is fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base href prepended to every content source path
    pub base_href: String,

    /// Path prefix of the content tree on the site
    pub content_prefix: String,

    /// Global HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_href: String::new(),
            content_prefix: "content/docs/".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Alias and placeholder rules applied during identifier resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Ids that all resolve to the shared placeholder document
    pub placeholders: Vec<String>,

    /// Ids mapped to an alternate source document name
    pub aliases: HashMap<String, String>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            placeholders: vec!["resources".to_string(), "events".to_string()],
            aliases: HashMap::from([(
                "guide/store".to_string(),
                "guide/store/index".to_string(),
            )]),
        }
    }
}
