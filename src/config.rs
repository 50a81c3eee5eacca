//! API location and the resource URLs that records use as identities and cross-references.

use crate::error::{Error, Result};
use crate::freeagent::Resource;
use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;
use tracing::{debug, info};

pub const PRODUCTION_BASE_URL: &str = "https://api.freeagent.com/v2";
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.freeagent.com/v2";

/// Overrides the base URL entirely.
pub const BASE_URL_VAR: &str = "FREEAGENT_API_BASE_URL";
/// `true` / `1` selects the sandbox when no base URL is given.
pub const SANDBOX_VAR: &str = "FREEAGENT_SANDBOX";

static RESOURCE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<base>https?://[^/]+/v2)/(?P<path>[a-z0-9_/]+?)/(?P<id>[^/?#]+)$")
        .expect("valid resource url pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

/// A resource URL split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    /// Collection path below the base URL, e.g. `contacts` or `payroll/2026`.
    pub path: String,
    /// Last segment; numeric for most resources, a date for tax returns.
    pub id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/');
        if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
            return Err(Error::Config {
                key: BASE_URL_VAR,
                message: format!("{base_url:?} is not an http(s) URL"),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn production() -> Self {
        Self {
            base_url: PRODUCTION_BASE_URL.to_string(),
        }
    }

    pub fn sandbox() -> Self {
        Self {
            base_url: SANDBOX_BASE_URL.to_string(),
        }
    }

    /// Reads `FREEAGENT_API_BASE_URL` and `FREEAGENT_SANDBOX` from the environment or a
    /// `.env` file. Falls back to production.
    pub fn from_env() -> Result<Self> {
        if let Ok(base_url) = dotenv::var(BASE_URL_VAR) {
            info!("Using FreeAgent API at {}", base_url);
            return Self::new(base_url);
        }

        let config = match dotenv::var(SANDBOX_VAR) {
            Ok(flag) => match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Self::sandbox(),
                "0" | "false" | "no" | "" => Self::production(),
                _ => {
                    return Err(Error::Config {
                        key: SANDBOX_VAR,
                        message: format!("expected true or false, got {flag:?}"),
                    });
                }
            },
            Err(_) => Self::production(),
        };

        info!("Using FreeAgent API at {}", config.base_url);
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url<R: Resource>(&self) -> String {
        format!("{}/{}", self.base_url, R::PATH)
    }

    /// URL identifying one resource, as used in cross-reference fields.
    pub fn resource_url<R: Resource>(&self, id: impl Display) -> String {
        format!("{}/{}/{}", self.base_url, R::PATH, id)
    }

    /// Splits a resource URL issued by this API into collection path and id.
    pub fn parse_resource_url(&self, url: &str) -> Result<ResourceRef> {
        let caps = RESOURCE_URL
            .captures(url)
            .filter(|caps| &caps["base"] == self.base_url)
            .ok_or_else(|| Error::InvalidResourceUrl(url.to_string()))?;

        let resource = ResourceRef {
            path: caps["path"].to_string(),
            id: caps["id"].to_string(),
        };
        debug!("Parsed {} as {:?}", url, resource);
        Ok(resource)
    }

    /// Like [`parse_resource_url`](Self::parse_resource_url), but also checks the URL
    /// points into `R`'s collection.
    pub fn resource_id<R: Resource>(&self, url: &str) -> Result<String> {
        let resource = self.parse_resource_url(url)?;
        if resource.path != R::PATH {
            return Err(Error::InvalidResourceUrl(url.to_string()));
        }
        Ok(resource.id)
    }
}

/// Last path segment of a resource URL, without checking the base.
pub fn id_from_url(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit_once('/')
        .map(|(_, id)| id)
        .filter(|id| !id.is_empty())
}
