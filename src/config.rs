use std::env;

/// Environment variable overriding the cluster base URL.
pub const ES_URL_ENV: &str = "ES_URL";

pub const DEFAULT_ES_URL: &str = "http://localhost:9200";

/// Root of the fixture tree, relative to the working directory.
pub const DEFAULT_FIXTURE_ROOT: &str = "data/es_data_loader";

/// Where the cluster lives. Passed explicitly to every client that talks to it.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterConfig {
    pub url: String,
}

impl ClusterConfig {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `ES_URL`, falling back to the local default when unset or blank.
    pub fn from_env() -> Self {
        Self::from_override(env::var(ES_URL_ENV).ok().as_deref())
    }

    fn from_override(url: Option<&str>) -> Self {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(custom) => Self::new(custom),
            None => Self::new(DEFAULT_ES_URL),
        }
    }
}
