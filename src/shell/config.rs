use std::env;

const DEFAULT_LISTEN: &str = "0.0.0.0:8000";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen: String,
    pub static_dir: String,
    pub cors_origins: Vec<String>,
    pub log_filter: String,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_cors_origins(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            listen: lookup("ACTIVITIES_LISTEN").unwrap_or_else(|| DEFAULT_LISTEN.into()),
            static_dir: lookup("ACTIVITIES_STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.into()),
            cors_origins: lookup("ACTIVITIES_CORS_ORIGINS")
                .map_or_else(Vec::new, |v| parse_cors_origins(&v)),
            log_filter: lookup("ACTIVITIES_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
            log_json: lookup("ACTIVITIES_LOG_JSON").is_some_and(|v| v == "true"),
        }
    }
}
