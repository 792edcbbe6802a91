use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://www.wordreference.com/fren".to_string()
}

fn default_user_agent() -> String {
    // The site serves a reduced page to clients without a browser UA.
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/56.0.2924.87 Safari/537.36"
        .to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FetchConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl FetchConfig {
    pub fn new() -> Self {
        let timeout_seconds = env::var("WORDREF_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        FetchConfig {
            base_url: env::var("WORDREF_BASE_URL").unwrap_or_else(|_| default_base_url()),
            user_agent: env::var("WORDREF_USER_AGENT").unwrap_or_else(|_| default_user_agent()),
            timeout_seconds,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
