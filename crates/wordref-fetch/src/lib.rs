use std::time::Duration;

use reqwest::header::USER_AGENT;
use wordref_config::fetch::FetchConfig;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("lookup for `{word}` failed with status {status}: {body}")]
    Status {
        word: String,
        status: u16,
        body: String,
    },
}

/// HTTP client for the dictionary site.
#[derive(Clone)]
pub struct PageClient {
    base_url: String,
    user_agent: String,
    client: reqwest::Client,
}

impl PageClient {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            client,
        })
    }

    /// Fetch the dictionary page for one word, as raw markup.
    pub async fn fetch_page(&self, word: &str) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base_url, word);
        tracing::debug!("fetching {url}");

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                word: word.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
