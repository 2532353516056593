use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// The delay in seconds between two page downloads
    #[serde(default = "default_delay")]
    pub delay: f32,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            delay: default_delay(),
        }
    }
}

fn default_base_url() -> String {
    String::from("http://quotes.toscrape.com")
}

fn default_user_agent() -> String {
    String::from(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    )
}

fn default_delay() -> f32 {
    1.
}

impl ScraperConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ScrapError::Config(format!(
                "base url must be http(s), got: {}",
                self.base_url
            )));
        }
        self.delay()?;
        Ok(())
    }

    /// Fails when `delay` is negative, NaN or too large for a [`Duration`]
    pub fn delay(&self) -> Result<Duration> {
        Duration::try_from_secs_f32(self.delay).map_err(|e| {
            ScrapError::Config(format!(
                "delay must be a non-negative number of seconds, got: {} ({e})",
                self.delay
            ))
        })
    }

    /// Listing url of the given 1-based page
    pub fn page_url(&self, page: u32) -> String {
        format!("{}/page/{page}/", self.base_url.trim_end_matches('/'))
    }
}
