use std::future::Future;
use std::pin::Pin;

use reqwest::header::USER_AGENT;

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapError};

pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Fetched>> + 'a>>;

/// Raw response of a listing page
#[derive(Debug, Clone)]
pub struct Fetched {
    pub markup: String,
    pub status: u16,
}

pub trait Fetch {
    /// Listing url of the given 1-based page
    fn url(&self, page: u32) -> String;

    /// Downloads one page. Any status is returned as is, only transport
    /// failures are errors.
    fn fetch(&self, page: u32) -> FetchFuture<'_>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: ScraperConfig,
}

impl HttpFetcher {
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .build()
            .map_err(|e| ScrapError::transport(&config.base_url, e))?;
        Ok(Self { client, config })
    }
}

impl Fetch for HttpFetcher {
    fn url(&self, page: u32) -> String {
        self.config.page_url(page)
    }

    fn fetch(&self, page: u32) -> FetchFuture<'_> {
        Box::pin(async move {
            let url = self.url(page);
            let resp = self
                .client
                .get(&url)
                .header(USER_AGENT, &self.config.user_agent)
                .send()
                .await
                .map_err(|e| ScrapError::transport(&url, e))?;

            let status = resp.status().as_u16();
            let markup = resp
                .text()
                .await
                .map_err(|e| ScrapError::transport(&url, e))?;

            Ok(Fetched { markup, status })
        })
    }
}
