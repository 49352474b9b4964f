// src/core/net.rs
// Retrieval collaborator: contest id in, raw standings page out.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{ MONITOR_PATH, USER_AGENT };
use crate::error::{ Error, Result };

/// Anything that can hand back the standings page of a contest.
/// Implementations are shared across worker threads.
pub trait Fetch: Send + Sync {
    fn fetch(&self, contest_id: &str) -> Result<String>;
}

pub fn monitor_url(base_url: &str, contest_id: &str) -> String {
    let path = MONITOR_PATH.replace("{id}", contest_id);
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// HTTP GET against the live site.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::retrieval("-", e))?;
        Ok(Self { client, base_url: s!(base_url) })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, contest_id: &str) -> Result<String> {
        let url = monitor_url(&self.base_url, contest_id);
        logd!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::retrieval(contest_id, e))?;

        resp.text().map_err(|e| Error::retrieval(contest_id, e))
    }
}
