// src/core/net.rs
// One-shot HTTP(S) GET for remote CSV sources.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::{ FETCH_TIMEOUT_SECS, USER_AGENT };

pub fn http_get(url: &str) -> Result<String, reqwest::Error> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?;

    debug!("Net: GET {url}");
    let resp = client.get(url).send()?.error_for_status()?;
    debug!("Net: {} {url}", resp.status());
    resp.text()
}
