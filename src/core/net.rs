// src/core/net.rs
// Blocking HTTP GET. The fetch stage is sequential, no async runtime needed.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Error, Result};

pub fn client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

/// GET `url` and return the body. Any non-2xx status is an error.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::HttpStatus { url: s!(url), status });
    }
    Ok(resp.text()?)
}
