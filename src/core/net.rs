// src/core/net.rs
//
// Blocking HTTPS fetch helpers. One client per run; every request carries a
// browser User-Agent because the storefront serves bots an empty shell.

use std::{error::Error, thread, time::Duration};

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};

pub fn client() -> Result<Client, Box<dyn Error>> {
    let c = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(c)
}

/// GET with bounded retries. The pause doubles after each failed attempt
/// (1s, 2s, ...). Non-2xx statuses count as failures and are retried too.
pub fn get_with_retries(
    client: &Client,
    url: &str,
    attempts: u32,
) -> Result<String, Box<dyn Error>> {
    let mut last_err: Option<Box<dyn Error>> = None;

    for attempt in 0..attempts {
        if attempt > 0 {
            thread::sleep(Duration::from_secs(1u64 << (attempt - 1)));
        }
        match client.get(url).send().and_then(|r| r.error_for_status()) {
            Ok(resp) => match resp.text() {
                Ok(body) => return Ok(body),
                Err(e) => last_err = Some(e.into()),
            },
            Err(e) => last_err = Some(e.into()),
        }
    }

    Err(last_err.unwrap_or_else(|| format!("no response from {}", url).into()))
}

pub struct HeadResponse {
    pub status: u16,
    pub content_type: Option<String>,
}

/// Single header-only probe. No retries; callers classify the outcome.
pub fn head(client: &Client, url: &str) -> Result<HeadResponse, Box<dyn Error>> {
    let resp = client.head(url).send()?;
    let status = resp.status().as_u16();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_ascii_lowercase());
    Ok(HeadResponse { status, content_type })
}
