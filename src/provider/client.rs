use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::provider::response::TimingsResponse;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the AlAdhan prayer times service.
/// One request per invocation; no retries.
pub struct ProviderClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ProviderClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Building HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch today's timings for a city. Geographic and method parameters
    /// are passed through unvalidated; the service resolves them.
    pub fn timings_by_city(
        &self,
        city: &str,
        country: &str,
        method: u32,
    ) -> Result<TimingsResponse> {
        let url = format!("{}/timingsByCity", self.base_url);
        log::debug!("GET {url} city={city} country={country} method={method}");

        let method = method.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("city", city),
                ("country", country),
                ("method", method.as_str()),
            ])
            .send()
            .with_context(|| format!("Requesting prayer times for {}", city))?;

        let status = response.status();
        if !status.is_success() {
            bail!("prayer times service returned {} for {}", status, response.url());
        }

        response
            .json::<TimingsResponse>()
            .context("Decoding prayer times response")
    }
}
