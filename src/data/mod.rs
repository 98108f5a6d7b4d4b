pub mod citysearch;
pub mod gateway;
pub mod geoip;
pub mod openweather;

use std::time::Duration;

use reqwest::Client;

pub(crate) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default http client");
            Client::new()
        })
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
