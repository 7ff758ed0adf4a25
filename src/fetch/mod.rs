use std::time::Duration;

use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};
use url::Url;

pub fn make_client() -> reqwest::Client {
    Client::builder()
        .gzip(true)
        .timeout(Duration::from_secs(60))
        .build()
        .expect("client creation should succeed")
}

/// Downloads the weekly menu page.
#[instrument(skip(client, url), fields(url = %url), level = Level::DEBUG)]
pub async fn menu_page(client: &reqwest::Client, url: &Url) -> Result<String, RequestError> {
    let start = std::time::Instant::now();
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let text = response.text().await?;
    log::debug!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(text)
}
