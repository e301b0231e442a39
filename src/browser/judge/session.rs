extern crate reqwest;
extern crate serde;
extern crate serde_json;

use super::{
    error::{Error, Result},
    retry::async_retry,
    UtilityRegex,
};
use crate::config::api::BASE_URL;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};

const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";

#[derive(Deserialize)]
#[serde(rename_all = "UPPERCASE")]
enum ApiStatus {
    Ok,
    Failed,
}

/// The judge wraps every API result in a status envelope; failures put
/// their reason in `comment`.
#[derive(Deserialize)]
pub(super) struct ApiResponse<T> {
    status: ApiStatus,
    #[serde(default)]
    comment: Option<String>,
    result: Option<T>,
}
impl<T> ApiResponse<T> {
    pub(super) fn into_result(self, on_fail: fn(Option<String>) -> Error) -> Result<T> {
        match self.status {
            ApiStatus::Ok => self.result.ok_or_else(|| on_fail(None)),
            ApiStatus::Failed => Err(on_fail(self.comment)),
        }
    }
}

pub struct Session {
    pub(super) client: Client,
    pub(super) regex: UtilityRegex,
}

impl Session {
    pub fn new() -> Result<Self> {
        Ok(Session {
            client: Client::builder()
                .user_agent(FIREFOX_UA)
                .cookie_store(true)
                .build()
                .map_err(Error::Builder)?,
            regex: UtilityRegex::new(),
        })
    }

    // A failed call still answers with the envelope (over HTTP 400), so
    // only server errors go through error_for_status.
    pub(super) async fn api_call<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse<T>> {
        let url = format!("{}{}", BASE_URL, method);
        let url = url.as_str();
        let body = async_retry(|| async move {
            let response = self.client.get(url).query(query).send().await?;
            if response.status().is_server_error() {
                response.error_for_status()?.text().await
            } else {
                response.text().await
            }
        })
        .await
        .map_err(Error::Network)?;
        serde_json::from_str(&body).map_err(Error::Decode)
    }
}
