use lovenest_shared::api::{
    MessageWire, NewMessage, PhotoWire, StatsWire, UploadResponse, MESSAGES_PATH, PHOTOS_PATH,
    STATS_PATH, UPLOAD_FIELD, UPLOAD_PHOTO_PATH,
};
use reqwest::{multipart, Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// The one failure the page handles: the backend could not give a usable answer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {0}")]
    Status(StatusCode),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin JSON-over-HTTP client for the page backend.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Result<Url, url::ParseError>,
}

impl ApiClient {
    /// An unparsable base URL is kept as an error so every request falls back.
    pub fn new(base_url: &str) -> Self {
        let base = format!("{}/", base_url.trim_end_matches('/'));
        Self {
            http: Client::new(),
            base: Url::parse(&base),
        }
    }

    /// Resolve an endpoint path or photo URL the way a page resolves links.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base.clone()?;
        Ok(base.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.http.get(self.endpoint(path)?).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn stats(&self) -> Result<StatsWire, ApiError> {
        self.get_json(STATS_PATH).await
    }

    pub async fn photos(&self) -> Result<Vec<PhotoWire>, ApiError> {
        self.get_json(PHOTOS_PATH).await
    }

    pub async fn messages(&self) -> Result<Vec<MessageWire>, ApiError> {
        self.get_json(MESSAGES_PATH).await
    }

    /// Raw bytes of a photo listed by the backend.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let resp = self.http.get(self.endpoint(url)?).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(resp.bytes().await?.to_vec())
    }

    /// Multipart upload. Any JSON answer counts as reached; only `success` says it was stored.
    pub async fn upload_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part(UPLOAD_FIELD, part);
        let resp = self
            .http
            .post(self.endpoint(UPLOAD_PHOTO_PATH)?)
            .multipart(form)
            .send()
            .await?;
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Returns the status so the caller can tell "stored" from "answered but refused".
    pub async fn post_message(&self, message: &NewMessage) -> Result<StatusCode, ApiError> {
        let resp = self
            .http
            .post(self.endpoint(MESSAGES_PATH)?)
            .json(message)
            .send()
            .await?;
        Ok(resp.status())
    }
}
