use std::time::Duration;

use catalog_logging::catalog_debug;
use futures_util::StreamExt;
use url::Url;

use crate::wire::decode_page;
use crate::{CatalogPage, EngineEvent, FailureKind, FetchError, FetchProgress, Ticket};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// API root; pages are requested from `{base_url}/artworks?page=N`.
    pub base_url: String,
    /// Page size override sent as `limit`; the API default applies when `None`.
    pub page_limit: Option<u32>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.artic.edu/api/v1".to_string(),
            page_limit: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 8 * 1024 * 1024,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// A paginated catalog that can be read one page at a time.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(
        &self,
        ticket: Ticket,
        page: u32,
        sink: &dyn ProgressSink,
    ) -> Result<CatalogPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPageSource {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestPageSource {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn page_url(&self, page: u32) -> Result<Url, FetchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/artworks"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page", &page.to_string());
            if let Some(limit) = self.settings.page_limit {
                query.append_pair("limit", &limit.to_string());
            }
        }
        Ok(url)
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl PageSource for ReqwestPageSource {
    async fn fetch_page(
        &self,
        ticket: Ticket,
        page: u32,
        sink: &dyn ProgressSink,
    ) -> Result<CatalogPage, FetchError> {
        let url = self.page_url(page)?;
        catalog_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
            sink.emit(EngineEvent::Progress(FetchProgress {
                ticket,
                page,
                bytes: next_len,
            }));
        }

        decode_page(&bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
