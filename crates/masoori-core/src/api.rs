//! HTTP client for the card API.
//!
//! One request per call and no retries. Callers decide what to do with a
//! failure; the desktop app keeps showing whatever card it already has.

use reqwest::{Client, StatusCode};

use crate::config::ApiConfig;
use crate::error::{CoreError, CoreResult};
use crate::types::{ConsumeId, ConsumeInfo};

/// Path of the basic card for one consume id
pub fn consume_path(id: ConsumeId) -> String {
    format!("/api/card/basic/{}", id)
}

/// Path of the current week's basic card
pub const RECENT_CARD_PATH: &str = "/api/card/basic/recent";

/// Card API client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Build a client with the config's timeouts.
    pub fn new(config: ApiConfig) -> CoreResult<Self> {
        config.validate()?;
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the card and keyword list for `id`.
    pub async fn get_consume(&self, id: ConsumeId) -> CoreResult<ConsumeInfo> {
        let url = self.config.url(&consume_path(id));
        let (status, body) = self.get_text(&url).await?;

        if status == StatusCode::NOT_FOUND {
            return Err(CoreError::NotFound(format!("consume {}", id)));
        }
        ensure_success(status, &url)?;

        let info = ConsumeInfo::from_json(&body)?;
        tracing::info!(
            consume_id = %id,
            card = %info.card.name,
            keywords = info.basic_list.len(),
            "Loaded card info"
        );
        Ok(info)
    }

    /// Fetch this week's card, `None` when none has been drawn yet.
    pub async fn get_recent_card(&self) -> CoreResult<Option<ConsumeInfo>> {
        let url = self.config.url(RECENT_CARD_PATH);
        let (status, body) = self.get_text(&url).await?;

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        ensure_success(status, &url)?;

        let body = body.trim();
        if body.is_empty() || body == "null" {
            tracing::info!("No card drawn this week");
            return Ok(None);
        }
        Ok(Some(ConsumeInfo::from_json(body)?))
    }

    async fn get_text(&self, url: &str) -> CoreResult<(StatusCode, String)> {
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!("GET {} failed: {}", url, e);
            CoreError::from(e)
        })?;

        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        let body = response.text().await?;
        Ok((status, body))
    }
}

fn ensure_success(status: StatusCode, url: &str) -> CoreResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        tracing::warn!("GET {} returned {}", url, status);
        Err(CoreError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}
