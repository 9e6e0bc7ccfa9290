//! Remote Campaign Control Service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use shared::{
    domain::{Campaign, CampaignId},
    error::{ApiError, ErrorCode},
    protocol::{CampaignActionRequest, CampaignListResponse, RemoteAction, CAMPAIGNS_PATH},
};
use tracing::debug;
use url::Url;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait CampaignService: Send + Sync {
    async fn list_campaigns(&self, token: &str) -> ClientResult<Vec<Campaign>>;
    async fn perform(
        &self,
        token: &str,
        action: RemoteAction,
        campaign_id: &CampaignId,
    ) -> ClientResult<()>;
}

pub struct HttpCampaignService {
    http: Client,
    base_url: Url,
}

impl HttpCampaignService {
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> ClientResult<Response> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST campaign service");
        let res = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        check_status(res).await
    }
}

#[async_trait]
impl CampaignService for HttpCampaignService {
    async fn list_campaigns(&self, token: &str) -> ClientResult<Vec<Campaign>> {
        let url = self.endpoint(CAMPAIGNS_PATH)?;
        debug!(%url, "GET campaign service");
        let res = self.http.get(url).bearer_auth(token).send().await?;
        let body: CampaignListResponse = check_status(res).await?.json().await?;
        Ok(body.campaigns)
    }

    async fn perform(
        &self,
        token: &str,
        action: RemoteAction,
        campaign_id: &CampaignId,
    ) -> ClientResult<()> {
        self.post_json(
            token,
            action.path(),
            &CampaignActionRequest::new(campaign_id.clone()),
        )
        .await?;
        Ok(())
    }
}

/// Trims the configured base URL and guarantees a trailing slash so that
/// relative joins keep any path prefix (`https://host/api/` + `campaigns`).
pub fn normalize_base_url(raw: &str) -> ClientResult<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Ok(Url::parse(&with_slash)?)
}

async fn check_status(res: Response) -> ClientResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let raw = res.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&raw)
        .ok()
        .and_then(|body| body.text().map(str::to_string))
        .unwrap_or_else(|| {
            let raw = raw.trim();
            if raw.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                raw.to_string()
            }
        });

    Err(ClientError::Remote {
        code: ErrorCode::from_status(status.as_u16()),
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
