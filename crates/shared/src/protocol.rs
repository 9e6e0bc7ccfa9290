use serde::{Deserialize, Serialize};

use crate::domain::{Campaign, CampaignId};

pub const CAMPAIGNS_PATH: &str = "campaigns";
pub const START_PATH: &str = "campaigns/start";
pub const PAUSE_PATH: &str = "campaigns/pause";
pub const RESUME_PATH: &str = "campaigns/resume";
pub const DELETE_PATH: &str = "campaigns/delete";

/// Body of `GET /campaigns`. A missing or `null` list decodes as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignListResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub campaigns: Vec<Campaign>,
}

/// Body shared by the start/pause/resume/delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignActionRequest {
    pub campaign_id: CampaignId,
}

impl CampaignActionRequest {
    pub fn new(campaign_id: CampaignId) -> Self {
        Self { campaign_id }
    }
}

/// Mutating remote operations on a single campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteAction {
    Start,
    Pause,
    Resume,
    Delete,
}

impl RemoteAction {
    pub fn path(self) -> &'static str {
        match self {
            Self::Start => START_PATH,
            Self::Pause => PAUSE_PATH,
            Self::Resume => RESUME_PATH,
            Self::Delete => DELETE_PATH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Delete => "delete",
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Campaign>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Campaign>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_request_uses_camel_case_key() {
        let body = CampaignActionRequest::new(CampaignId::from("cmp_9"));
        assert_eq!(
            serde_json::to_value(&body).expect("encode"),
            serde_json::json!({ "campaignId": "cmp_9" })
        );
    }

    #[test]
    fn null_or_missing_campaign_list_is_empty() {
        let body: CampaignListResponse =
            serde_json::from_str(r#"{"campaigns":null}"#).expect("decode");
        assert!(body.campaigns.is_empty());

        let body: CampaignListResponse = serde_json::from_str("{}").expect("decode");
        assert!(body.campaigns.is_empty());
    }

    #[test]
    fn one_incomplete_list_summary_does_not_reject_the_page() {
        let raw = r#"{"campaigns":[
            {"id":"a","name":"A","created_at":"2024-01-01T00:00:00Z","status":"DRAFT","list_data":{"name":"Full","total":3}},
            {"id":"b","name":"B","created_at":"2024-01-01T00:00:00Z","status":"DRAFT","list_data":{"name":"L"}}
        ]}"#;
        let body: CampaignListResponse = serde_json::from_str(raw).expect("decode");

        assert_eq!(body.campaigns.len(), 2);
        let partial = body.campaigns[1].list_data.as_ref().expect("list data");
        assert_eq!(partial.name, "L");
        assert_eq!(partial.total, None);
    }
}
