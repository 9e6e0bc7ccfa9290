//! Presentation model for the campaign table, independent of any renderer.

use shared::domain::{Campaign, CampaignId, CampaignStatus, ListSummary, SenderSummary};

use crate::state::CampaignListState;

pub const LOADING_MESSAGE: &str = "Loading campaigns...";
pub const EMPTY_MESSAGE: &str = "Oops no campaigns found, create one";
pub const UNKNOWN_SENDER: &str = "Unknown";
pub const NO_PROVIDER: &str = "No provider";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Play,
    Pause,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderView {
    pub initials: String,
    pub name: String,
    pub provider: String,
    pub picture_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRow {
    pub id: CampaignId,
    pub name: String,
    pub created_on: String,
    pub status_label: String,
    pub sender: SenderView,
    pub list_summary: Option<String>,
    pub toggle_icon: ToggleIcon,
    pub deleting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Loading,
    Empty,
    Table(Vec<CampaignRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Create,
    Edit(CampaignId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Create => "/campaigns/create-campaign".to_string(),
            Self::Edit(id) => format!("/campaigns/edit/{id}"),
        }
    }
}

pub fn status_label(status: &CampaignStatus) -> &str {
    match status {
        CampaignStatus::InProgress => "Active",
        CampaignStatus::Draft => "Draft",
        CampaignStatus::Completed => "Completed",
        CampaignStatus::Paused => "Paused",
        CampaignStatus::Other(raw) => raw,
    }
}

pub fn toggle_icon(status: &CampaignStatus) -> ToggleIcon {
    if *status == CampaignStatus::InProgress {
        ToggleIcon::Pause
    } else {
        ToggleIcon::Play
    }
}

pub fn sender_initials(sender: Option<&SenderSummary>) -> String {
    let name = sender.map(|s| s.name.trim()).unwrap_or_default();
    if name.is_empty() {
        return "?".to_string();
    }
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

pub fn sender_view(sender: Option<&SenderSummary>) -> SenderView {
    let non_empty = |value: &str| (!value.trim().is_empty()).then(|| value.to_string());
    SenderView {
        initials: sender_initials(sender),
        name: sender
            .and_then(|s| non_empty(&s.name))
            .unwrap_or_else(|| UNKNOWN_SENDER.to_string()),
        provider: sender
            .and_then(|s| non_empty(&s.provider))
            .unwrap_or_else(|| NO_PROVIDER.to_string()),
        picture_url: sender.and_then(|s| s.profile_picture_url.clone()),
    }
}

pub fn list_summary(list: &ListSummary) -> String {
    match list.total {
        Some(total) => format!("{}: {total} Leads", list.name),
        None => format!("{}: - Leads", list.name),
    }
}

pub fn campaign_row(campaign: &Campaign, deleting: bool) -> CampaignRow {
    CampaignRow {
        id: campaign.id.clone(),
        name: campaign.name.clone(),
        created_on: campaign.created_at.format("%Y-%m-%d").to_string(),
        status_label: status_label(&campaign.status).to_string(),
        sender: sender_view(campaign.sender_data.as_ref()),
        list_summary: campaign.list_data.as_ref().map(list_summary),
        toggle_icon: toggle_icon(&campaign.status),
        deleting,
    }
}

pub fn page_view(state: &CampaignListState) -> PageView {
    if state.is_loading() {
        return PageView::Loading;
    }
    if state.is_empty() {
        return PageView::Empty;
    }
    PageView::Table(
        state
            .campaigns()
            .iter()
            .map(|campaign| campaign_row(campaign, state.is_deleting(&campaign.id)))
            .collect(),
    )
}
