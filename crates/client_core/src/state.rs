//! Local, transient copy of the campaign list plus per-campaign markers.

use std::collections::HashSet;

use shared::domain::{Campaign, CampaignId};

#[derive(Debug, Clone)]
pub struct CampaignListState {
    campaigns: Vec<Campaign>,
    loading: bool,
    deleting: HashSet<CampaignId>,
    toggling: HashSet<CampaignId>,
}

impl Default for CampaignListState {
    fn default() -> Self {
        Self {
            campaigns: Vec::new(),
            loading: true,
            deleting: HashSet::new(),
            toggling: HashSet::new(),
        }
    }
}

impl CampaignListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    pub fn find(&self, id: &CampaignId) -> Option<&Campaign> {
        self.campaigns.iter().find(|campaign| &campaign.id == id)
    }

    pub fn replace_all(&mut self, campaigns: Vec<Campaign>) {
        self.campaigns = campaigns;
    }

    /// Drops every entry with `id`, keeping the rest in order.
    pub fn remove_by_id(&mut self, id: &CampaignId) -> bool {
        let before = self.campaigns.len();
        self.campaigns.retain(|campaign| &campaign.id != id);
        self.campaigns.len() != before
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Returns false when a delete for `id` is already outstanding.
    pub fn mark_deleting(&mut self, id: &CampaignId) -> bool {
        self.deleting.insert(id.clone())
    }

    pub fn clear_deleting(&mut self, id: &CampaignId) {
        self.deleting.remove(id);
    }

    pub fn is_deleting(&self, id: &CampaignId) -> bool {
        self.deleting.contains(id)
    }

    /// Returns false when a start/pause/resume for `id` is already outstanding.
    pub fn mark_toggling(&mut self, id: &CampaignId) -> bool {
        self.toggling.insert(id.clone())
    }

    pub fn clear_toggling(&mut self, id: &CampaignId) {
        self.toggling.remove(id);
    }

    pub fn is_toggling(&self, id: &CampaignId) -> bool {
        self.toggling.contains(id)
    }
}
