//! Wires user actions on the campaign table to the remote service.

use std::sync::Arc;

use shared::{
    domain::{Campaign, CampaignId},
    protocol::RemoteAction,
};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::{
    collaborators::{Notifier, TokenProvider},
    error::{ClientError, ClientResult},
    resolver::{resolve_for, ToggleAction},
    state::CampaignListState,
    transport::CampaignService,
};

pub const COMPLETED_NOTICE: &str = "Campaign is completed";
pub const FETCH_FAILED_NOTICE: &str = "Failed to fetch campaigns";
pub const DELETED_NOTICE: &str = "Campaign deleted successfully";
pub const DELETE_FAILED_NOTICE: &str = "Failed to delete campaign";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    /// The remote call failed; the user was notified and local state kept.
    Failed,
    /// Guarded no-op, e.g. toggling a completed campaign.
    Blocked,
    /// Another request for the same campaign is still outstanding.
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleReport {
    pub action: ToggleAction,
    pub outcome: ActionOutcome,
}

pub struct CampaignsController {
    service: Arc<dyn CampaignService>,
    tokens: Arc<dyn TokenProvider>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<CampaignListState>,
}

impl CampaignsController {
    pub fn new(
        service: Arc<dyn CampaignService>,
        tokens: Arc<dyn TokenProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            service,
            tokens,
            notifier,
            state: Mutex::new(CampaignListState::new()),
        }
    }

    pub async fn snapshot(&self) -> CampaignListState {
        self.state.lock().await.clone()
    }

    pub async fn campaigns(&self) -> Vec<Campaign> {
        self.state.lock().await.campaigns().to_vec()
    }

    /// Replaces the local list with the service's. A failed request leaves
    /// the previous list in place.
    pub async fn fetch_campaigns(&self) -> ClientResult<ActionOutcome> {
        self.state.lock().await.set_loading(true);

        let Some(token) = self.tokens.token().await else {
            self.state.lock().await.set_loading(false);
            return Err(ClientError::AuthenticationRequired);
        };

        let result = self.service.list_campaigns(&token).await;

        let mut state = self.state.lock().await;
        state.set_loading(false);
        match result {
            Ok(campaigns) => {
                info!(count = campaigns.len(), "fetched campaigns");
                state.replace_all(campaigns);
                Ok(ActionOutcome::Succeeded)
            }
            Err(err) => {
                drop(state);
                error!(error = %err, "failed to fetch campaigns");
                self.notifier.error(FETCH_FAILED_NOTICE);
                Ok(ActionOutcome::Failed)
            }
        }
    }

    /// Handles the combined pause/play control for `id`.
    pub async fn toggle(&self, id: &CampaignId) -> ClientResult<ToggleReport> {
        let action = {
            let state = self.state.lock().await;
            resolve_for(state.find(id))
        };

        let remote = match action {
            ToggleAction::None => {
                info!(campaign_id = %id, "toggle ignored for completed campaign");
                self.notifier.error(COMPLETED_NOTICE);
                return Ok(ToggleReport {
                    action,
                    outcome: ActionOutcome::Blocked,
                });
            }
            ToggleAction::Start => RemoteAction::Start,
            ToggleAction::Pause => RemoteAction::Pause,
            ToggleAction::Resume => RemoteAction::Resume,
        };

        let outcome = self.run_lifecycle_action(id, remote).await?;
        Ok(ToggleReport { action, outcome })
    }

    pub async fn start(&self, id: &CampaignId) -> ClientResult<ActionOutcome> {
        self.run_lifecycle_action(id, RemoteAction::Start).await
    }

    pub async fn pause(&self, id: &CampaignId) -> ClientResult<ActionOutcome> {
        self.run_lifecycle_action(id, RemoteAction::Pause).await
    }

    pub async fn resume(&self, id: &CampaignId) -> ClientResult<ActionOutcome> {
        self.run_lifecycle_action(id, RemoteAction::Resume).await
    }

    /// Deletes `id` remotely and drops it from the local list on success,
    /// without refetching. The deleting marker is cleared either way.
    pub async fn delete(&self, id: &CampaignId) -> ClientResult<ActionOutcome> {
        let Some(token) = self.tokens.token().await else {
            return Err(ClientError::AuthenticationRequired);
        };

        if !self.state.lock().await.mark_deleting(id) {
            warn!(campaign_id = %id, "delete already in flight");
            return Ok(ActionOutcome::InFlight);
        }

        let result = self
            .service
            .perform(&token, RemoteAction::Delete, id)
            .await;

        let mut state = self.state.lock().await;
        state.clear_deleting(id);
        match result {
            Ok(()) => {
                state.remove_by_id(id);
                drop(state);
                info!(campaign_id = %id, "campaign deleted");
                self.notifier.success(DELETED_NOTICE);
                Ok(ActionOutcome::Succeeded)
            }
            Err(err) => {
                drop(state);
                error!(campaign_id = %id, error = %err, "failed to delete campaign");
                self.notifier.error(DELETE_FAILED_NOTICE);
                Ok(ActionOutcome::Failed)
            }
        }
    }

    /// Runs one start/pause/resume. The per-id guard stays held until the
    /// follow-up refresh has landed so a repeat click cannot act on the
    /// stale local copy.
    async fn run_lifecycle_action(
        &self,
        id: &CampaignId,
        action: RemoteAction,
    ) -> ClientResult<ActionOutcome> {
        if !self.state.lock().await.mark_toggling(id) {
            warn!(campaign_id = %id, action = action.name(), "campaign action already in flight");
            return Ok(ActionOutcome::InFlight);
        }

        let outcome = self.apply_lifecycle_action(id, action).await;
        self.state.lock().await.clear_toggling(id);
        outcome
    }

    async fn apply_lifecycle_action(
        &self,
        id: &CampaignId,
        action: RemoteAction,
    ) -> ClientResult<ActionOutcome> {
        let Some(token) = self.tokens.token().await else {
            return Err(ClientError::AuthenticationRequired);
        };

        if let Err(err) = self.service.perform(&token, action, id).await {
            error!(
                campaign_id = %id,
                action = action.name(),
                error = %err,
                "campaign action failed"
            );
            self.notifier.error(failure_notice(action));
            return Ok(ActionOutcome::Failed);
        }

        info!(campaign_id = %id, action = action.name(), "campaign action applied");
        self.notifier.success(success_notice(action));

        // The action itself went through; a refresh that cannot authenticate
        // only leaves the list stale.
        if let Err(err) = self.fetch_campaigns().await {
            warn!(campaign_id = %id, error = %err, "refresh after campaign action skipped");
            self.notifier.error(FETCH_FAILED_NOTICE);
        }
        Ok(ActionOutcome::Succeeded)
    }
}

fn success_notice(action: RemoteAction) -> &'static str {
    match action {
        RemoteAction::Start => "Campaign Started",
        RemoteAction::Pause => "Campaign Paused",
        RemoteAction::Resume => "Campaign Resumed",
        RemoteAction::Delete => DELETED_NOTICE,
    }
}

fn failure_notice(action: RemoteAction) -> &'static str {
    match action {
        RemoteAction::Start => "Failed to start campaign",
        RemoteAction::Pause => "Failed to pause campaign",
        RemoteAction::Resume => "Failed to resume campaign",
        RemoteAction::Delete => DELETE_FAILED_NOTICE,
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
