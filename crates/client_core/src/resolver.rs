//! Decides what the combined pause/play control does for a campaign.

use shared::domain::{Campaign, CampaignStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleAction {
    /// The campaign is finished; show a notice and make no request.
    None,
    Start,
    Pause,
    Resume,
}

/// Picks the next action from the persisted status and the engine's
/// `isPaused` flag. First match wins:
///
/// 1. `COMPLETED` resolves to [`ToggleAction::None`].
/// 2. `isPaused == true` resolves to [`ToggleAction::Resume`], even when the
///    persisted status still says `IN_PROGRESS`.
/// 3. `IN_PROGRESS` resolves to [`ToggleAction::Pause`].
/// 4. Anything else starts the campaign, including `PAUSED` without the
///    engine flag and unknown statuses.
pub fn resolve_toggle(status: &CampaignStatus, is_paused: Option<bool>) -> ToggleAction {
    if *status == CampaignStatus::Completed {
        return ToggleAction::None;
    }
    if is_paused == Some(true) {
        return ToggleAction::Resume;
    }
    if *status == CampaignStatus::InProgress {
        return ToggleAction::Pause;
    }
    ToggleAction::Start
}

/// Resolves against a locally cached campaign. An id that is not in the
/// local list has no known status and falls through to `Start`.
pub fn resolve_for(campaign: Option<&Campaign>) -> ToggleAction {
    match campaign {
        Some(campaign) => resolve_toggle(&campaign.status, campaign.is_paused_flag()),
        None => ToggleAction::Start,
    }
}
