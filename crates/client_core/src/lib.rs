//! Client core for the campaign dashboard: the toggle resolver, local list
//! state, the remote Campaign Control Service and the controller tying them
//! together.

pub mod collaborators;
pub mod controller;
pub mod error;
pub mod resolver;
pub mod state;
pub mod transport;
pub mod view;

pub use collaborators::{Notifier, StaticTokenProvider, TokenProvider};
pub use controller::{ActionOutcome, CampaignsController, ToggleReport};
pub use error::{ClientError, ClientResult};
pub use resolver::{resolve_for, resolve_toggle, ToggleAction};
pub use state::CampaignListState;
pub use transport::{CampaignService, HttpCampaignService, DEFAULT_REQUEST_TIMEOUT};
