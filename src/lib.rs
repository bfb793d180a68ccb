//! # OctoFit Tracker
//!
//! Browser front-end for the OctoFit fitness API: activity, leaderboard,
//! team and workout listings plus an inline editor for user profiles.

pub mod api;
pub mod config;
pub mod model;

#[cfg(feature = "yew")]
pub mod app;
#[cfg(feature = "yew")]
pub mod components;
#[cfg(feature = "yew")]
pub mod hooks;
#[cfg(feature = "yew")]
pub mod pages;
#[cfg(feature = "yew")]
pub mod providers;

pub mod prelude {
    pub use crate::api::{ApiClient, ApiError, Endpoint};
    pub use crate::config::Config;
    pub use crate::model::{
        Activity, EditorState, LeaderboardEntry, Loadable, Record, RecordId, Team, User,
        UserDraft, UserField, UserPatch, UsersAction, UsersState, Workout,
    };

    #[cfg(feature = "yew")]
    pub use crate::api::HttpClient;
    #[cfg(feature = "yew")]
    pub use crate::app::{App, Route};
}
