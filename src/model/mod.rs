mod activity;
mod collection;
pub mod display;
mod leaderboard;
mod record;
mod team;
mod user;
mod user_editor;
mod user_form;
mod workout;

pub use activity::Activity;
pub use collection::{decode_collection, unwrap_results, Loadable};
pub use display::{format_date, team_label, NO_TEAM};
pub use leaderboard::{rank_badge, ranked, LeaderboardEntry};
pub use record::{replace_by_id, Record, RecordId};
pub use team::Team;
pub use user::User;
pub use user_editor::{
    success_message, Banner, EditorState, UsersAction, UsersState, BANNER_TIMEOUT_MS,
};
pub use user_form::{is_valid_email, parse_int, FormErrors, UserDraft, UserField, UserPatch};
pub use workout::Workout;
