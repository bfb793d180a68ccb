mod activity_table;
mod collection_view;
mod leaderboard_table;
mod nav_bar;
mod status;
mod success_banner;
mod team_cards;
mod user_edit_modal;
mod user_table;
mod workout_cards;

pub use activity_table::ActivityTable;
pub use collection_view::{CollectionView, CollectionViewProps};
pub use leaderboard_table::LeaderboardTable;
pub use nav_bar::{NavBar, NAV_LINKS};
pub use status::{empty_message, loading_message, EmptyCard, EmptyRow, ErrorAlert, LoadingSpinner};
pub use success_banner::SuccessBanner;
pub use team_cards::TeamCards;
pub use user_edit_modal::UserEditModal;
pub use user_table::UserTable;
pub use workout_cards::WorkoutCards;
