mod use_api;
mod use_collection;
mod use_users;

pub use use_api::use_api;
pub use use_collection::use_collection;
pub use use_users::{use_users, UsersHandle};
