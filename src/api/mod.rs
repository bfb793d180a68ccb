mod client;
mod endpoint;
mod error;

#[cfg(feature = "yew")]
mod http;

pub use client::{fetch_collection, load_users_page, submit_edit, update_user, ApiClient};
pub use endpoint::Endpoint;
pub use error::ApiError;

#[cfg(feature = "yew")]
pub use http::HttpClient;
