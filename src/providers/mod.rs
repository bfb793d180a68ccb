mod api_provider;

pub use api_provider::{ApiContext, ApiProvider, ApiProviderProps};
