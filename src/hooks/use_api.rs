use crate::providers::ApiContext;
use yew::prelude::*;

/// Hook to access the REST client.
#[hook]
pub fn use_api() -> ApiContext {
    use_context::<ApiContext>().expect("use_api must be used within an ApiProvider")
}
