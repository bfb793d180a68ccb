use crate::api::{ApiClient, HttpClient};
use crate::config::Config;
use std::rc::Rc;
use yew::prelude::*;

/// REST client and configuration shared by every page.
#[derive(Clone)]
pub struct ApiContext {
    pub client: Rc<dyn ApiClient>,
    pub config: Rc<Config>,
}

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client) && self.config == other.config
    }
}

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    #[prop_or_default]
    pub config: Option<Config>,
    pub children: Children,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    let context = use_memo(props.config.clone(), |config| {
        let config = config.clone().unwrap_or_default();
        log::info!("Using API at {}", config.api_base_url);
        ApiContext {
            client: Rc::new(HttpClient::new()) as Rc<dyn ApiClient>,
            config: Rc::new(config),
        }
    });

    html! {
        <ContextProvider<ApiContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<ApiContext>>
    }
}
