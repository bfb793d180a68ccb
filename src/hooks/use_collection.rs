use super::use_api;
use crate::api::{fetch_collection, ApiClient};
use crate::model::{Loadable, Record};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::{use_is_mounted, use_mount};

/// Fetches the collection of `T` once on mount.
///
/// A response that arrives after the component unmounted is dropped.
#[hook]
pub fn use_collection<T>() -> Loadable<Vec<T>>
where
    T: Record,
{
    let api = use_api();
    let state = use_state(Loadable::<Vec<T>>::default);
    let is_mounted = use_is_mounted();

    {
        let state = state.clone();
        use_mount(move || {
            spawn_local(async move {
                let client: &dyn ApiClient = api.client.as_ref();
                let result = fetch_collection::<T, dyn ApiClient>(client, &api.config).await;

                if !is_mounted() {
                    log::debug!("Dropping {} response, view is gone", T::NOUN);
                    return;
                }
                state.set(match result {
                    Ok(records) => Loadable::Loaded(records),
                    Err(err) => Loadable::Failed(err.message()),
                });
            });
        });
    }

    (*state).clone()
}
