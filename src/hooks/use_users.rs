use super::use_api;
use crate::api::{load_users_page, submit_edit, ApiClient};
use crate::model::{UsersAction, UsersState};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::{use_is_mounted, use_mount};

impl Reducible for UsersState {
    type Action = UsersAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct UsersHandle {
    pub state: UseReducerHandle<UsersState>,
    /// Validates the open draft and, when valid, sends it.
    pub save: Callback<()>,
}

/// Loads users and teams on mount and drives the edit workflow.
#[hook]
pub fn use_users() -> UsersHandle {
    let api = use_api();
    let state = use_reducer(UsersState::default);
    let is_mounted = use_is_mounted();

    {
        let api = api.clone();
        let state = state.clone();
        use_mount(move || {
            spawn_local(async move {
                let client: &dyn ApiClient = api.client.as_ref();
                let result = load_users_page(client, &api.config).await;

                if !is_mounted() {
                    log::debug!("Dropping users response, view is gone");
                    return;
                }
                state.dispatch(match result {
                    Ok((users, teams)) => UsersAction::Loaded { users, teams },
                    Err(err) => UsersAction::LoadFailed(err.message()),
                });
            });
        });
    }

    let save = {
        let state = state.clone();
        Callback::from(move |()| {
            let (id, patch) = match state.prepare_save() {
                Ok(request) => request,
                Err(invalid) => {
                    state.dispatch(invalid);
                    return;
                }
            };

            state.dispatch(UsersAction::SaveStarted);
            let state = state.clone();
            let api = api.clone();
            spawn_local(async move {
                let client: &dyn ApiClient = api.client.as_ref();
                let outcome = submit_edit(client, &api.config, id, patch).await;
                state.dispatch(outcome);
            });
        })
    };

    UsersHandle { state, save }
}
