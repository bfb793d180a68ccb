use crate::components::{ErrorAlert, LoadingSpinner, SuccessBanner, UserEditModal, UserTable};
use crate::hooks::use_users;
use crate::model::{Loadable, Record, User, UserField, UsersAction};
use yew::prelude::*;

/// Member list with the inline profile editor.
#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let users = use_users();
    let state = users.state.clone();

    match &state.status {
        Loadable::Loading => return html! { <LoadingSpinner noun={User::LOADING_NOUN} /> },
        Loadable::Failed(message) => return html! { <ErrorAlert message={message.clone()} /> },
        Loadable::Loaded(()) => {}
    }

    let on_edit = {
        let state = state.clone();
        Callback::from(move |user: User| state.dispatch(UsersAction::BeginEdit(user)))
    };
    let on_change = {
        let state = state.clone();
        Callback::from(move |(field, value): (UserField, String)| {
            state.dispatch(UsersAction::Edit(field, value))
        })
    };
    let on_cancel = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(UsersAction::Cancel))
    };
    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |seq: u32| state.dispatch(UsersAction::DismissBanner(seq)))
    };

    html! {
        <div class="container mt-5">
            <div class="mb-4">
                <h2>{"👤 Users"}</h2>
                <p class="text-muted">{"All registered OctoFit members"}</p>
            </div>

            if let Some(banner) = state.banner.clone() {
                <SuccessBanner {banner} {on_dismiss} />
            }

            <UserTable users={state.users.clone()} {on_edit} />

            if state.editor.is_open() {
                <UserEditModal
                    editor={state.editor.clone()}
                    teams={state.teams.clone()}
                    {on_change}
                    on_save={users.save.clone()}
                    {on_cancel}
                />
            }
        </div>
    }
}
