use crate::model::{EditorState, Team, UserField};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserEditModalProps {
    pub editor: EditorState,
    pub teams: Vec<Team>,
    pub on_change: Callback<(UserField, String)>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn input_class(base: &'static str, invalid: bool) -> Classes {
    classes!(base, invalid.then_some("is-invalid"))
}

/// Modal form editing the draft held by the users view.
#[function_component(UserEditModal)]
pub fn user_edit_modal(props: &UserEditModalProps) -> Html {
    let Some(draft) = props.editor.draft() else {
        return html! {};
    };
    let submitting = props.editor.is_submitting();
    let error = |field: UserField| props.editor.field_error(field).map(str::to_string);

    let on_input = |field: UserField| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    let on_team_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((UserField::Team, select.value()));
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_save = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };

    let feedback = |field: UserField| match error(field) {
        Some(message) => html! { <div class="invalid-feedback">{message}</div> },
        None => html! {},
    };

    html! {
        <div class="modal show d-block" tabindex="-1" style="background-color: rgba(0,0,0,0.5)">
            <div class="modal-dialog modal-dialog-centered">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{"Edit User Profile"}</h5>
                        <button type="button" class="btn-close" onclick={on_cancel.clone()} disabled={submitting}></button>
                    </div>
                    <div class="modal-body">
                        if let Some(message) = props.editor.server_error() {
                            <div class="alert alert-danger" role="alert">{message}</div>
                        }

                        <form>
                            <div class="mb-3">
                                <label for="name" class="form-label">{"Name "}<span class="text-danger">{"*"}</span></label>
                                <input
                                    type="text"
                                    class={input_class("form-control", error(UserField::Name).is_some())}
                                    id="name"
                                    name={UserField::Name.as_str()}
                                    value={draft.name.clone()}
                                    oninput={on_input(UserField::Name)}
                                    disabled={submitting}
                                />
                                {feedback(UserField::Name)}
                            </div>

                            <div class="mb-3">
                                <label for="email" class="form-label">{"Email "}<span class="text-danger">{"*"}</span></label>
                                <input
                                    type="email"
                                    class={input_class("form-control", error(UserField::Email).is_some())}
                                    id="email"
                                    name={UserField::Email.as_str()}
                                    value={draft.email.clone()}
                                    oninput={on_input(UserField::Email)}
                                    disabled={submitting}
                                />
                                {feedback(UserField::Email)}
                            </div>

                            <div class="mb-3">
                                <label for="team" class="form-label">{"Team"}</label>
                                <select
                                    class={input_class("form-select", error(UserField::Team).is_some())}
                                    id="team"
                                    name={UserField::Team.as_str()}
                                    onchange={on_team_change}
                                    disabled={submitting}
                                >
                                    <option value="" selected={draft.team.is_empty()}>{"No Team"}</option>
                                    {for props.teams.iter().map(|team| html! {
                                        <option
                                            key={team.id.to_string()}
                                            value={team.name.clone()}
                                            selected={team.name == draft.team}
                                        >
                                            {&team.name}
                                        </option>
                                    })}
                                </select>
                                {feedback(UserField::Team)}
                            </div>

                            <div class="mb-3">
                                <label for="total_points" class="form-label">{"Total Points"}</label>
                                <input
                                    type="number"
                                    class={input_class("form-control", error(UserField::TotalPoints).is_some())}
                                    id="total_points"
                                    name={UserField::TotalPoints.as_str()}
                                    value={draft.value(UserField::TotalPoints)}
                                    oninput={on_input(UserField::TotalPoints)}
                                    min="0"
                                    disabled={submitting}
                                />
                                {feedback(UserField::TotalPoints)}
                            </div>
                        </form>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={submitting}>
                            {"Cancel"}
                        </button>
                        <button type="button" class="btn btn-primary" onclick={on_save} disabled={submitting}>
                            if submitting {
                                <span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>
                                {"Saving..."}
                            } else {
                                {"Save Changes"}
                            }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
