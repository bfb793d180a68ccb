use super::EmptyRow;
use crate::model::{format_date, Record, User};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserTableProps {
    pub users: Vec<User>,
    pub on_edit: Callback<User>,
}

#[function_component(UserTable)]
pub fn user_table(props: &UserTableProps) -> Html {
    html! {
        <div class="table-responsive">
            <table class="table table-hover">
                <thead>
                    <tr>
                        <th scope="col">{"#"}</th>
                        <th scope="col">{"Name"}</th>
                        <th scope="col">{"Email"}</th>
                        <th scope="col">{"Team"}</th>
                        <th scope="col">{"Total Points"}</th>
                        <th scope="col">{"Member Since"}</th>
                        <th scope="col">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    if props.users.is_empty() {
                        <EmptyRow noun={User::NOUN} colspan={7} />
                    } else {
                        {for props.users.iter().map(|user| {
                            let onclick = {
                                let user = user.clone();
                                let on_edit = props.on_edit.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(user.clone()))
                            };
                            let team_badge = if user.has_team() { "badge bg-success" } else { "badge bg-secondary" };

                            html! {
                                <tr key={user.id.to_string()}>
                                    <td><strong>{user.id}</strong></td>
                                    <td><strong>{&user.name}</strong></td>
                                    <td>{&user.email}</td>
                                    <td><span class={team_badge}>{user.team_label()}</span></td>
                                    <td><span class="badge bg-primary">{user.total_points}</span></td>
                                    <td>{format_date(&user.created_at)}</td>
                                    <td>
                                        <button class="btn btn-sm btn-outline-primary" {onclick}>
                                            {"✏️ Edit"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    }
                </tbody>
            </table>
        </div>
    }
}
