use super::EmptyRow;
use crate::model::{Activity, Record};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityTableProps {
    pub activities: Vec<Activity>,
}

#[function_component(ActivityTable)]
pub fn activity_table(props: &ActivityTableProps) -> Html {
    html! {
        <div class="table-responsive">
            <table class="table table-hover">
                <thead>
                    <tr>
                        <th scope="col">{"#"}</th>
                        <th scope="col">{"User"}</th>
                        <th scope="col">{"Activity Type"}</th>
                        <th scope="col">{"Duration"}</th>
                        <th scope="col">{"Points"}</th>
                        <th scope="col">{"Team"}</th>
                        <th scope="col">{"Date"}</th>
                    </tr>
                </thead>
                <tbody>
                    if props.activities.is_empty() {
                        <EmptyRow noun={Activity::NOUN} colspan={7} />
                    } else {
                        {for props.activities.iter().map(|activity| html! {
                            <tr key={activity.id.to_string()}>
                                <td><strong>{activity.id}</strong></td>
                                <td>{&activity.user_name}</td>
                                <td><span class="badge bg-secondary">{&activity.activity_type}</span></td>
                                <td>{format!("{} min", activity.duration_minutes)}</td>
                                <td><span class="badge bg-info text-dark">{format!("{} pts", activity.points_earned)}</span></td>
                                <td>{activity.team_label()}</td>
                                <td>{&activity.date}</td>
                            </tr>
                        })}
                    }
                </tbody>
            </table>
        </div>
    }
}
