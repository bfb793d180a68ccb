use super::EmptyCard;
use crate::model::{format_date, Record, Team};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TeamCardsProps {
    pub teams: Vec<Team>,
}

#[function_component(TeamCards)]
pub fn team_cards(props: &TeamCardsProps) -> Html {
    html! {
        <div class="row">
            if props.teams.is_empty() {
                <EmptyCard noun={Team::NOUN} />
            } else {
                {for props.teams.iter().map(|team| html! {
                    <div key={team.id.to_string()} class="col-md-6 col-lg-4 mb-4">
                        <div class="card h-100">
                            <div class="card-body">
                                <h5 class="card-title">{&team.name}</h5>
                                <p class="card-text">{team.description()}</p>
                            </div>
                            <ul class="list-group list-group-flush">
                                <li class="list-group-item d-flex justify-content-between align-items-center">
                                    <strong>{"Members:"}</strong>
                                    <span class="badge bg-primary rounded-pill">{team.member_count()}</span>
                                </li>
                                <li class="list-group-item">
                                    <strong>{"Created:"}</strong>{" "}{format_date(&team.created_at)}
                                </li>
                            </ul>
                        </div>
                    </div>
                })}
            }
        </div>
    }
}
