use super::EmptyCard;
use crate::model::{format_date, Record, Workout};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WorkoutCardsProps {
    pub workouts: Vec<Workout>,
}

#[function_component(WorkoutCards)]
pub fn workout_cards(props: &WorkoutCardsProps) -> Html {
    html! {
        <div class="row">
            if props.workouts.is_empty() {
                <EmptyCard noun={Workout::NOUN} />
            } else {
                {for props.workouts.iter().map(|workout| html! {
                    <div key={workout.id.to_string()} class="col-md-6 col-lg-4 mb-4">
                        <div class="card h-100">
                            <div class="card-body">
                                <h5 class="card-title">{&workout.name}</h5>
                                <p class="card-text">{&workout.description}</p>
                            </div>
                            <ul class="list-group list-group-flush">
                                <li class="list-group-item d-flex justify-content-between align-items-center">
                                    <strong>{"Duration:"}</strong>
                                    <span class="badge bg-warning text-dark">{format!("{} min", workout.estimated_duration_minutes)}</span>
                                </li>
                                <li class="list-group-item d-flex justify-content-between align-items-center">
                                    <strong>{"Difficulty:"}</strong>
                                    <span class="badge bg-info">{&workout.difficulty_level}</span>
                                </li>
                                <li class="list-group-item">
                                    <strong>{"Type:"}</strong>{" "}{&workout.category}
                                </li>
                                <li class="list-group-item">
                                    <strong>{"Created:"}</strong>{" "}{format_date(&workout.created_at)}
                                </li>
                            </ul>
                        </div>
                    </div>
                })}
            }
        </div>
    }
}
