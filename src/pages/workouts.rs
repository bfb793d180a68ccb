use crate::components::{CollectionView, WorkoutCards};
use crate::model::Workout;
use yew::prelude::*;

#[function_component(WorkoutsPage)]
pub fn workouts_page() -> Html {
    let render = Callback::from(|workouts: Vec<Workout>| html! {
        <WorkoutCards {workouts} />
    });

    html! {
        <CollectionView<Workout>
            title="💪 Personalized Workouts"
            subtitle="Custom workout plans tailored to your fitness goals"
            {render}
        />
    }
}
