use crate::components::{ActivityTable, CollectionView};
use crate::model::Activity;
use yew::prelude::*;

#[function_component(ActivitiesPage)]
pub fn activities_page() -> Html {
    let render = Callback::from(|activities: Vec<Activity>| html! {
        <ActivityTable {activities} />
    });

    html! {
        <CollectionView<Activity>
            title="🏃 Activities"
            subtitle="Track all fitness activities and workouts"
            {render}
        />
    }
}
