use crate::components::{CollectionView, TeamCards};
use crate::model::Team;
use yew::prelude::*;

#[function_component(TeamsPage)]
pub fn teams_page() -> Html {
    let render = Callback::from(|teams: Vec<Team>| html! { <TeamCards {teams} /> });

    html! {
        <CollectionView<Team>
            title="👥 Teams"
            subtitle="Collaborate and compete with your team"
            {render}
        />
    }
}
