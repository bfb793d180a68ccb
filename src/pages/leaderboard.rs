use crate::components::{CollectionView, LeaderboardTable};
use crate::model::LeaderboardEntry;
use yew::prelude::*;

#[function_component(LeaderboardPage)]
pub fn leaderboard_page() -> Html {
    let render = Callback::from(|entries: Vec<LeaderboardEntry>| html! {
        <LeaderboardTable {entries} />
    });

    html! {
        <CollectionView<LeaderboardEntry>
            title="🏆 Leaderboard"
            subtitle="Competitive rankings and achievements"
            {render}
        />
    }
}
