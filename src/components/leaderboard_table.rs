use super::EmptyRow;
use crate::model::{format_date, ranked, LeaderboardEntry, Record};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LeaderboardTableProps {
    pub entries: Vec<LeaderboardEntry>,
}

/// Ranking table; rank comes from the served order.
#[function_component(LeaderboardTable)]
pub fn leaderboard_table(props: &LeaderboardTableProps) -> Html {
    html! {
        <div class="table-responsive">
            <table class="table table-hover">
                <thead>
                    <tr>
                        <th scope="col">{"Rank"}</th>
                        <th scope="col">{"User"}</th>
                        <th scope="col">{"Team"}</th>
                        <th scope="col">{"Total Points"}</th>
                        <th scope="col">{"Activities"}</th>
                        <th scope="col">{"Last Updated"}</th>
                    </tr>
                </thead>
                <tbody>
                    if props.entries.is_empty() {
                        <EmptyRow noun={LeaderboardEntry::NOUN} colspan={6} />
                    } else {
                        {for ranked(&props.entries).into_iter().map(|(badge, entry)| html! {
                            <tr key={entry.id.to_string()} class="octofit-leaderboard__row">
                                <td><strong class="octofit-leaderboard__rank" style="font-size: 1.2rem">{badge}</strong></td>
                                <td><strong>{&entry.entity_name}</strong></td>
                                <td>{entry.team_label()}</td>
                                <td><span class="badge bg-primary" style="font-size: 1rem">{format!("{} pts", entry.total_points)}</span></td>
                                <td>{format!("{} activities", entry.activities_count())}</td>
                                <td>{format_date(&entry.updated_at)}</td>
                            </tr>
                        })}
                    }
                </tbody>
            </table>
        </div>
    }
}
