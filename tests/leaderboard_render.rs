#![cfg(all(target_arch = "wasm32", feature = "yew"))]

use octofit_tracker::components::LeaderboardTable;
use octofit_tracker::model::LeaderboardEntry;
use wasm_bindgen_test::*;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn entries(count: i64) -> Vec<LeaderboardEntry> {
    (1..=count)
        .map(|id| LeaderboardEntry {
            id,
            entity_name: format!("Hero {id}"),
            total_points: 500 - id,
            rank: Some(count - id + 1),
            ..Default::default()
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct HostProps {
    entries: Vec<LeaderboardEntry>,
}

#[function_component(Host)]
fn host(props: &HostProps) -> Html {
    html! { <LeaderboardTable entries={props.entries.clone()} /> }
}

fn mount(entries: Vec<LeaderboardEntry>) -> web_sys::Element {
    console_error_panic_hook::set_once();
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    yew::Renderer::<Host>::with_root_and_props(root.clone(), HostProps { entries }).render();
    root
}

#[wasm_bindgen_test]
async fn ranks_follow_served_order() {
    let root = mount(entries(5));
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;

    let ranks = root.query_selector_all(".octofit-leaderboard__rank").unwrap();
    let badges: Vec<String> = (0..ranks.length())
        .filter_map(|i| ranks.item(i))
        .filter_map(|node| node.text_content())
        .collect();

    assert_eq!(badges, vec!["🥇", "🥈", "🥉", "4", "5"]);
}

#[wasm_bindgen_test]
async fn empty_leaderboard_shows_placeholder() {
    let root = mount(Vec::new());
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;

    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("No leaderboard entries found"));
    assert_eq!(root.query_selector_all("tbody tr").unwrap().length(), 1);
}
