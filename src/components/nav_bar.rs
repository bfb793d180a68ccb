use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub const NAV_LINKS: [(Route, &str); 5] = [
    (Route::Activities, "Activities"),
    (Route::Leaderboard, "Leaderboard"),
    (Route::Teams, "Teams"),
    (Route::Users, "Users"),
    (Route::Workouts, "Workouts"),
];

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <div class="container-fluid">
                <Link<Route> classes="navbar-brand" to={Route::Home}>
                    <img src="/octofitapp-small.png" alt="OctoFit Logo" class="navbar-logo" />
                    <strong>{"OctoFit Tracker"}</strong>
                </Link<Route>>
                <div class="navbar-collapse" id="navbarNav">
                    <ul class="navbar-nav">
                        {for NAV_LINKS.iter().map(|(route, label)| html! {
                            <li class="nav-item">
                                <Link<Route> classes="nav-link" to={route.clone()}>{*label}</Link<Route>>
                            </li>
                        })}
                    </ul>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_cover_every_collection_page() {
        let paths: Vec<String> = NAV_LINKS.iter().map(|(route, _)| route.to_path()).collect();
        assert_eq!(
            paths,
            vec!["/activities", "/leaderboard", "/teams", "/users", "/workouts"]
        );
    }
}
