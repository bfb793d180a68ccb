use crate::components::NavBar;
use crate::pages::{
    ActivitiesPage, HomePage, LeaderboardPage, TeamsPage, UsersPage, WorkoutsPage,
};
use crate::providers::ApiProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/activities")]
    Activities,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/teams")]
    Teams,
    #[at("/users")]
    Users,
    #[at("/workouts")]
    Workouts,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    log::debug!("Navigating to {:?}", route);
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Activities => html! { <ActivitiesPage /> },
        Route::Leaderboard => html! { <LeaderboardPage /> },
        Route::Teams => html! { <TeamsPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::Workouts => html! { <WorkoutsPage /> },
        Route::NotFound => html! {
            <div class="container mt-5">
                <div class="alert alert-warning" role="alert">
                    {"Page not found. Use the navigation menu above."}
                </div>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ApiProvider>
                <div class="App">
                    <NavBar />
                    <Switch<Route> render={switch} />
                </div>
            </ApiProvider>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Users.to_path(), "/users");
        assert_eq!(Route::Workouts.to_path(), "/workouts");
    }

    #[test]
    fn not_found_route() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
