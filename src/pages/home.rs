use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

struct Feature {
    route: Route,
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        route: Route::Activities,
        icon: "🏃",
        title: "Activities",
        text: "Log your workouts and monitor your daily fitness activities.",
    },
    Feature {
        route: Route::Leaderboard,
        icon: "🏆",
        title: "Leaderboard",
        text: "Check the leaderboard and see how you rank against others.",
    },
    Feature {
        route: Route::Users,
        icon: "👤",
        title: "Users",
        text: "View all registered members and their team affiliations.",
    },
    Feature {
        route: Route::Workouts,
        icon: "💪",
        title: "Workouts",
        text: "Access personalized workout plans tailored to your goals.",
    },
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="container mt-5">
            <div class="jumbotron text-center">
                <h1 class="display-4">{"Welcome to OctoFit Tracker!"}</h1>
                <p class="lead">{"Track your fitness journey, compete with teams, and achieve your goals."}</p>
                <hr class="my-4" />
                <p>{"Use the navigation menu above to explore your fitness data."}</p>

                <div class="row mt-5">
                    {for FEATURES.iter().map(|feature| html! {
                        <div class="col-md-6 col-lg-3 mb-4">
                            <Link<Route> classes="card-link" to={feature.route.clone()}>
                                <div class="card clickable-card">
                                    <div class="card-body text-center">
                                        <h2 class="display-6">{feature.icon}</h2>
                                        <h5 class="card-title">{feature.title}</h5>
                                        <p class="card-text">{feature.text}</p>
                                    </div>
                                </div>
                            </Link<Route>>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
