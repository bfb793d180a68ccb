use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    pub noun: AttrValue,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class="container mt-5">
            <div class="text-center">
                <div class="spinner-border text-primary" role="status">
                    <span class="visually-hidden">{"Loading..."}</span>
                </div>
                <p class="mt-3">{loading_message(&props.noun)}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: AttrValue,
}

/// Blocking alert replacing a view whose fetch failed.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    html! {
        <div class="container mt-5">
            <div class="alert alert-danger" role="alert">
                <h4 class="alert-heading">{"Error!"}</h4>
                <p>{&props.message}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyRowProps {
    pub noun: AttrValue,
    pub colspan: usize,
}

#[function_component(EmptyRow)]
pub fn empty_row(props: &EmptyRowProps) -> Html {
    html! {
        <tr>
            <td colspan={props.colspan.to_string()} class="text-center py-5">
                <p class="text-muted mb-0">{empty_message(&props.noun)}</p>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyCardProps {
    pub noun: AttrValue,
}

#[function_component(EmptyCard)]
pub fn empty_card(props: &EmptyCardProps) -> Html {
    html! {
        <div class="col-12">
            <div class="text-center py-5">
                <p class="text-muted mb-0">{empty_message(&props.noun)}</p>
            </div>
        </div>
    }
}

pub fn loading_message(noun: &str) -> String {
    format!("Loading {noun}...")
}

pub fn empty_message(noun: &str) -> String {
    format!("No {noun} found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Activity, LeaderboardEntry, Record, User};

    #[test]
    fn placeholder_text() {
        assert_eq!(empty_message(Activity::NOUN), "No activities found");
        assert_eq!(
            empty_message(LeaderboardEntry::NOUN),
            "No leaderboard entries found"
        );
        assert_eq!(
            loading_message(LeaderboardEntry::LOADING_NOUN),
            "Loading leaderboard..."
        );
        assert_eq!(loading_message(User::LOADING_NOUN), "Loading users...");
    }
}
