use crate::model::{Banner, BANNER_TIMEOUT_MS};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SuccessBannerProps {
    pub banner: Banner,
    pub on_dismiss: Callback<u32>,
}

/// Transient confirmation; dismisses itself after [`BANNER_TIMEOUT_MS`].
#[function_component(SuccessBanner)]
pub fn success_banner(props: &SuccessBannerProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.banner.seq, move |seq| {
            let seq = *seq;
            let timeout = Timeout::new(BANNER_TIMEOUT_MS, move || on_dismiss.emit(seq));
            move || drop(timeout)
        });
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let seq = props.banner.seq;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(seq))
    };

    html! {
        <div class="alert alert-success alert-dismissible fade show" role="alert">
            {&props.banner.message}
            <button type="button" class="btn-close" {onclick}></button>
        </div>
    }
}
