use super::{ErrorAlert, LoadingSpinner};
use crate::hooks::use_collection;
use crate::model::{Loadable, Record};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CollectionViewProps<T>
where
    T: Record,
{
    pub title: AttrValue,
    pub subtitle: AttrValue,
    /// Renders the loaded records, including the empty case.
    pub render: Callback<Vec<T>, Html>,
}

/// Page that fetches one collection and switches between the loading, error
/// and loaded renderings.
#[function_component(CollectionView)]
pub fn collection_view<T>(props: &CollectionViewProps<T>) -> Html
where
    T: Record,
{
    let records = use_collection::<T>();

    match records {
        Loadable::Loading => html! { <LoadingSpinner noun={T::LOADING_NOUN} /> },
        Loadable::Failed(message) => html! { <ErrorAlert message={message} /> },
        Loadable::Loaded(records) => html! {
            <div class="container mt-5">
                <div class="mb-4">
                    <h2>{&props.title}</h2>
                    <p class="text-muted">{&props.subtitle}</p>
                </div>
                {props.render.emit(records)}
            </div>
        },
    }
}
