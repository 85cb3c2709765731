use crate::shared::data::Loadable;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarBody, MessageBarIntent, Spinner};

/// Spinner while `state` is loading, error banner when it failed, nothing
/// otherwise.
#[component]
pub fn LoadStatus<T>(state: Signal<Loadable<T>>) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    move || {
        state.with(|s| match s {
            Loadable::Loading => view! {
                <div class="load-status load-status--loading">
                    <Spinner />
                </div>
            }
            .into_any(),
            Loadable::Failed(message) => {
                let message = message.clone();
                view! {
                    <div class="load-status load-status--error">
                        <MessageBar intent=MessageBarIntent::Error>
                            <MessageBarBody>{message}</MessageBarBody>
                        </MessageBar>
                    </div>
                }
                .into_any()
            }
            Loadable::Idle | Loadable::Loaded(_) => view! { <></> }.into_any(),
        })
    }
}
