use crate::pages::registry_page::RegistryPage;
use crate::shared::root::{use_root_services, WithRoot};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <WithRoot>
            <RegistryScreen />
        </WithRoot>
    }
}

/// Reads the services `WithRoot` provides and hands them to the page.
#[component]
fn RegistryScreen() -> impl IntoView {
    match use_root_services() {
        Some((config, source, store)) => view! {
            <RegistryPage config=config store=store source=source />
        }
        .into_any(),
        None => {
            log::error!("RegistryScreen rendered outside of WithRoot");
            view! { <div class="error">"Application services are not available"</div> }.into_any()
        }
    }
}
