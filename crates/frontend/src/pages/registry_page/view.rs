use super::state::{ActiveView, RegistryEvent};
use super::view_model::RegistryPageViewModel;
use crate::domain::a001_registry::ui::add_dialog::RegistryAddDialog;
use crate::domain::a001_registry::ui::list::RegistryTable;
use crate::domain::a002_curator::ui::list::CuratorTable;
use crate::domain::a003_claim::ui::list::ClaimTable;
use crate::shared::config::Config;
use crate::shared::data::SharedDataSource;
use crate::shared::responsive::{is_smartphone, use_viewport_width};
use crate::shared::store::RegistryStore;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Registry page. All collaborators come in as props: the registry list
/// through `store`, scoped data through `source`.
#[component]
pub fn RegistryPage(
    config: Config,
    store: RegistryStore,
    source: SharedDataSource,
) -> impl IntoView {
    let vm = RegistryPageViewModel::new(source);
    let on_event = Callback::new(move |event: RegistryEvent| vm.handle_event(event));
    let active_view = vm.active_view();
    // Opening the dialog must not rebuild the table beneath it.
    let table = Memo::new(move |_| active_view.with(ActiveView::table));
    let dialog_open = Signal::derive(move || active_view.with(ActiveView::create_dialog_open));

    store.refresh();

    let width = use_viewport_width();
    let breakpoint = config.layout.mobile_breakpoint_px;
    let root_class = move || {
        if is_smartphone(width.get(), breakpoint) {
            "registry-page registry-page--mobile"
        } else {
            "registry-page"
        }
    };

    view! {
        <div id="registry_page--list" class=root_class>
            <RegistryAddDialog
                open=dialog_open
                store=store
                on_close=Callback::new(move |_| vm.handle_event(RegistryEvent::CloseCreate))
            />

            <div class="registry-page__header">
                <h1 class="registry-page__title">{config.page.title.clone()}</h1>
            </div>

            <div class="registry-page__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.handle_event(RegistryEvent::OpenCreate)
                >
                    {config.page.add_button_label.clone()}
                </Button>
            </div>

            <div class="registry-page__content">
                {move || match table.get() {
                    ActiveView::Registries { .. } => view! {
                        <RegistryTable registries=store.registries() on_event=on_event />
                    }
                    .into_any(),
                    ActiveView::Curators(key) => view! {
                        <CuratorTable registry=key curators=vm.curators() on_event=on_event />
                    }
                    .into_any(),
                    ActiveView::Claims(key) => view! {
                        <ClaimTable registry=key claims=vm.claims() on_event=on_event />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
