use crate::pages::registry_page::state::RegistryEvent;
use crate::shared::components::LoadStatus;
use crate::shared::data::Loadable;
use contracts::domain::a001_registry::aggregate::RegistryKey;
use contracts::domain::a002_curator::aggregate::Curator;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

/// Curators of one registry.
#[component]
#[allow(non_snake_case)]
pub fn CuratorTable(
    registry: RegistryKey,
    curators: Signal<Loadable<Vec<Curator>>>,
    on_event: Callback<RegistryEvent>,
) -> impl IntoView {
    let is_empty = move || curators.with(|c| c.loaded().is_some_and(Vec::is_empty));
    let items = move || curators.with(|c| c.loaded().cloned().unwrap_or_default());

    view! {
        <div class="curator-table">
            <div class="curator-table__header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_event.run(RegistryEvent::Back)
                >
                    "← Back"
                </Button>
                <h3>{format!("Curators of {}", registry)}</h3>
            </div>

            <LoadStatus state=curators />

            <Show when=is_empty>
                <div class="curator-table__empty">"This registry has no curators yet"</div>
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=180.0>"Name"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=320.0>"Address"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=items
                        key=|c| c.id.as_string()
                        children=move |c: Curator| {
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{c.name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <code>{c.address}</code>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
