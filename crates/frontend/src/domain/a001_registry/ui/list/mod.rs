pub mod state;

use self::state::{create_state, RegistryListState};
use crate::pages::registry_page::state::RegistryEvent;
use crate::shared::components::LoadStatus;
use crate::shared::data::Loadable;
use crate::shared::list_utils::{
    filter_list, get_sort_indicator, sort_list, toggle_sort, Searchable, Sortable,
};
use contracts::domain::a001_registry::aggregate::Registry;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Input, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

#[derive(Clone, Debug, PartialEq)]
pub struct RegistryRow {
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl From<&Registry> for RegistryRow {
    fn from(r: &Registry) -> Self {
        Self {
            name: r.name.to_string(),
            description: r.description.clone(),
            created_at: format_timestamp(r.created_at),
        }
    }
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

impl Sortable for RegistryRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "description" => self
                .description
                .to_lowercase()
                .cmp(&other.description.to_lowercase()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for RegistryRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.description.to_lowercase().contains(filter)
    }
}

/// Rows to display for `registries` under `filter` and the current sort.
pub fn visible_rows(
    registries: &[Registry],
    state: &RegistryListState,
    filter: &str,
) -> Vec<RegistryRow> {
    let rows: Vec<RegistryRow> = registries.iter().map(RegistryRow::from).collect();
    let mut rows = filter_list(rows, filter);
    sort_list(&mut rows, &state.sort_field, state.sort_ascending);
    rows
}

/// Emit `make(name)` if `name` is a valid registry key.
fn emit(
    on_event: Callback<RegistryEvent>,
    name: &str,
    make: fn(&str) -> Result<RegistryEvent, contracts::shared::error::ContractError>,
) {
    match make(name) {
        Ok(event) => on_event.run(event),
        Err(e) => log::warn!("Ignoring selection of '{}': {}", name, e),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RegistryTable(
    registries: Signal<Loadable<Vec<Registry>>>,
    on_event: Callback<RegistryEvent>,
) -> impl IntoView {
    let state = create_state();
    let filter = RwSignal::new(String::new());

    let rows = Memo::new(move |_| {
        state.with(|list_state| {
            filter.with(|filter| {
                registries.with(|r| {
                    r.loaded()
                        .map(|items| visible_rows(items, list_state, filter))
                        .unwrap_or_default()
                })
            })
        })
    });

    let is_empty = move || registries.with(|r| r.loaded().is_some()) && rows.with(Vec::is_empty);

    let sort_by = move |field: &'static str| {
        state.update(|s| {
            let (next_field, ascending) = toggle_sort(&s.sort_field, s.sort_ascending, field);
            s.sort_field = next_field;
            s.sort_ascending = ascending;
        });
    };

    let indicator = move |field: &'static str| {
        move || {
            state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))
        }
    };

    view! {
        <div class="registry-table">
            <div class="registry-table__toolbar">
                <Input value=filter placeholder="Filter (min. 3 characters)" />
            </div>

            <LoadStatus state=registries />

            <Show when=is_empty>
                <div class="registry-table__empty">"No registries to display"</div>
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=180.0>
                            <div class="sortable-header" on:click=move |_| sort_by("name")>
                                "Name" {indicator("name")}
                            </div>
                        </TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=260.0>
                            <div class="sortable-header" on:click=move |_| sort_by("description")>
                                "Description" {indicator("description")}
                            </div>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=140.0>
                            <div class="sortable-header" on:click=move |_| sort_by("created_at")>
                                "Created" {indicator("created_at")}
                            </div>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=200.0>"Open"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| row.name.clone()
                        children=move |row: RegistryRow| {
                            let name_for_curators = row.name.clone();
                            let name_for_claims = row.name.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <strong>{row.name}</strong>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{row.description}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{row.created_at}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| emit(on_event, &name_for_curators, RegistryEvent::show_curators)
                                            >
                                                "Curators"
                                            </Button>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| emit(on_event, &name_for_claims, RegistryEvent::show_claims)
                                            >
                                                "Claims"
                                            </Button>
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
