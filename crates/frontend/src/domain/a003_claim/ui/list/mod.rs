use crate::pages::registry_page::state::RegistryEvent;
use crate::shared::components::LoadStatus;
use crate::shared::data::Loadable;
use contracts::domain::a001_registry::aggregate::RegistryKey;
use contracts::domain::a003_claim::aggregate::{ClaimList, ClaimRace, ClaimSet, ClaimStatus};
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, Table, TableBody, TableCell,
    TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

fn status_badge(status: ClaimStatus) -> impl IntoView {
    let color = match status {
        ClaimStatus::Pending => BadgeColor::Warning,
        ClaimStatus::Resolved => BadgeColor::Success,
    };
    view! {
        <Badge
            appearance=BadgeAppearance::Tint
            color=color
            class=format!("claim-status claim-status--{}", status.code())
        >
            {status.display_name()}
        </Badge>
    }
}

/// Claim races and claim sets of one registry.
#[component]
#[allow(non_snake_case)]
pub fn ClaimTable(
    registry: RegistryKey,
    claims: Signal<Loadable<ClaimList>>,
    on_event: Callback<RegistryEvent>,
) -> impl IntoView {
    let list = Memo::new(move |_| claims.with(|c| c.loaded().cloned()));
    let races = move || list.get().map(|l| l.claim_races).unwrap_or_default();
    let sets = move || list.get().map(|l| l.claim_sets).unwrap_or_default();
    let is_empty = move || list.with(|l| l.as_ref().is_some_and(ClaimList::is_empty));
    let summary = move || {
        list.with(|l| {
            l.as_ref()
                .map(|l| format!("{} pending", l.pending_count()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="claim-table">
            <div class="claim-table__header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_event.run(RegistryEvent::Back)
                >
                    "← Back"
                </Button>
                <h3>{format!("Claims of {}", registry)}</h3>
                <span class="claim-table__summary">{summary}</span>
            </div>

            <LoadStatus state=claims />

            <Show when=is_empty>
                <div class="claim-table__empty">"No claims have been filed for this registry"</div>
            </Show>

            <h4>"Claim races"</h4>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Race"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Subject"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Candidates"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=races
                        key=|r| r.id.clone()
                        children=move |r: ClaimRace| {
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{r.id}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{r.subject}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{r.candidates.join(", ")}</TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{status_badge(r.status)}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <h4>"Claim sets"</h4>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Set"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Submitter"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=260.0>"Claims"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=sets
                        key=|s| s.id.clone()
                        children=move |s: ClaimSet| {
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{s.id}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{s.submitter}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{s.claims.join(", ")}</TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{status_badge(s.status)}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
