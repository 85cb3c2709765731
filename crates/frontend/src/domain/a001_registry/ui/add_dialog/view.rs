use super::view_model::RegistryAddViewModel;
use crate::shared::store::RegistryStore;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Dialog, DialogActions, DialogBody, DialogContent, DialogSurface,
    DialogTitle, Input, MessageBar, MessageBarBody, MessageBarIntent, Textarea,
};

/// Dialog for creating a registry.
///
/// Visibility is owned by the caller (`open`); the dialog reports every way
/// of closing it (cancel, overlay click, successful save) through `on_close`.
#[component]
pub fn RegistryAddDialog(
    #[prop(into)] open: Signal<bool>,
    store: RegistryStore,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = RegistryAddViewModel::new();

    // thaw's Dialog needs a writable model; mirror `open` into it and turn a
    // close from inside the dialog into `on_close`.
    let dialog_open = RwSignal::new(open.get_untracked());
    Effect::new(move |_| dialog_open.set(open.get()));
    Effect::new(move |prev: Option<bool>| {
        let now = dialog_open.get();
        if prev == Some(true) && !now && open.get_untracked() {
            vm.reset();
            on_close.run(());
        }
        now
    });

    let cancel = move |_| {
        vm.reset();
        on_close.run(());
    };

    let save = move |_| vm.save_command(store, on_close);

    view! {
        <Dialog open=dialog_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add Registry"</DialogTitle>
                    <DialogContent>
                        <div class="details-form">
                            <div class="form-group">
                                <label for="registry-name">"Name"</label>
                                <Input
                                    value=vm.name
                                    placeholder="Unique registry name"
                                    attr:id="registry-name"
                                />
                            </div>
                            <div class="form-group">
                                <label for="registry-description">"Description"</label>
                                <Textarea
                                    value=vm.description
                                    placeholder="What does this registry collect? (optional)"
                                    attr:id="registry-description"
                                    attr:rows=3
                                />
                            </div>
                            {move || vm.error.get().map(|e| view! {
                                <MessageBar intent=MessageBarIntent::Error>
                                    <MessageBarBody>{e}</MessageBarBody>
                                </MessageBar>
                            })}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=cancel>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=save
                            disabled=Signal::derive(move || !vm.can_submit())
                        >
                            {move || if vm.saving.get() { "Saving..." } else { "Create" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
