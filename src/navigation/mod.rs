mod dnd;
mod form;
mod item;

pub use form::NavigationForm;
pub use item::SortableItem;

use crate::components::ui::{Alert, AlertDescription, Button, ButtonSize, ButtonVariant};
use crate::state::{NavContext, UiKey};
use icons::CirclePlus;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// The whole editor: empty state, the sortable tree and the root add form.
#[component]
pub fn NavigationManager() -> impl IntoView {
    let state = expect_context::<NavContext>().0;

    let root_ids = Memo::new(move |_| {
        state
            .items
            .with(|items| items.iter().map(|n| n.id.clone()).collect::<Vec<_>>())
    });
    let is_empty = move || root_ids.with(|ids| ids.is_empty());
    let show_add_form = move || state.ui.with(|ui| ui.show_add_form);

    let root_pending = Signal::derive(move || state.ui.with(|ui| ui.is_pending(&UiKey::Root)));
    let root_error = move || state.ui.with(|ui| ui.error_of(&UiKey::Root));

    let on_add_click = move |_: web_sys::MouseEvent| state.ui.update(|ui| ui.open_add_form());
    let on_add_root = Callback::new(move |input| state.add_root(input));
    let on_cancel_root = Callback::new(move |_: ()| state.ui.update(|ui| ui.close_add_form()));

    // Esc closes the root add form unless its save is still in flight.
    let _key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Escape" || !state.ui.with_untracked(|ui| ui.show_add_form) {
            return;
        }
        if root_pending.get_untracked() {
            return;
        }
        ev.prevent_default();
        state.ui.update(|ui| ui.close_add_form());
    });

    let root_error_view = move || {
        root_error().map(|msg| {
            view! {
                <Alert class="mt-3">
                    <AlertDescription>{msg}</AlertDescription>
                </Alert>
            }
        })
    };

    let footer = move || {
        view! {
            <div class="bg-[#F9FAFB] p-5 border-t border-[#D0D5DD] rounded-b-lg">
                <Button variant=ButtonVariant::Outline size=ButtonSize::Default on:click=on_add_click>
                    "Dodaj pozycję menu"
                </Button>
            </div>
        }
    };

    let empty_state = move || {
        view! {
            <div class="flex flex-col gap-4 px-4 py-6 items-center bg-[#F9FAFB] rounded-lg border-[#EAECF0]">
                <div class="text-center">
                    <p class="text-base font-semibold text-gray-900 leading-6">"Menu jest puste"</p>
                    <p class="text-sm text-[#475467] leading-5">
                        "W tym menu nie ma jeszcze żadnych linków."
                    </p>
                </div>
                <Button variant=ButtonVariant::Default size=ButtonSize::Default on:click=on_add_click>
                    <CirclePlus class="w-5 h-5" />
                    "Dodaj pozycję menu"
                </Button>
            </div>
        }
    };

    let tree_view = move || {
        view! {
            <div>
                <For
                    each=move || root_ids.get()
                    key=|id| id.clone()
                    children=move |id| view! { <SortableItem nav_id=id depth=0 /> }
                />
            </div>
            <Show
                when=show_add_form
                fallback=footer
            >
                <div>
                    <div class="p-5 bg-[#F9FAFB]">
                        <NavigationForm
                            on_submit=on_add_root
                            on_cancel=on_cancel_root
                            inline=true
                            is_first=true
                            pending=root_pending
                        />
                        {root_error_view}
                    </div>
                    {footer()}
                </div>
            </Show>
        }
    };

    view! {
        <div class="max-w-[1208px] mx-auto py-8 px-6">
            <div class="space-y-6">
                <Show when=move || !(is_empty() && show_add_form())>
                    <div class="bg-white rounded-lg border border-[#D0D5DD]">
                        <Show when=move || !is_empty() fallback=empty_state>
                            {tree_view()}
                        </Show>
                    </div>
                </Show>

                <Show when=move || is_empty() && show_add_form()>
                    <NavigationForm
                        on_submit=on_add_root
                        on_cancel=on_cancel_root
                        inline=false
                        is_first=true
                        pending=root_pending
                    />
                    {root_error_view}
                </Show>
            </div>
        </div>
    }
}
